#![windows_subsystem = "windows"]

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    extern crate pokedex;

    rustls::crypto::CryptoProvider::install_default(
        rustls::crypto::ring::default_provider().into(),
    )
    .map_err(|_| anyhow::anyhow!("failed to set crypto provider"))?;

    pokedex::desktop_main().await
}
