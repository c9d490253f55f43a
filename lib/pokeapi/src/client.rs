use crate::{
    PokeApiError, Result,
    model::{EvolutionChain, Pokemon, Species},
};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// The four lookups one search needs.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Primary lookup by lower-cased name or numeric id.
    async fn pokemon(&self, query: &str) -> Result<Pokemon>;

    async fn species(&self, url: &str) -> Result<Species>;

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain>;

    /// Raw image bytes, undecoded.
    async fn sprite(&self, url: &str) -> Result<Bytes>;
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct PokeApiClient {
    base_url: String,
    http: Client,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<PokeApiClient> {
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let http = cutil::http::client(&user_agent, timeout)
            .map_err(|e| PokeApiError::ClientError(e.to_string()))?;

        Ok(PokeApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn pokemon_url(&self, query: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, query)
    }

    async fn fetch(&self, url: &str) -> Result<Bytes> {
        log::debug!("GET {url}");

        let response =
            self.http
                .get(url)
                .send()
                .await
                .map_err(|e| PokeApiError::RequestError {
                    error: e,
                    url: url.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokeApiError::StatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| PokeApiError::RequestError {
                error: e,
                url: url.to_string(),
            })
    }
}

#[async_trait]
impl PokeApi for PokeApiClient {
    async fn pokemon(&self, query: &str) -> Result<Pokemon> {
        let url = self.pokemon_url(query);

        match self.fetch(&url).await {
            Err(PokeApiError::StatusError { status, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                Err(PokeApiError::NotFound(query.to_string()))
            }
            Err(e) => Err(e),
            Ok(body) => decode(&url, &body),
        }
    }

    async fn species(&self, url: &str) -> Result<Species> {
        decode(url, &self.fetch(url).await?)
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain> {
        decode(url, &self.fetch(url).await?)
    }

    async fn sprite(&self, url: &str) -> Result<Bytes> {
        self.fetch(url).await
    }
}

pub fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| PokeApiError::DecodeError {
        error: e.to_string(),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_url() -> anyhow::Result<()> {
        let client = PokeApiClient::new(DEFAULT_BASE_URL, None)?;
        assert_eq!(
            "https://pokeapi.co/api/v2/pokemon/bulbasaur",
            client.pokemon_url("bulbasaur")
        );

        let client = PokeApiClient::new("http://localhost:8080/api/v2/", None)?;
        assert_eq!(
            "http://localhost:8080/api/v2/pokemon/25",
            client.pokemon_url("25")
        );
        Ok(())
    }

    #[test]
    fn test_decode_error_names_url() {
        let err = decode::<Species>("http://x/species/1", b"not json").unwrap_err();
        match err {
            PokeApiError::DecodeError { url, .. } => assert_eq!("http://x/species/1", url),
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_decode_missing_field() {
        assert!(matches!(
            decode::<EvolutionChain>("u", br#"{"id": 1}"#),
            Err(PokeApiError::DecodeError { .. })
        ));
    }
}
