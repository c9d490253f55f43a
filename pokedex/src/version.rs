pub static VERSION: &str = env!("CARGO_PKG_VERSION");
