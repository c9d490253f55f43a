//! HTTP client utilities for building clients with common headers.

use anyhow::{Context, Result};
use reqwest::{
    Client,
    header::{ACCEPT, CACHE_CONTROL, HeaderMap, HeaderValue, USER_AGENT},
};
use std::time::Duration;

/// Creates a set of common HTTP headers for API requests.
///
/// The headers include:
/// - User-Agent: the given agent string
/// - Accept: application/json, */*
/// - Cache-Control: no-cache
///
/// # Examples
///
/// ```
/// use cutil::http::headers;
///
/// let headers = headers("pokedex/0.1.0").unwrap();
/// assert!(headers.contains_key("user-agent"));
/// ```
pub fn headers(user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .with_context(|| format!("invalid user agent `{user_agent}`"))?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    Ok(headers)
}

/// Creates a new HTTP client.
///
/// `timeout` of `None` leaves requests unbounded.
///
/// # Examples
///
/// ```
/// use cutil::http::client;
/// use std::time::Duration;
///
/// let client = client("pokedex/0.1.0", Some(Duration::from_secs(10))).unwrap();
/// ```
pub fn client(user_agent: &str, timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().default_headers(headers(user_agent)?);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().with_context(|| "build http client failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() -> Result<()> {
        let headers = headers("pokedex/0.1.0")?;
        assert!(headers.contains_key("accept"));
        assert!(headers.contains_key("cache-control"));
        assert_eq!("pokedex/0.1.0", headers.get("user-agent").unwrap().to_str()?);
        Ok(())
    }

    #[test]
    fn test_headers_invalid_agent() {
        assert!(headers("bad\nagent").is_err());
    }

    #[test]
    fn test_client() -> Result<()> {
        client("pokedex/0.1.0", None)?;
        client("pokedex/0.1.0", Some(Duration::from_secs(5)))?;
        Ok(())
    }
}
