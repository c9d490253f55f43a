pub mod client;
pub mod evolution;
pub mod model;
pub mod profile;
pub mod search;

pub use client::{DEFAULT_BASE_URL, PokeApi, PokeApiClient};
pub use evolution::{EvolutionNode, resolve_chain, resolve_paths};
pub use profile::{Profile, StatLine, evolution_text};
pub use search::{lookup, lookup_evolution, normalize_query};

pub type Result<T> = std::result::Result<T, PokeApiError>;

#[derive(thiserror::Error, Debug)]
pub enum PokeApiError {
    #[error("Please enter a Pokémon name or ID.")]
    EmptyQuery,

    #[error("Pokémon {0} not found.")]
    NotFound(String),

    #[error("HTTP request {url} failed. Error: {error}")]
    RequestError { error: reqwest::Error, url: String },

    #[error("HTTP request {url} returned status {status}")]
    StatusError { status: u16, url: String },

    #[error("Decode response from {url} failed. Error: {error}")]
    DecodeError { error: String, url: String },

    #[error("Build HTTP client failed. Error: {0}")]
    ClientError(String),
}
