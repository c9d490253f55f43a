//! # CUtil - Common Utilities Library
//!
//! Small helpers shared by the application and the API crates.
//!
//! ## Features
//!
//! - `str`: String helpers (capitalization)
//! - `time`: Local time formatting for log lines
//! - `http`: HTTP client construction with common headers and timeouts

#[cfg(feature = "str")]
pub mod str;

#[cfg(feature = "time")]
pub mod time;

#[cfg(feature = "http")]
pub mod http;
