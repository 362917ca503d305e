//! A tiny HTTP/1.1 client: one GET, the raw response streamed back.
//!
//! See the `url` module for splitting the command-line url.
//! See the `client` module for connecting, sending and reading.
//! See the `protocol` module for the request wire format.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod url;
