use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid url")]
    Url(#[from] ::url::ParseError),

    /// Address resolution or TCP connect failed.
    #[error("failed to connect to {host}:{port}")]
    Connection {
        host: String,
        port: String,
        #[source]
        source: io::Error,
    },

    /// Writing the request to the connection failed.
    #[error("failed to send request")]
    Send(#[source] io::Error),

    /// Writing the response to the output failed.
    #[error("failed to write response")]
    Output(#[source] io::Error),

    #[error("https is not supported (host {host}), use an http:// url")]
    TlsUnsupported { host: String },
}

pub type Result<R> = std::result::Result<R, Error>;
