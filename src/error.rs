//! Error handling for vlcrc.
//!
//! All fallible operations return [`Result`]. The variants follow the
//! failure modes of a thin HTTP client:
//!
//! * [`Error::InvalidArgument`] - a malformed call, detected before any
//!   network traffic (bad sort mode or order, malformed aspect ratio)
//! * [`Error::HttpClient`] - a transport failure from the underlying
//!   client (connection refused, reset, DNS)
//! * [`Error::UnexpectedStatus`] - the server answered outside the
//!   accepted 1xx/2xx classes
//! * [`Error::UrlParse`] - the configured host/port did not form a
//!   valid URL
//!
//! A response body that fails to parse as JSON is *not* an error; it
//! degrades to [`crate::protocol::Response::Text`].

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the VLC HTTP client.
#[derive(Error, Debug)]
pub enum Error {
    /// A call was malformed; nothing was sent to the player.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The player answered with a status code outside the 1xx/2xx
    /// classes. The code is carried verbatim.
    #[error("unexpected response code {0}")]
    UnexpectedStatus(StatusCode),

    #[error("parsing URL failed: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`] from any message type.
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Standard result type for vlcrc operations.
pub type Result<T> = std::result::Result<T, Error>;
