//! HTTP transport for the VLC control interface.
//!
//! This module provides a wrapper around `reqwest::Client` that adds:
//! * HTTP Basic credentials on every request (VLC expects an empty
//!   username and a password)
//! * Consistent keepalive and user agent settings
//!
//! No request timeout is applied here. A control command normally
//! returns immediately, and callers that need a deadline can wrap the
//! returned future themselves.
//!
//! # Example
//!
//! ```rust
//! use vlcrc::{config::Config, http::Client};
//!
//! let config = Config::with_password("secret");
//! let client = Client::new(&config)?;
//!
//! let response = client.get(url).send().await?;
//! ```

use std::time::Duration;

use reqwest::{RequestBuilder, Url};

use crate::{config::Config, error::Result};

/// HTTP client with built-in basic authentication.
///
/// Wraps `reqwest::Client` so that every request carries the credential
/// pair from the [`Config`] it was built from.
#[derive(Clone)]
pub struct Client {
    /// Underlying request client. Connection pooling is whatever
    /// `reqwest` provides implicitly.
    inner: reqwest::Client,

    /// Basic auth username, conventionally empty for VLC.
    username: String,

    /// Basic auth password.
    password: String,
}

impl Client {
    /// Duration to keep idle connections alive.
    ///
    /// Prevents frequent reconnection overhead for subsequent commands.
    const KEEPALIVE_TIMEOUT: Duration = Duration::from_secs(60);

    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &Config) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .tcp_keepalive(Self::KEEPALIVE_TIMEOUT)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Builds a GET request for `url` with the basic auth credentials
    /// attached.
    ///
    /// The returned builder can be further customized before sending.
    #[must_use]
    pub fn get(&self, url: Url) -> RequestBuilder {
        self.inner
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
    }
}
