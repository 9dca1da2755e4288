//! Wire vocabulary of the VLC HTTP interface.
//!
//! # Submodules
//!
//! * [`command`] - resources, command parameters, and the typed values
//!   they carry (sort modes, sort orders, aspect ratios)
//!
//! # Shared Functionality
//!
//! The module also defines [`Response`], the lenient result of a
//! resource request: VLC answers with JSON, but the interface makes no
//! schema promises, so a body that fails to parse is delivered verbatim
//! as text instead of failing the call.

pub mod command;

pub use command::{AspectRatio, Params, Resource, SortMode, SortOrder, Value};

/// Body of an accepted resource response.
///
/// VLC's `status`, `playlist` and `browse` resources answer with JSON.
/// No schema validation is performed; whatever the player returns is
/// handed to the caller as a [`serde_json::Value`]. A body that is not
/// valid JSON degrades to [`Response::Text`] rather than an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// Parsed JSON body.
    Json(serde_json::Value),

    /// Raw body text, when JSON parsing failed.
    Text(String),
}

impl Response {
    /// Parses a response body, falling back to raw text.
    ///
    /// # Arguments
    ///
    /// * `body` - Response body text
    /// * `origin` - Resource name, for logging
    ///
    /// # Logging
    ///
    /// * Parsed JSON is logged at TRACE level
    /// * The text fallback is logged at DEBUG level with the parse error
    pub fn from_body(body: String, origin: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(json) => {
                trace!("{origin}: {json:#?}");
                Self::Json(json)
            }
            Err(e) => {
                debug!("{origin}: response is not JSON ({e}), passing through as text");
                Self::Text(body)
            }
        }
    }

    /// Returns the parsed JSON body, if there is one.
    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(json) => Some(json),
            Self::Text(_) => None,
        }
    }

    /// Consumes the response, returning the parsed JSON body if there
    /// is one.
    #[must_use]
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(json) => Some(json),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw body text, if JSON parsing had failed.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}
