//! Client configuration.
//!
//! A [`Config`] is created once, up front, and stays immutable for the
//! lifetime of the client built from it. VLC's HTTP interface listens on
//! `localhost:8080` by default and authenticates with HTTP Basic where
//! the username is conventionally empty and only the password matters,
//! so [`Config::with_password`] is the usual entry point.

/// Host the VLC HTTP interface listens on by default.
pub const DEFAULT_HOST: &str = "localhost";

/// Port the VLC HTTP interface listens on by default.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,

    /// Host name or address of the player.
    pub host: String,

    /// Port of the player's HTTP interface.
    pub port: u16,

    /// Basic auth username. VLC requires this to be empty as of 2.1.
    pub username: String,

    /// Basic auth password. Required by the player; there is no
    /// unauthenticated mode.
    pub password: String,

    pub user_agent: String,
}

impl Config {
    /// Creates a configuration for the default `localhost:8080` endpoint
    /// with the given password and an empty username.
    #[must_use]
    pub fn with_password(password: impl Into<String>) -> Self {
        let app_name = env!("CARGO_PKG_NAME").to_owned();
        let app_version = env!("CARGO_PKG_VERSION").to_owned();

        let user_agent = format!("{app_name}/{app_version}");
        trace!("user agent: {user_agent}");

        Self {
            app_name,
            app_version,

            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,

            username: String::new(),
            password: password.into(),

            user_agent,
        }
    }

    /// Same as [`Config::with_password`] but for a player on another
    /// host and/or port.
    #[must_use]
    pub fn with_endpoint(
        host: impl Into<String>,
        port: u16,
        password: impl Into<String>,
    ) -> Self {
        let mut config = Self::with_password(password);
        config.host = host.into();
        config.port = port;
        config
    }
}
