//! Control client for a running VLC instance.
//!
//! [`Client`] wraps the player's HTTP interface: every operation is a
//! GET against one of the JSON resources (`status`, `playlist`,
//! `browse`), authenticated with the credential pair from [`Config`].
//! The convenience methods build the command parameters for you;
//! [`Client::request`] remains available for commands this crate does
//! not wrap.
//!
//! # Example
//!
//! ```rust
//! use vlcrc::{client::Client, config::Config};
//!
//! let client = Client::new(&Config::with_password("secret"))?;
//!
//! client.play("/media/song.mp3").await?;
//! client.volume(256).await?;
//!
//! let status = client.status().await?;
//! println!("{:?}", status.as_json());
//! ```

use reqwest::StatusCode;
use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
    http::Client as HttpClient,
    protocol::{AspectRatio, Params, Resource, Response, SortMode, SortOrder, Value},
};

/// Client for the VLC HTTP control interface.
///
/// Cheap to clone; concurrent requests each own their connection and
/// share nothing but the immutable configuration.
#[derive(Clone)]
pub struct Client {
    http_client: HttpClient,

    /// Host of the player, fixed at construction.
    host: String,

    /// Port of the player's HTTP interface, fixed at construction.
    port: u16,
}

impl Client {
    /// The VLC version whose command vocabulary this client targets.
    pub const API_VERSION: &'static str = "2.1.0 Rincewind";

    /// Upstream documentation of the request vocabulary.
    pub const API_SPEC: &'static str =
        "https://github.com/videolan/vlc/tree/master/share/lua/http/requests/README.txt";

    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            host: config.host.clone(),
            port: config.port,
        })
    }

    /// Builds the URL for a resource request.
    ///
    /// The path is always `/requests/<resource>.json`; the query string
    /// is the URL-encoded form of `params`, in insertion order.
    fn resource_url(&self, resource: Resource, params: &Params) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "http://{}:{}/requests/{resource}.json",
            self.host, self.port
        ))?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.iter() {
                pairs.append_pair(key, &value.to_string());
            }
        }

        Ok(url)
    }

    /// The player root, where the art endpoint lives.
    fn root_url(&self) -> Result<Url> {
        Url::parse(&format!("http://{}:{}/", self.host, self.port)).map_err(Into::into)
    }

    /// Accepts 1xx and 2xx responses, rejects everything else.
    ///
    /// VLC's documentation does not enumerate expected status codes, so
    /// the 3xx-5xx classes are filtered out as a conservative default.
    fn accept_status(status: StatusCode) -> Result<()> {
        if status.is_informational() || status.is_success() {
            Ok(())
        } else {
            Err(Error::UnexpectedStatus(status))
        }
    }

    /// Issues a single GET against `resource` with the given parameters.
    ///
    /// This is the escape hatch for commands without a convenience
    /// method: the whole interface is GET-based, so any command is a
    /// [`Params`] away.
    ///
    /// # Errors
    ///
    /// Will return `Err` if:
    /// - the configured host does not form a valid URL
    /// - the request fails at the transport level
    /// - the player answers outside the 1xx/2xx classes
    pub async fn request(&self, resource: Resource, params: Params) -> Result<Response> {
        let url = self.resource_url(resource, &params)?;
        debug!("GET {url}");

        let response = self.http_client.get(url).send().await?;
        Self::accept_status(response.status())?;

        let body = response.text().await?;
        Ok(Response::from_body(body, resource.name()))
    }

    /// Issues a command against the `status` resource, where almost
    /// everything is lumped.
    async fn command(&self, params: Params) -> Result<Response> {
        self.request(Resource::Status, params).await
    }

    /// Fetches the `status` resource with no command attached.
    pub async fn status(&self) -> Result<Response> {
        self.request(Resource::Status, Params::new()).await
    }

    /// Fetches a representation of the playlist.
    pub async fn playlist(&self) -> Result<Response> {
        self.request(Resource::Playlist, Params::new()).await
    }

    /// Browses the player host's filesystem at `uri`.
    pub async fn browse(&self, uri: &str) -> Result<Response> {
        self.request(Resource::Browse, Params::new().with("uri", uri))
            .await
    }

    /// Adds `uri` to the playlist.
    pub async fn enqueue(&self, uri: &str) -> Result<Response> {
        self.command(Params::command("in_enqueue").with("input", uri))
            .await
    }

    /// Associates a subtitle file with the currently playing file.
    pub async fn add_subtitle(&self, uri: &str) -> Result<Response> {
        self.command(Params::command("addsubtitle").with("val", uri))
            .await
    }

    /// Adds `uri` to the playlist and starts playing it immediately.
    pub async fn play(&self, uri: &str) -> Result<Response> {
        self.command(Params::command("in_play").with("input", uri))
            .await
    }

    /// Starts playback; of playlist item `id` when one is given, of the
    /// last active item otherwise.
    pub async fn playlist_play(&self, id: Option<u32>) -> Result<Response> {
        self.command(Params::command("pl_play").with_opt("id", id))
            .await
    }

    /// Toggles pause; of playlist item `id` when one is given.
    pub async fn playlist_pause(&self, id: Option<u32>) -> Result<Response> {
        self.command(Params::command("pl_pause").with_opt("id", id))
            .await
    }

    /// Jumps to playlist item `id`.
    pub async fn go_to(&self, id: u32) -> Result<Response> {
        self.command(Params::command("pl_play").with("input", id))
            .await
    }

    /// Sets the pause state. `None` toggles; `Some(true)` forces
    /// playback to resume; `Some(false)` forces it to pause.
    pub async fn pause(&self, state: Option<bool>) -> Result<Response> {
        let command = match state {
            None => "pl_pause",
            Some(true) => "pl_forceresume",
            Some(false) => "pl_forcepause",
        };
        self.command(Params::command(command)).await
    }

    /// Stops playback.
    pub async fn stop(&self) -> Result<Response> {
        self.command(Params::command("pl_stop")).await
    }

    /// Resumes playback.
    pub async fn resume(&self) -> Result<Response> {
        self.command(Params::command("pl_forceresume")).await
    }

    /// Skips to the next playlist item.
    pub async fn next(&self) -> Result<Response> {
        self.command(Params::command("pl_next")).await
    }

    /// Skips to the previous playlist item.
    pub async fn previous(&self) -> Result<Response> {
        self.command(Params::command("pl_previous")).await
    }

    /// Alias for [`Client::previous`].
    pub async fn prev(&self) -> Result<Response> {
        self.previous().await
    }

    /// Removes playlist item `id`.
    pub async fn delete(&self, id: u32) -> Result<Response> {
        self.command(Params::command("pl_delete").with("input", id))
            .await
    }

    /// Scraps the whole playlist.
    pub async fn empty(&self) -> Result<Response> {
        self.command(Params::command("pl_empty")).await
    }

    /// Sets the audio delay in seconds.
    pub async fn audio_delay(&self, seconds: f64) -> Result<Response> {
        self.command(Params::command("audiodelay").with("val", seconds))
            .await
    }

    /// Sets the subtitle delay in seconds.
    pub async fn subtitle_delay(&self, seconds: f64) -> Result<Response> {
        self.command(Params::command("subdelay").with("val", seconds))
            .await
    }

    /// Sets the display aspect ratio.
    ///
    /// Accepts anything that converts into an [`AspectRatio`]: a
    /// `(width, height)` pair, a two-element array, or a parsed `"W:H"`
    /// string. All forms normalize to the same wire value.
    pub async fn aspect_ratio(&self, ratio: impl Into<AspectRatio>) -> Result<Response> {
        self.command(Params::command("aspectratio").with("val", ratio.into()))
            .await
    }

    /// Sorts the playlist.
    pub async fn sort(&self, mode: SortMode, order: SortOrder) -> Result<Response> {
        self.command(
            Params::command("pl_sort")
                .with("id", u32::from(order.code()))
                .with("val", u32::from(mode.code())),
        )
        .await
    }

    /// Sorts the playlist from string arguments.
    ///
    /// Parses `mode` and `order` with the [`SortMode`] and
    /// [`SortOrder`] vocabularies; an unknown name is an argument error
    /// and no request is dispatched.
    pub async fn sort_by(&self, mode: &str, order: &str) -> Result<Response> {
        let mode = mode.parse::<SortMode>()?;
        let order = order.parse::<SortOrder>()?;
        self.sort(mode, order).await
    }

    /// Toggles random playback.
    pub async fn toggle_random(&self) -> Result<Response> {
        self.command(Params::command("pl_random")).await
    }

    /// Toggles looping over the playlist.
    pub async fn toggle_loop(&self) -> Result<Response> {
        self.command(Params::command("pl_loop")).await
    }

    /// Toggles repeating the current item.
    pub async fn toggle_repeat(&self) -> Result<Response> {
        self.command(Params::command("pl_repeat")).await
    }

    /// Toggles fullscreen.
    pub async fn toggle_fullscreen(&self) -> Result<Response> {
        self.command(Params::command("fullscreen")).await
    }

    /// Enables a service discovery module, e.g. `shoutcast`.
    pub async fn discovery(&self, module: &str) -> Result<Response> {
        self.command(Params::command("pl_sd").with("val", module))
            .await
    }

    /// Sets the volume.
    ///
    /// The player accepts an absolute level (0..512), a relative step
    /// like `"+10"` or `"-10"`, or a percentage like `"75%"`; all pass
    /// through unchanged.
    pub async fn volume(&self, level: impl Into<Value>) -> Result<Response> {
        self.command(Params::command("volume").with("val", level))
            .await
    }

    /// Seeks within the current item.
    ///
    /// Accepts seconds, a relative offset like `"-30"`, a percentage,
    /// or VLC's `"1h:20m"` position syntax.
    pub async fn seek(&self, position: impl Into<Value>) -> Result<Response> {
        self.command(Params::command("seek").with("val", position))
            .await
    }

    /// Sets the preamp gain in dB.
    pub async fn preamp(&self, gain: f64) -> Result<Response> {
        self.command(Params::command("volume").with("val", gain))
            .await
    }

    /// Sets the gain in dB on one equalizer band.
    pub async fn equalizer(&self, band: u32, gain: f64) -> Result<Response> {
        self.command(
            Params::command("equalizer")
                .with("band", band)
                .with("val", gain),
        )
        .await
    }

    /// Enables the equalizer.
    pub async fn enable_equalizer(&self) -> Result<Response> {
        self.command(Params::command("enableeq").with("val", 1i64))
            .await
    }

    /// Disables the equalizer.
    pub async fn disable_equalizer(&self) -> Result<Response> {
        self.command(Params::command("enableeq").with("val", 0i64))
            .await
    }

    /// Selects an equalizer preset by name.
    ///
    /// `None` sends an empty preset value, which the player treats as
    /// unset.
    pub async fn equalizer_preset(&self, preset: Option<&str>) -> Result<Response> {
        self.command(Params::command("setpreset").with("val", preset.unwrap_or_default()))
            .await
    }

    /// Selects a title of the current item.
    pub async fn title(&self, title: impl Into<Value>) -> Result<Response> {
        self.command(Params::command("title").with("val", title))
            .await
    }

    /// Selects a chapter of the current item.
    pub async fn chapter(&self, chapter: impl Into<Value>) -> Result<Response> {
        self.command(Params::command("chapter").with("val", chapter))
            .await
    }

    /// Selects an audio track.
    pub async fn audio_track(&self, track: i64) -> Result<Response> {
        self.command(Params::command("audio_track").with("val", track))
            .await
    }

    /// Selects a video track.
    pub async fn video_track(&self, track: i64) -> Result<Response> {
        self.command(Params::command("video_track").with("val", track))
            .await
    }

    /// Selects a subtitle track.
    pub async fn subtitle_track(&self, track: i64) -> Result<Response> {
        self.command(Params::command("subtitle_track").with("val", track))
            .await
    }

    /// Downloads art for the current item.
    ///
    /// The art endpoint is a plain byte stream on the player root, not
    /// a JSON resource, so this bypasses [`Client::request`] entirely:
    /// no status validation, no body parsing. The caller consumes the
    /// returned response, e.g. via `bytes_stream()` or `chunk()`.
    ///
    /// # Errors
    ///
    /// Will return `Err` only on transport-level failure.
    pub async fn art(&self) -> Result<reqwest::Response> {
        let url = self.root_url()?;
        debug!("GET {url}");

        self.http_client.get(url).send().await.map_err(Into::into)
    }
}
