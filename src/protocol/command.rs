//! Command parameters for the VLC HTTP interface.
//!
//! Every control operation is a GET against one of three fixed
//! [`Resource`]s with a handful of query parameters: a `command` name
//! plus `val`, `id`, `input` or `band` as the command requires. This
//! module defines that vocabulary:
//!
//! * [`Params`] - the per-request parameter mapping
//! * [`Value`] - the scalar values parameters carry
//! * [`SortMode`] and [`SortOrder`] - the `pl_sort` vocabulary
//! * [`AspectRatio`] - normalized `W:H` ratios for `aspectratio`

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One of the fixed remote endpoints exposed by the player's control
/// server. Each maps to the path `/requests/<name>.json`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Resource {
    /// Playback state and almost every command.
    Status,

    /// The current playlist tree.
    Playlist,

    /// Directory listings of the player's host.
    Browse,
}

impl Resource {
    /// The resource name as it appears in the request path.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Playlist => "playlist",
            Self::Browse => "browse",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar value of a single command parameter.
///
/// The interface is not typed beyond "something that serializes into a
/// query string": counts and ids are integers, delays and gains are
/// fractional seconds or decibels, and everything else (URIs, ratios,
/// relative volumes like `+10` or `-5%`) travels as text.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<AspectRatio> for Value {
    fn from(value: AspectRatio) -> Self {
        Self::Text(value.to_string())
    }
}

/// Ordered parameter mapping for a single request.
///
/// Built fresh per call and consumed by the dispatcher; parameters keep
/// their insertion order when serialized into the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(Vec<(&'static str, Value)>);

impl Params {
    /// An empty mapping, for raw resource fetches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping holding only `command=<name>`.
    #[must_use]
    pub fn command(name: &'static str) -> Self {
        Self(vec![("command", Value::Text(name.to_owned()))])
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    /// Appends a parameter only when a value is present.
    #[must_use]
    pub fn with_opt(self, key: &'static str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Playlist sort key for the `pl_sort` command.
///
/// The discriminants are the wire codes the player expects; the gaps
/// are positions the player reserves.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum SortMode {
    Id = 0,
    Name = 1,
    Author = 3,
    Random = 5,
    Track = 7,
}

impl SortMode {
    /// Accepted names, in wire-code order.
    const NAMES: [&'static str; 5] = ["id", "name", "author", "random", "track"];

    /// The wire code sent in the `val` parameter.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Author => "author",
            Self::Random => "random",
            Self::Track => "track",
        };
        f.write_str(name)
    }
}

impl FromStr for SortMode {
    type Err = Error;

    /// Parses a sort mode name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "author" => Ok(Self::Author),
            "random" => Ok(Self::Random),
            "track" => Ok(Self::Track),
            _ => Err(Error::invalid_argument(format!(
                "unknown sort mode `{s}`; modes are: `{}`",
                Self::NAMES.join("`, `")
            ))),
        }
    }
}

/// Playlist sort direction for the `pl_sort` command.
///
/// Sent in the `id` parameter; [`SortOrder::Forward`] is the default.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum SortOrder {
    #[default]
    Forward = 0,
    Reverse = 1,
}

impl SortOrder {
    /// The wire code sent in the `id` parameter.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Reverse => f.write_str("reverse"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    /// Parses a sort order name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "reverse" => Ok(Self::Reverse),
            _ => Err(Error::invalid_argument(format!(
                "unknown sort order `{s}`; order may be `forward` or `reverse`"
            ))),
        }
    }
}

/// Display aspect ratio for the `aspectratio` command.
///
/// However the ratio is supplied - a `(width, height)` pair, a
/// two-element array, or a `"W:H"` string - it normalizes to the same
/// `W:H` wire form.
///
/// # Example
///
/// ```rust
/// let widescreen = AspectRatio::from((16, 9));
/// assert_eq!(widescreen.to_string(), "16:9");
/// assert_eq!("16:9".parse::<AspectRatio>()?, widescreen);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for AspectRatio {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl From<[u32; 2]> for AspectRatio {
    fn from([width, height]: [u32; 2]) -> Self {
        Self::new(width, height)
    }
}

impl FromStr for AspectRatio {
    type Err = Error;

    /// Parses a `"W:H"` string like `"16:9"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || Error::invalid_argument(format!("aspect ratio `{s}` is not of the form `W:H`"));

        let (width, height) = s.split_once(':').ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(width, height))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}
