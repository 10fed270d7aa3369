use std::{borrow::Cow, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::Error;

/// OAuth credentials held by the token manager and mirrored into the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub authorization_code: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub access_token_expires: DateTime<Utc>,
}

impl Credentials {
    pub fn empty() -> Self {
        Self {
            authorization_code: None,
            access_token: None,
            refresh_token: None,
            access_token_expires: Utc::now(),
        }
    }

    /// The access token, if one is held and `now` is before its expiry.
    pub fn usable_token(&self, now: DateTime<Utc>) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|_| now < self.access_token_expires)
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::empty()
    }
}

/// On-disk shape of [`Credentials`]:
/// `[authorization_code, access_token, refresh_token, access_token_expires]`,
/// the expiry as a Unix timestamp in seconds.
pub type CredentialRecord = (Option<String>, Option<String>, Option<String>, i64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopKind {
    #[default]
    Tracks,
    Artists,
}

impl TopKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopKind::Tracks => "tracks",
            TopKind::Artists => "artists",
        }
    }
}

impl FromStr for TopKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tracks" => Ok(TopKind::Tracks),
            "artists" => Ok(TopKind::Artists),
            _ => Err(Error::validation("Invalid Type!")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Short,
    #[default]
    Medium,
    Long,
}

impl TimeRange {
    /// Value of the `time_range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        }
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    /// Accepts the command form (`short`) as well as the API form
    /// (`short_term`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix("_term").unwrap_or(s) {
            "short" => Ok(TimeRange::Short),
            "medium" => Ok(TimeRange::Medium),
            "long" => Ok(TimeRange::Long),
            _ => Err(Error::validation(
                "term must either be wildcard, short, medium or long",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    Track,
    #[default]
    Artist,
    Album,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Track => "track",
            SearchType::Artist => "artist",
            SearchType::Album => "album",
        }
    }

    /// Maximum number of results kept for the search preview.
    pub fn preview_limit(&self) -> usize {
        match self {
            SearchType::Track => 5,
            SearchType::Artist => 2,
            SearchType::Album => 2,
        }
    }

    /// Case-insensitive parse; anything unrecognized is `None`.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "track" => Some(SearchType::Track),
            "artist" => Some(SearchType::Artist),
            "album" => Some(SearchType::Album),
            _ => None,
        }
    }
}

/// Boolean operators of Spotify's search grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOperator {
    Or,
    Not,
}

impl SearchOperator {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "or" => Some(SearchOperator::Or),
            "not" => Some(SearchOperator::Not),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOperator::Or => "OR",
            SearchOperator::Not => "NOT",
        }
    }
}

impl fmt::Display for SearchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Raw payloads as returned by the Web API. Only the fields we render are
// modelled; everything else is ignored by serde.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrack {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<NamedRef>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArtist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub followers: Followers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAlbum {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<NamedRef>,
    pub album_type: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub total_tracks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Paging<RawTrack>>,
    #[serde(default)]
    pub artists: Option<Paging<RawArtist>>,
    #[serde(default)]
    pub albums: Option<Paging<RawAlbum>>,
}

// Normalized entities. Each implements `Tabled` by hand so the column order
// and header names stay fixed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: Vec<String>,
    pub album: String,
    pub release_date: String,
    pub minutes: u64,
    pub seconds: u64,
    pub id: String,
    pub position: usize,
}

impl Tabled for Track {
    const LENGTH: usize = 8;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Owned(self.artist.join(", ")),
            Cow::Borrowed(self.album.as_str()),
            Cow::Borrowed(self.release_date.as_str()),
            Cow::Owned(self.minutes.to_string()),
            Cow::Owned(self.seconds.to_string()),
            Cow::Borrowed(self.id.as_str()),
            Cow::Owned(self.position.to_string()),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        [
            "name",
            "artist",
            "album",
            "release date",
            "minutes",
            "seconds",
            "id",
            "position",
        ]
        .into_iter()
        .map(Cow::Borrowed)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
    pub id: String,
    pub position: usize,
}

impl Tabled for Artist {
    const LENGTH: usize = 5;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Owned(self.genres.join(", ")),
            Cow::Owned(self.followers.to_string()),
            Cow::Borrowed(self.id.as_str()),
            Cow::Owned(self.position.to_string()),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        ["name", "genres", "followers", "id", "position"]
            .into_iter()
            .map(Cow::Borrowed)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub name: String,
    pub artists: Vec<String>,
    pub album_type: String,
    pub date: String,
    pub number_of_tracks: u64,
    pub position: usize,
}

impl Tabled for Album {
    const LENGTH: usize = 6;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Owned(self.artists.join(", ")),
            Cow::Borrowed(self.album_type.as_str()),
            Cow::Borrowed(self.date.as_str()),
            Cow::Owned(self.number_of_tracks.to_string()),
            Cow::Owned(self.position.to_string()),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        ["name", "artists", "type", "date", "number of tracks", "position"]
            .into_iter()
            .map(Cow::Borrowed)
            .collect()
    }
}

/// A homogeneous result set, as handed to the table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entities {
    Tracks(Vec<Track>),
    Artists(Vec<Artist>),
    Albums(Vec<Album>),
}

impl Entities {
    pub fn empty_top(kind: TopKind) -> Self {
        match kind {
            TopKind::Tracks => Entities::Tracks(Vec::new()),
            TopKind::Artists => Entities::Artists(Vec::new()),
        }
    }

    pub fn empty_search(kind: SearchType) -> Self {
        match kind {
            SearchType::Track => Entities::Tracks(Vec::new()),
            SearchType::Artist => Entities::Artists(Vec::new()),
            SearchType::Album => Entities::Albums(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Entities::Tracks(t) => t.len(),
            Entities::Artists(a) => a.len(),
            Entities::Albums(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
