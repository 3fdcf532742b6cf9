//! Domain model for catalog entries.
//!
//! A [`VideoEntry`] is one opening/ending video in the catalog: the show
//! name, the song, an OP/ED marker, airing year and season, a handful of
//! external links, and the two media URLs produced by the Blob Store.

use serde::{Deserialize, Serialize};

/// Broadcast season a show aired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Lowercase wire form, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

/// The user-supplied fields of a catalog entry -- everything except the
/// backend-assigned id.
///
/// Every field defaults on deserialization; the API layer performs no
/// validation at all, so whatever arrives is forwarded verbatim and the
/// Record Store enforces its own attribute constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoFields {
    /// Show name. Expected by the Record Store, but not enforced here.
    #[serde(default)]
    pub name: String,
    /// Song title, searched alongside `name`.
    #[serde(default)]
    pub song: Option<String>,
    /// Entry kind, e.g. `"OP"` or `"ED"`. Free text, substring-matched.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Airing year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Airing season.
    #[serde(default)]
    pub season: Option<Season>,
    /// Air date, display only.
    #[serde(default)]
    pub date: Option<String>,
    /// Official site URL, display only.
    #[serde(default)]
    pub site: Option<String>,
    /// External "watch" link.
    #[serde(default)]
    pub watch: Option<String>,
    /// External YouTube link.
    #[serde(default)]
    pub youtube: Option<String>,
    /// Cover image URL, produced by a Blob Store upload.
    #[serde(default)]
    pub img: Option<String>,
    /// Playable media URL, produced by a Blob Store upload.
    #[serde(default)]
    pub url: Option<String>,
}

/// A catalog entry as stored in the Record Store.
///
/// Entries are append-only from this system's perspective: created exactly
/// once, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Backend-assigned identifier. Unique, assigned exactly once on
    /// creation, immutable afterwards.
    pub id: String,
    /// All user-supplied fields, inlined on the wire.
    #[serde(flatten)]
    pub fields: VideoFields,
}
