//! Track model.
//!
//! A track is a named judging category. `"General"` is the default
//! track and every judge may evaluate it; any other track is a sponsor
//! track and restricts eligibility to judges who explicitly carry it.
//!
//! Track sets keep insertion order and drop duplicates. An empty or
//! absent list is treated as `{"General"}` on both sides.

use serde::{Deserialize, Serialize};

/// Name of the default track.
pub const GENERAL_TRACK: &str = "General";

/// Ordered, de-duplicated set of track names. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Vec<String>")]
pub struct TrackSet {
    names: Vec<String>,
}

impl TrackSet {
    /// The `{"General"}` set.
    pub fn general() -> Self {
        Self {
            names: vec![GENERAL_TRACK.to_string()],
        }
    }

    /// Builds a set from track names, defaulting to `{"General"}` when empty.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !deduped.contains(&name) {
                deduped.push(name);
            }
        }
        if deduped.is_empty() {
            return Self::general();
        }
        Self { names: deduped }
    }

    /// Whether the set contains a track.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterates track names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Non-General tracks, in insertion order.
    pub fn sponsor_tracks(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|n| *n != GENERAL_TRACK)
    }

    /// Whether the set holds no sponsor track.
    pub fn is_general_only(&self) -> bool {
        self.sponsor_tracks().next().is_none()
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty. Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for TrackSet {
    fn default() -> Self {
        Self::general()
    }
}

impl From<Option<Vec<String>>> for TrackSet {
    fn from(names: Option<Vec<String>>) -> Self {
        Self::new(names.unwrap_or_default())
    }
}

impl From<Vec<String>> for TrackSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<TrackSet> for Vec<String> {
    fn from(set: TrackSet) -> Self {
        set.names
    }
}
