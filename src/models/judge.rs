//! Judge model.
//!
//! Judges are the people who evaluate submissions. Each judge carries
//! the set of tracks it may evaluate; the balancer tracks per-judge
//! load separately (see `assignment::JudgeLoad`), so a `Judge` is never
//! mutated by the engine.

use serde::{Deserialize, Serialize};

use super::{EntityId, TrackSet};

/// A judge that can be assigned to submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judge {
    /// Unique judge identifier.
    pub id: EntityId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Tracks this judge may evaluate (default: `{"General"}`).
    #[serde(default)]
    pub tracks: TrackSet,
}

impl Judge {
    /// Creates a General-track judge.
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            tracks: TrackSet::general(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the track set.
    pub fn with_tracks<I, S>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracks = TrackSet::new(tracks);
        self
    }

    /// Whether this judge carries a given track.
    pub fn has_track(&self, name: &str) -> bool {
        self.tracks.contains(name)
    }
}
