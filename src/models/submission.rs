//! Submission (project) model.
//!
//! A submission is one project entered into the event. It belongs to one
//! or more tracks and carries the ordered list of judges assigned to it.
//! The balancer fills `assigned_judges`; the schedule builder reads it.

use serde::{Deserialize, Serialize};

use super::{EntityId, TrackSet};

/// A submission to be judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Unique submission identifier.
    pub id: EntityId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Tracks the submission competes in (default: `{"General"}`).
    #[serde(default)]
    pub tracks: TrackSet,
    /// Assigned judge ids, in assignment order, without duplicates.
    #[serde(default)]
    pub assigned_judges: Vec<EntityId>,
}

impl Submission {
    /// Creates a General-track submission with no judges.
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            tracks: TrackSet::general(),
            assigned_judges: Vec::new(),
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

    /// Appends judges (duplicates are ignored).
    pub fn with_judges<I, J>(mut self, judges: I) -> Self
    where
        I: IntoIterator<Item = J>,
        J: Into<EntityId>,
    {
        for judge in judges {
            self.assign_judge(judge.into());
        }
        self
    }

    /// Whether a judge is already assigned.
    pub fn has_judge(&self, judge_id: &EntityId) -> bool {
        self.assigned_judges.contains(judge_id)
    }

    /// Appends a judge unless already present. Returns `true` if appended.
    pub fn assign_judge(&mut self, judge_id: EntityId) -> bool {
        if self.has_judge(&judge_id) {
            return false;
        }
        self.assigned_judges.push(judge_id);
        true
    }

    /// Number of assigned judges.
    pub fn judge_count(&self) -> usize {
        self.assigned_judges.len()
    }
}
