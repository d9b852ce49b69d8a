//! Track eligibility.
//!
//! Decides whether a judge may evaluate a submission from the two track
//! sets alone:
//!
//! - A submission whose only track is General is open to every judge.
//! - Otherwise the judge must carry at least one of the submission's
//!   sponsor (non-General) tracks. Carrying General does not help.

use crate::models::{Judge, TrackSet};

/// Whether `judge` may evaluate a submission with `submission_tracks`.
pub fn can_judge(judge: &Judge, submission_tracks: &TrackSet) -> bool {
    tracks_overlap(&judge.tracks, submission_tracks)
}

/// Track-set form of [`can_judge`].
pub fn tracks_overlap(judge_tracks: &TrackSet, submission_tracks: &TrackSet) -> bool {
    let mut sponsor = submission_tracks.sponsor_tracks().peekable();
    if sponsor.peek().is_none() {
        return true;
    }
    sponsor.any(|track| judge_tracks.contains(track))
}

/// Indices into `judges` of everyone eligible for `submission_tracks`, in pool order.
pub fn eligible_judges(judges: &[Judge], submission_tracks: &TrackSet) -> Vec<usize> {
    judges
        .iter()
        .enumerate()
        .filter(|(_, j)| can_judge(j, submission_tracks))
        .map(|(i, _)| i)
        .collect()
}
