//! Judge assignment.
//!
//! Assigns judges to submissions so that every judge carries a similar
//! load, sponsor tracks are only reviewed by judges carrying them, and
//! every submission gets at least one judge whenever any judge exists.
//!
//! # Algorithm
//!
//! `AutoAssigner` walks submissions in input order and greedily hands each
//! one the least-loaded eligible judges, with a track-agnostic fallback
//! for submissions nobody is eligible for. Submissions left with fewer
//! than two judges are reported rather than treated as errors.

mod balancer;
mod report;

pub use balancer::{
    auto_assign, clamp_judges_per_submission, AutoAssigner, MAX_JUDGES_PER_SUBMISSION,
    MIN_JUDGES_PER_SUBMISSION,
};
pub use report::{AssignmentResult, JudgeLoad, UnderAssigned};
