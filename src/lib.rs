//! Judge assignment and room scheduling for the U-Engine ecosystem.
//!
//! Assigns judges to event submissions under track-eligibility and
//! load-balancing rules, then packs the judged submissions into a
//! room × time grid while keeping judges in the same room where possible.
//! Everything is pure and synchronous: callers pass in-memory collections
//! and persist the returned results themselves.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Judge`, `Submission`, `Room`, `TrackSet`,
//!   `EntityId`, `ScheduleSlot`, `ScheduleResult`, `Violation`
//! - **`eligibility`**: Track eligibility predicate
//! - **`assignment`**: Load-balancing judge assigner with fallback and
//!   under-assignment report
//! - **`scheduler`**: Greedy room scheduler, request parsing, KPIs
//! - **`validation`**: Input integrity checks and schedule verification
//! - **`planner`**: Assignment followed by scheduling in one call
//!
//! # Determinism
//!
//! Both algorithms are order-sensitive. Identical inputs in identical
//! order always produce identical output; reordering judges, submissions,
//! or rooms may change the result.

pub mod assignment;
pub mod eligibility;
pub mod error;
pub mod models;
pub mod planner;
pub mod scheduler;
pub mod validation;

pub use error::{RequestError, RequestResult};
