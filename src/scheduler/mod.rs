//! Room scheduling and KPI evaluation.
//!
//! Packs judged submissions into a room × time grid and measures the
//! quality of the result.
//!
//! # Algorithm
//!
//! `RoomScheduler` is a greedy, per-slot, per-room heuristic that never
//! double-books a room or a judge and prefers keeping judges in the room
//! they already occupy. It is not optimal, but it is fast and its output
//! is fully determined by input order.
//!
//! # KPI
//!
//! `ScheduleKpi` reports slot utilization, unscheduled submissions, and
//! room moves overall and per judge.

mod kpi;
mod request;
mod rooms;

pub use kpi::ScheduleKpi;
pub use request::{ScheduleRequest, ScheduleWindow};
pub use rooms::{build_schedule, RoomScheduler};
