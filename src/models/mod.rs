//! Judging domain models.
//!
//! Provides the data types the assignment balancer and schedule builder
//! consume and produce. Input records deserialize from the shapes the
//! surrounding dashboard stores; output records serialize into the
//! shapes it persists.
//!
//! # Domain Mappings
//!
//! | u-judging | Hackathon | Science fair | Pitch competition |
//! |-----------|-----------|--------------|-------------------|
//! | Submission | Project | Poster | Startup |
//! | Judge | Judge/Mentor | Reviewer | Investor |
//! | Track | Sponsor prize | Category | Vertical |
//! | Room | Demo room | Booth row | Stage |

mod id;
mod judge;
mod room;
mod schedule;
mod submission;
mod track;

pub use id::EntityId;
pub use judge::Judge;
pub use room::Room;
pub use schedule::{ScheduleResult, ScheduleSlot, Violation, ViolationType, DATE_FORMAT, TIME_FORMAT};
pub use submission::Submission;
pub use track::{TrackSet, GENERAL_TRACK};
