//! Service layer for business logic and orchestration.
//!
//! Services sit between the repository layer and the HTTP surface: the
//! normalizer resolves wall-clock times onto the UTC timeline, and the
//! scheduling orchestrator drives the conflict-check/search/book pipeline.

pub mod normalizer;
pub mod scheduling;

pub use normalizer::normalize;
pub use scheduling::{
    schedule_meeting, ScheduleMeetingRequest, ScheduledMeeting, SchedulingError, SUGGESTION_COUNT,
};
