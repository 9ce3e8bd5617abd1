//! Meeting scheduling orchestration.
//!
//! Sequences one scheduling request end-to-end: participant resolution →
//! wall-clock normalization → conflict check → booking, with a slot search
//! on conflict. Stateless per request apart from the injected clock and
//! store; every failure is a structured value, never a fault, and nothing
//! is retried here.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use log::{info, warn};

use super::normalizer;
use crate::clock::Clock;
use crate::db::repository::{CalendarRepository, RepositoryError};
use crate::models::{Meeting, MeetingId, ParticipantId, ProposedSlot, TimeInterval};
use crate::scheduler::{find_conflict, find_next_available_slots};

/// Number of alternative slots offered when the requested one conflicts.
pub const SUGGESTION_COUNT: usize = 3;

/// A request to book a meeting.
#[derive(Debug, Clone)]
pub struct ScheduleMeetingRequest {
    pub title: String,
    /// Wall-clock start in the requester's timezone.
    pub start_local: NaiveDateTime,
    pub duration: Duration,
    pub participant_ids: Vec<ParticipantId>,
    /// IANA identifier; empty means `start_local` is already UTC.
    pub timezone: String,
}

/// Successful booking outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledMeeting {
    pub meeting_id: MeetingId,
    pub interval: TimeInterval,
}

/// Recoverable-vs-not taxonomy for a scheduling request.
///
/// Everything except `Persistence` is correctable by the caller; a
/// persistence failure ends the request without retry (retry policy, if
/// any, belongs to the store or the caller).
#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error(
        "One or more participants were not found. Missing IDs: {}",
        format_ids(.missing)
    )]
    ParticipantsNotFound { missing: Vec<ParticipantId> },

    #[error("Invalid timezone ID provided: {timezone}")]
    InvalidTimezone { timezone: String },

    #[error("Cannot schedule a meeting in the past.")]
    PastStartTime,

    #[error("Scheduling failed due to a time conflict. See suggestions.")]
    TimeConflict { suggestions: Vec<ProposedSlot> },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] RepositoryError),
}

fn format_ids(ids: &[ParticipantId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Book a meeting, or explain why it cannot be booked.
///
/// Pipeline: `Validating → Normalizing → ConflictChecking →
/// {Booking | SlotSearching} → Terminal`. On conflict the slot search
/// starts at the **end** of the requested interval (not at "now") and asks
/// for [`SUGGESTION_COUNT`] alternatives, which ride back on the
/// [`SchedulingError::TimeConflict`] outcome. A meeting is created only on
/// the booking path.
pub async fn schedule_meeting<R, C>(
    repo: &R,
    clock: &C,
    request: ScheduleMeetingRequest,
) -> Result<ScheduledMeeting, SchedulingError>
where
    R: CalendarRepository + ?Sized,
    C: Clock + ?Sized,
{
    info!("Attempting to schedule meeting: {}", request.title);

    let participants = repo.find_participants(&request.participant_ids).await?;
    let found_ids: HashSet<ParticipantId> = participants.iter().map(|p| p.id).collect();
    let mut reported = HashSet::new();
    let missing: Vec<ParticipantId> = request
        .participant_ids
        .iter()
        .copied()
        .filter(|id| !found_ids.contains(id) && reported.insert(*id))
        .collect();
    if !missing.is_empty() {
        warn!("Participants not found: {}", format_ids(&missing));
        return Err(SchedulingError::ParticipantsNotFound { missing });
    }

    let candidate = normalizer::normalize(request.start_local, &request.timezone, request.duration)?;
    info!("Proposed meeting UTC time: {}", candidate);

    let now = clock.utc_now();
    if candidate.start() < now {
        warn!(
            "Cannot schedule meeting in the past. Proposed start: {}, current UTC: {}",
            candidate.start(),
            now
        );
        return Err(SchedulingError::PastStartTime);
    }

    let existing = repo
        .meetings_overlapping(&request.participant_ids, candidate.start(), candidate.end())
        .await?;
    if let Some(conflict) = find_conflict(&candidate, &existing) {
        info!(
            "Conflict detected with existing meeting: {} {}",
            conflict.title(),
            conflict.interval()
        );

        let suggestions = find_next_available_slots(
            repo,
            clock,
            &request.participant_ids,
            candidate.end(),
            request.duration,
            SUGGESTION_COUNT,
        )
        .await?;
        return Err(SchedulingError::TimeConflict { suggestions });
    }

    let meeting = Meeting::new(request.title, candidate, request.participant_ids)
        .map_err(|e| SchedulingError::InvalidRequest(e.to_string()))?;
    repo.persist_meeting(&meeting).await?;

    info!(
        "Meeting '{}' scheduled successfully with ID: {}",
        meeting.title(),
        meeting.id()
    );

    Ok(ScheduledMeeting {
        meeting_id: meeting.id(),
        interval: candidate,
    })
}
