//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API
//! and shape the core's `Result` into the outward outcome contract.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Participant, ProposedSlot};
use crate::services::scheduling::SchedulingError;

/// Request body for scheduling a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMeetingRequestDto {
    /// Meeting title
    pub title: String,
    /// Wall-clock start time in the requester's timezone (no offset)
    pub start_time: NaiveDateTime,
    /// Meeting length in seconds
    pub duration_seconds: i64,
    /// Participants to invite
    pub participant_ids: Vec<Uuid>,
    /// IANA timezone of `start_time`; empty or omitted means UTC
    #[serde(default)]
    pub time_zone_id: String,
}

/// A suggested free slot on the UTC timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeSlotDto {
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
}

impl From<ProposedSlot> for TimeSlotDto {
    fn from(slot: ProposedSlot) -> Self {
        Self {
            start_utc: slot.interval.start(),
            end_utc: slot.interval.end(),
        }
    }
}

/// Outcome of a scheduling request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMeetingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<Uuid>,
    pub message: String,
    #[serde(default)]
    pub suggested_slots: Vec<TimeSlotDto>,
}

impl ScheduleMeetingResponse {
    pub fn scheduled(meeting_id: Uuid) -> Self {
        Self {
            success: true,
            meeting_id: Some(meeting_id),
            message: "Meeting scheduled successfully.".to_string(),
            suggested_slots: Vec::new(),
        }
    }

    /// Shape a recoverable scheduling failure; the message comes from the
    /// error itself and suggestions ride along on conflicts.
    pub fn rejected(error: &SchedulingError) -> Self {
        let suggested_slots = match error {
            SchedulingError::TimeConflict { suggestions } => {
                suggestions.iter().copied().map(Into::into).collect()
            }
            _ => Vec::new(),
        };
        Self {
            success: false,
            meeting_id: None,
            message: error.to_string(),
            suggested_slots,
        }
    }
}

/// Request body for creating a participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateParticipantRequest {
    pub name: String,
    /// IANA timezone identifier
    pub time_zone_id: String,
}

/// Participant DTO for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub id: Uuid,
    pub name: String,
    pub time_zone_id: String,
}

impl From<Participant> for ParticipantDto {
    fn from(p: Participant) -> Self {
        Self {
            id: p.id.value(),
            name: p.name,
            time_zone_id: p.timezone,
        }
    }
}

/// Participant list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantListResponse {
    pub participants: Vec<ParticipantDto>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}
