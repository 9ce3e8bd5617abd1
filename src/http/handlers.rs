//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Duration;

use super::dto::{
    CreateParticipantRequest, HealthResponse, ParticipantDto, ParticipantListResponse,
    ScheduleMeetingRequestDto, ScheduleMeetingResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::ParticipantId;
use crate::services::scheduling::{
    schedule_meeting as schedule_meeting_service, ScheduleMeetingRequest, SchedulingError,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Meetings
// =============================================================================

/// POST /v1/meetings/schedule
///
/// Schedule a new meeting for a list of participants. Returns 200 with a
/// success outcome, 200 with a conflict outcome when alternative slots
/// could be suggested, and 400 with a failure outcome otherwise.
pub async fn schedule_meeting(
    State(state): State<AppState>,
    Json(request): Json<ScheduleMeetingRequestDto>,
) -> Result<(StatusCode, Json<ScheduleMeetingResponse>), AppError> {
    let core_request = ScheduleMeetingRequest {
        title: request.title,
        start_local: request.start_time,
        duration: Duration::seconds(request.duration_seconds),
        participant_ids: request
            .participant_ids
            .into_iter()
            .map(ParticipantId::new)
            .collect(),
        timezone: request.time_zone_id,
    };

    match schedule_meeting_service(state.repository.as_ref(), state.clock.as_ref(), core_request)
        .await
    {
        Ok(booked) => Ok((
            StatusCode::OK,
            Json(ScheduleMeetingResponse::scheduled(booked.meeting_id.value())),
        )),
        Err(SchedulingError::Persistence(e)) => Err(AppError::Repository(e)),
        Err(recoverable) => {
            let response = ScheduleMeetingResponse::rejected(&recoverable);
            // A conflict that comes with suggestions is an answer, not a
            // client error.
            let status = if response.suggested_slots.is_empty() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::OK
            };
            Ok((status, Json(response)))
        }
    }
}

// =============================================================================
// Participants
// =============================================================================

/// GET /v1/participants
///
/// List all known participants.
pub async fn list_participants(
    State(state): State<AppState>,
) -> HandlerResult<ParticipantListResponse> {
    let participants = state.repository.list_participants().await?;

    let dtos: Vec<ParticipantDto> = participants.into_iter().map(Into::into).collect();
    let total = dtos.len();

    Ok(Json(ParticipantListResponse {
        participants: dtos,
        total,
    }))
}

/// POST /v1/participants
///
/// Create a new participant.
pub async fn create_participant(
    State(state): State<AppState>,
    Json(request): Json<CreateParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantDto>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("Participant name must not be empty".to_string()));
    }
    if !request.time_zone_id.is_empty() && request.time_zone_id.parse::<chrono_tz::Tz>().is_err() {
        return Err(AppError::BadRequest(format!(
            "Invalid timezone ID provided: {}",
            request.time_zone_id
        )));
    }

    let participant = state
        .repository
        .create_participant(&request.name, &request.time_zone_id)
        .await?;

    Ok((StatusCode::CREATED, Json(participant.into())))
}
