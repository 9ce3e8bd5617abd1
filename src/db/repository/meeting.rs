//! Meeting storage operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::RepositoryResult;
use crate::models::{Meeting, ParticipantId};

/// Query and persist meetings.
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Every meeting involving any of the given participants whose stored
    /// interval could overlap `[lower, upper)`.
    ///
    /// The result is deduplicated by meeting identity and sorted ascending
    /// by start time. Implementations pre-filter with
    /// `stored_start < upper && stored_end > lower`; the filter is an
    /// optimization, not a contract — callers re-validate every row with
    /// the exact half-open overlap predicate.
    async fn meetings_overlapping(
        &self,
        participant_ids: &[ParticipantId],
        lower: DateTime<Utc>,
        upper: DateTime<Utc>,
    ) -> RepositoryResult<Vec<Meeting>>;

    /// Durably store a new meeting.
    ///
    /// The store is the arbiter of double-booking races between concurrent
    /// requests: an implementation may reject a meeting that would overlap
    /// an existing commitment of any of its participants with
    /// [`RepositoryError::Conflict`](super::RepositoryError::Conflict).
    async fn persist_meeting(&self, meeting: &Meeting) -> RepositoryResult<()>;
}
