//! Participant directory operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Participant, ParticipantId};

/// Read and create participants.
///
/// The scheduling core never deletes or mutates participants; it resolves
/// identities and reads timezone metadata. Creation exists for the thin
/// directory API the server exposes.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Resolve a set of participant ids.
    ///
    /// Partial results are allowed: unknown ids are simply absent from the
    /// returned list, and the caller detects them by set difference.
    async fn find_participants(
        &self,
        ids: &[ParticipantId],
    ) -> RepositoryResult<Vec<Participant>>;

    /// List every known participant.
    async fn list_participants(&self) -> RepositoryResult<Vec<Participant>>;

    /// Create a participant with a fresh identity.
    async fn create_participant(
        &self,
        name: &str,
        timezone: &str,
    ) -> RepositoryResult<Participant>;
}
