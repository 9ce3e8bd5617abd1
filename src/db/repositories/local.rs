//! In-memory local repository implementation.
//!
//! Implements all repository traits over HashMaps for unit testing and
//! local development: fast, deterministic, and isolated per instance.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::{
    ErrorContext, MeetingRepository, ParticipantRepository, RepositoryError, RepositoryResult,
};
use crate::models::{Meeting, MeetingId, Participant, ParticipantId};

/// In-memory local repository.
///
/// Cloning is cheap and clones share the same underlying data, mirroring
/// how a pooled store handle behaves.
///
/// # Example
/// ```
/// use calendar_rust::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// let rafael = repo.add_participant("Rafael", "America/Sao_Paulo");
/// assert_ne!(rafael.id, repo.add_participant("Robert", "America/New_York").id);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    participants: HashMap<ParticipantId, Participant>,
    meetings: HashMap<MeetingId, Meeting>,
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Add a participant synchronously. Setup helper for tests and seeding.
    pub fn add_participant(&self, name: impl Into<String>, timezone: impl Into<String>) -> Participant {
        let participant = Participant::new(name, timezone);
        let mut data = self.data.write().unwrap();
        data.participants
            .insert(participant.id, participant.clone());
        participant
    }

    /// Insert a meeting synchronously, bypassing the write-time conflict
    /// check. Setup helper for seeding busy calendars in tests.
    pub fn insert_meeting_impl(&self, meeting: Meeting) -> MeetingId {
        let mut data = self.data.write().unwrap();
        let id = meeting.id();
        data.meetings.insert(id, meeting);
        id
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Number of meetings stored.
    pub fn meeting_count(&self) -> usize {
        self.data.read().unwrap().meetings.len()
    }

    /// Number of participants stored.
    pub fn participant_count(&self) -> usize {
        self.data.read().unwrap().participants.len()
    }

    /// Fetch a stored meeting by id, if present.
    pub fn get_meeting(&self, id: MeetingId) -> Option<Meeting> {
        self.data.read().unwrap().meetings.get(&id).cloned()
    }

    fn check_health(data: &LocalData) -> RepositoryResult<()> {
        if !data.is_healthy {
            return Err(RepositoryError::connection("Store is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParticipantRepository for LocalRepository {
    async fn find_participants(
        &self,
        ids: &[ParticipantId],
    ) -> RepositoryResult<Vec<Participant>> {
        let data = self.data.read().unwrap();
        Self::check_health(&data)?;

        // Partial results by contract: unknown ids are skipped, duplicates
        // in the query resolve once.
        let mut found = Vec::new();
        for id in ids {
            if let Some(p) = data.participants.get(id) {
                if !found.iter().any(|f: &Participant| f.id == *id) {
                    found.push(p.clone());
                }
            }
        }
        Ok(found)
    }

    async fn list_participants(&self) -> RepositoryResult<Vec<Participant>> {
        let data = self.data.read().unwrap();
        Self::check_health(&data)?;

        let mut all: Vec<Participant> = data.participants.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn create_participant(
        &self,
        name: &str,
        timezone: &str,
    ) -> RepositoryResult<Participant> {
        let mut data = self.data.write().unwrap();
        Self::check_health(&data)?;

        let participant = Participant::new(name, timezone);
        data.participants
            .insert(participant.id, participant.clone());
        Ok(participant)
    }
}

#[async_trait]
impl MeetingRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn meetings_overlapping(
        &self,
        participant_ids: &[ParticipantId],
        lower: DateTime<Utc>,
        upper: DateTime<Utc>,
    ) -> RepositoryResult<Vec<Meeting>> {
        let data = self.data.read().unwrap();
        Self::check_health(&data)?;

        // Pre-filter: stored_start < upper && stored_end > lower. Callers
        // re-validate with the exact overlap predicate.
        let mut rows: Vec<Meeting> = data
            .meetings
            .values()
            .filter(|m| participant_ids.iter().any(|id| m.involves(*id)))
            .filter(|m| m.interval().start() < upper && m.interval().end() > lower)
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.interval().start());
        Ok(rows)
    }

    async fn persist_meeting(&self, meeting: &Meeting) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        Self::check_health(&data)?;

        if data.meetings.contains_key(&meeting.id()) {
            return Err(RepositoryError::conflict_with_context(
                format!("Meeting {} already exists", meeting.id()),
                ErrorContext::new("persist_meeting")
                    .with_entity("meeting")
                    .with_entity_id(meeting.id()),
            ));
        }

        // Write-time double-booking check: the whole read-check-insert runs
        // under the write lock, so two racing requests cannot both pass.
        let double_booked = data.meetings.values().find(|existing| {
            existing.interval().overlaps(meeting.interval())
                && meeting
                    .participants()
                    .iter()
                    .any(|id| existing.involves(*id))
        });
        if let Some(existing) = double_booked {
            return Err(RepositoryError::conflict_with_context(
                format!(
                    "Meeting would double-book a participant of '{}' {}",
                    existing.title(),
                    existing.interval()
                ),
                ErrorContext::new("persist_meeting")
                    .with_entity("meeting")
                    .with_entity_id(existing.id()),
            ));
        }

        data.meetings.insert(meeting.id(), meeting.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;
    use chrono::TimeZone;

    fn utc(d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, d, h, min, 0).unwrap()
    }

    fn meeting(title: &str, start: DateTime<Utc>, end: DateTime<Utc>, who: &[ParticipantId]) -> Meeting {
        Meeting::new(
            title,
            TimeInterval::new(start, end).unwrap(),
            who.iter().copied(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_participants_partial_results() {
        let repo = LocalRepository::new();
        let rafael = repo.add_participant("Rafael", "America/Sao_Paulo");
        let unknown = ParticipantId::generate();

        let found = repo
            .find_participants(&[rafael.id, unknown])
            .await
            .unwrap();
        assert_eq!(found, vec![rafael]);
    }

    #[tokio::test]
    async fn test_find_participants_resolves_duplicates_once() {
        let repo = LocalRepository::new();
        let rafael = repo.add_participant("Rafael", "America/Sao_Paulo");

        let found = repo
            .find_participants(&[rafael.id, rafael.id])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_meetings_overlapping_filters_and_sorts() {
        let repo = LocalRepository::new();
        let rafael = repo.add_participant("Rafael", "America/Sao_Paulo");
        let other = repo.add_participant("Robert", "America/New_York");

        // Inserted out of order; the later meeting first.
        repo.insert_meeting_impl(meeting("Late", utc(30, 15, 0), utc(30, 16, 0), &[rafael.id]));
        repo.insert_meeting_impl(meeting("Early", utc(30, 13, 0), utc(30, 14, 0), &[rafael.id]));
        // Different participant, inside the window; must not be returned.
        repo.insert_meeting_impl(meeting("Other", utc(30, 13, 0), utc(30, 14, 0), &[other.id]));
        // Outside the window.
        repo.insert_meeting_impl(meeting("Past", utc(29, 9, 0), utc(29, 10, 0), &[rafael.id]));

        let rows = repo
            .meetings_overlapping(&[rafael.id], utc(30, 13, 30), utc(30, 17, 0))
            .await
            .unwrap();

        let titles: Vec<&str> = rows.iter().map(|m| m.title()).collect();
        assert_eq!(titles, ["Early", "Late"]);
    }

    #[tokio::test]
    async fn test_meetings_overlapping_excludes_boundary_touch() {
        let repo = LocalRepository::new();
        let rafael = repo.add_participant("Rafael", "America/Sao_Paulo");
        repo.insert_meeting_impl(meeting("Before", utc(30, 12, 0), utc(30, 13, 0), &[rafael.id]));

        // Window starts exactly where the meeting ends: pre-filter drops it.
        let rows = repo
            .meetings_overlapping(&[rafael.id], utc(30, 13, 0), utc(30, 14, 0))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_persist_meeting_stores_and_reads_back() {
        let repo = LocalRepository::new();
        let rafael = repo.add_participant("Rafael", "America/Sao_Paulo");
        let m = meeting("Sync", utc(30, 13, 0), utc(30, 14, 0), &[rafael.id]);

        repo.persist_meeting(&m).await.unwrap();
        assert_eq!(repo.get_meeting(m.id()), Some(m));
    }

    #[tokio::test]
    async fn test_persist_meeting_rejects_double_booking() {
        let repo = LocalRepository::new();
        let rafael = repo.add_participant("Rafael", "America/Sao_Paulo");
        repo.insert_meeting_impl(meeting("Busy", utc(30, 13, 0), utc(30, 14, 0), &[rafael.id]));

        let racing = meeting("Race", utc(30, 13, 30), utc(30, 14, 30), &[rafael.id]);
        let err = repo.persist_meeting(&racing).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict { .. }));
        assert_eq!(repo.meeting_count(), 1);
    }

    #[tokio::test]
    async fn test_persist_meeting_allows_adjacent_booking() {
        let repo = LocalRepository::new();
        let rafael = repo.add_participant("Rafael", "America/Sao_Paulo");
        repo.insert_meeting_impl(meeting("Busy", utc(30, 13, 0), utc(30, 14, 0), &[rafael.id]));

        let adjacent = meeting("Next", utc(30, 14, 0), utc(30, 15, 0), &[rafael.id]);
        repo.persist_meeting(&adjacent).await.unwrap();
        assert_eq!(repo.meeting_count(), 2);
    }

    #[tokio::test]
    async fn test_unhealthy_store_rejects_operations() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        let err = repo.list_participants().await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
    }

    #[tokio::test]
    async fn test_clear_keeps_health_flag() {
        let repo = LocalRepository::new();
        repo.add_participant("Rafael", "America/Sao_Paulo");
        repo.set_healthy(false);
        repo.clear();

        assert_eq!(repo.participant_count(), 0);
        assert!(!repo.health_check().await.unwrap());
    }
}
