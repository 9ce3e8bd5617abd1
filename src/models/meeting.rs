use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::participant::ParticipantId;
use super::time::TimeInterval;

/// Meeting identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingId(pub Uuid);

impl MeetingId {
    pub fn new(value: Uuid) -> Self {
        MeetingId(value)
    }

    /// Mint a fresh random identifier.
    pub fn generate() -> Self {
        MeetingId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for MeetingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned by the [`Meeting`] validating factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeetingError {
    #[error("meeting title must not be empty")]
    EmptyTitle,
}

/// A booked meeting.
///
/// Constructed only through [`Meeting::new`], which assigns the identity,
/// validates the title, and deduplicates the participant set. The interval
/// is UTC by type and non-empty by the [`TimeInterval`] invariant. Once a
/// meeting has been handed to the store it is never mutated by this core;
/// changes are full replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meeting {
    id: MeetingId,
    title: String,
    interval: TimeInterval,
    participants: Vec<ParticipantId>,
}

impl Meeting {
    /// Validating factory: mints an identity and checks the invariants.
    pub fn new(
        title: impl Into<String>,
        interval: TimeInterval,
        participants: impl IntoIterator<Item = ParticipantId>,
    ) -> Result<Self, MeetingError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(MeetingError::EmptyTitle);
        }

        // Set semantics: keep first occurrence of each participant.
        let mut seen = HashSet::new();
        let participants = participants
            .into_iter()
            .filter(|p| seen.insert(*p))
            .collect();

        Ok(Self {
            id: MeetingId::generate(),
            title,
            interval,
            participants,
        })
    }

    pub fn id(&self) -> MeetingId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    /// Whether the given participant attends this meeting.
    pub fn involves(&self, participant: ParticipantId) -> bool {
        self.participants.contains(&participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn interval() -> TimeInterval {
        TimeInterval::new(
            Utc.with_ymd_and_hms(2025, 5, 30, 13, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 5, 30, 14, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_assigns_identity_and_keeps_fields() {
        let attendee = ParticipantId::generate();
        let meeting = Meeting::new("Planning", interval(), [attendee]).unwrap();

        assert_eq!(meeting.title(), "Planning");
        assert_eq!(*meeting.interval(), interval());
        assert_eq!(meeting.participants(), [attendee]);
    }

    #[test]
    fn test_new_rejects_empty_title() {
        assert_eq!(
            Meeting::new("", interval(), []),
            Err(MeetingError::EmptyTitle)
        );
        assert_eq!(
            Meeting::new("   ", interval(), []),
            Err(MeetingError::EmptyTitle)
        );
    }

    #[test]
    fn test_new_deduplicates_participants() {
        let a = ParticipantId::generate();
        let b = ParticipantId::generate();
        let meeting = Meeting::new("Sync", interval(), [a, b, a]).unwrap();
        assert_eq!(meeting.participants(), [a, b]);
    }

    #[test]
    fn test_involves() {
        let a = ParticipantId::generate();
        let meeting = Meeting::new("Sync", interval(), [a]).unwrap();
        assert!(meeting.involves(a));
        assert!(!meeting.involves(ParticipantId::generate()));
    }
}
