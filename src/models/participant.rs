use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Participant identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    pub fn new(value: Uuid) -> Self {
        ParticipantId(value)
    }

    /// Mint a fresh random identifier.
    pub fn generate() -> Self {
        ParticipantId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who can attend meetings.
///
/// Participants are owned by the persistence collaborator; the scheduling
/// core only reads them. The participant↔meeting relation lives in the
/// store as well — a `Participant` deliberately carries no collection of
/// meetings, so there is no cyclic ownership between the two entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// IANA timezone identifier, e.g. `America/Sao_Paulo`.
    pub timezone: String,
}

impl Participant {
    /// Create a participant with a freshly minted identity.
    pub fn new(name: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::generate(),
            name: name.into(),
            timezone: timezone.into(),
        }
    }
}
