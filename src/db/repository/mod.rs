//! Repository trait definitions for store operations.
//!
//! Store access is split across focused traits so implementations stay
//! testable and callers only depend on what they use:
//!
//! - [`error`]: Error types for repository operations
//! - [`participant`]: Participant directory (resolve, list, create)
//! - [`meeting`]: Meeting queries and persistence
//!
//! Functions that need the whole store take the composite
//! [`CalendarRepository`] bound:
//!
//! ```ignore
//! async fn my_service<R: CalendarRepository + ?Sized>(repo: &R) -> RepositoryResult<()> {
//!     let participants = repo.find_participants(&ids).await?;
//!     repo.persist_meeting(&meeting).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod meeting;
pub mod participant;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use meeting::MeetingRepository;
pub use participant::ParticipantRepository;

/// Composite trait bound for a complete store implementation.
///
/// Automatically implemented for any type that implements both repository
/// traits.
pub trait CalendarRepository: ParticipantRepository + MeetingRepository {}

impl<T> CalendarRepository for T where T: ParticipantRepository + MeetingRepository {}
