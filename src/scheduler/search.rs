//! Next-available-slot search.
//!
//! Cursor-driven forward scan over the shared busy timeline of a
//! participant set. Each pass probes one candidate window against the
//! store; a blocked candidate advances the cursor past the earliest
//! conflicting meeting and re-probes, so densely booked windows are
//! cleared over several iterations rather than one max-end computation.
//! That iterative shape is observable in the suggestion boundaries and is
//! relied on by callers.

use chrono::{DateTime, Duration, Utc};
use log::debug;

use super::conflict::find_conflict;
use crate::clock::Clock;
use crate::db::repository::{MeetingRepository, RepositoryResult};
use crate::models::{ParticipantId, ProposedSlot, TimeInterval};

/// Hard forward limit of the search, in days of simulated time from "now".
pub const SEARCH_HORIZON_DAYS: i64 = 30;

/// Minimum cursor advance applied when a blocking meeting ends exactly at
/// the probed candidate's end.
pub const MIN_ADVANCE_MINUTES: i64 = 15;

/// Find up to `count` free slots of `duration` for every participant in
/// `participant_ids`, scanning forward from `search_start`.
///
/// Returned slots are chronological, mutually non-overlapping, and each is
/// free for all listed participants at the moment it is produced. The scan
/// gives up at `now + 30 days` and may therefore return fewer than `count`
/// slots.
///
/// Cursor rules, per pass:
/// - blocked: jump to the end of the earliest-starting conflicting meeting
///   (the store feeds candidates ascending by start; the first true overlap
///   wins and the rest of the list is ignored for this pass);
/// - blocked with the blocker ending exactly at the candidate's end: jump
///   an extra 15 minutes, otherwise the next pass would re-probe the same
///   boundary without guaranteed progress;
/// - free: accept the candidate and continue immediately after it, so
///   consecutive free slots are contiguous.
pub async fn find_next_available_slots<R, C>(
    repo: &R,
    clock: &C,
    participant_ids: &[ParticipantId],
    search_start: DateTime<Utc>,
    duration: Duration,
    count: usize,
) -> RepositoryResult<Vec<ProposedSlot>>
where
    R: MeetingRepository + ?Sized,
    C: Clock + ?Sized,
{
    let horizon = clock.utc_now() + Duration::days(SEARCH_HORIZON_DAYS);
    let mut slots: Vec<ProposedSlot> = Vec::with_capacity(count);
    let mut cur = search_start;

    while slots.len() < count && cur < horizon {
        let candidate = match TimeInterval::from_start_and_duration(cur, duration) {
            Ok(candidate) => candidate,
            // Non-positive duration cannot form a candidate window.
            Err(_) => break,
        };

        let overlapping = repo
            .meetings_overlapping(participant_ids, candidate.start(), candidate.end())
            .await?;

        match find_conflict(&candidate, &overlapping) {
            Some(blocking) => {
                debug!(
                    "candidate {} blocked by '{}' {}",
                    candidate,
                    blocking.title(),
                    blocking.interval()
                );
                cur = blocking.interval().end();
                if cur == candidate.end() {
                    cur += Duration::minutes(MIN_ADVANCE_MINUTES);
                }
            }
            None => {
                slots.push(ProposedSlot::from(candidate));
                cur = candidate.end();
            }
        }
    }

    Ok(slots)
}
