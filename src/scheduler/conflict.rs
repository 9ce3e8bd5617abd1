//! Conflict detection over a set of existing meetings.

use crate::models::{Meeting, TimeInterval};

/// First meeting in `existing` whose interval overlaps the candidate, or
/// `None` when the candidate is clear.
///
/// `existing` is the union of the requested participants' meetings as
/// returned by the store, deduplicated by identity. The store pre-filters
/// rows with `stored_start < candidate_end && stored_end > candidate_start`
/// for efficiency, but every row is re-checked here with the exact
/// half-open predicate — the pre-filter is not trusted for correctness.
///
/// Only existence matters to the scheduling decision; no ranking among
/// simultaneous conflicts happens at this layer. Ordering of `existing` is
/// significant to the slot search, which feeds an ascending-by-start list
/// and advances past the first blocker it sees.
pub fn find_conflict<'a>(
    candidate: &TimeInterval,
    existing: &'a [Meeting],
) -> Option<&'a Meeting> {
    existing.iter().find(|m| m.interval().overlaps(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantId;
    use chrono::{DateTime, TimeZone, Utc};

    fn utc(h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 30, h, min, 0).unwrap()
    }

    fn interval(sh: u32, sm: u32, eh: u32, em: u32) -> TimeInterval {
        TimeInterval::new(utc(sh, sm), utc(eh, em)).unwrap()
    }

    fn meeting(title: &str, iv: TimeInterval) -> Meeting {
        Meeting::new(title, iv, [ParticipantId::generate()]).unwrap()
    }

    #[test]
    fn test_no_conflict_when_empty() {
        let candidate = interval(13, 0, 14, 0);
        assert!(find_conflict(&candidate, &[]).is_none());
    }

    #[test]
    fn test_returns_first_overlap_in_supplied_order() {
        let candidate = interval(13, 0, 14, 0);
        let meetings = vec![
            meeting("Clear", interval(9, 0, 10, 0)),
            meeting("First", interval(13, 15, 13, 45)),
            meeting("Second", interval(13, 30, 14, 30)),
        ];

        let hit = find_conflict(&candidate, &meetings).unwrap();
        assert_eq!(hit.title(), "First");
    }

    #[test]
    fn test_boundary_touch_is_not_a_conflict() {
        let candidate = interval(13, 0, 14, 0);
        let meetings = vec![
            meeting("Before", interval(12, 0, 13, 0)),
            meeting("After", interval(14, 0, 15, 0)),
        ];
        assert!(find_conflict(&candidate, &meetings).is_none());
    }

    #[test]
    fn test_revalidates_rows_the_prefilter_let_through() {
        // A sloppy pre-filter may return rows that only touch the window;
        // the exact predicate must still reject them.
        let candidate = interval(13, 0, 14, 0);
        let meetings = vec![
            meeting("Touching", interval(14, 0, 15, 0)),
            meeting("Real", interval(13, 59, 15, 0)),
        ];

        let hit = find_conflict(&candidate, &meetings).unwrap();
        assert_eq!(hit.title(), "Real");
    }
}
