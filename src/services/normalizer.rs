//! Wall-clock to UTC normalization.
//!
//! Requests arrive with a timezone-naive local start time and an IANA zone
//! identifier; everything downstream operates on one absolute UTC
//! timeline. Resolution goes through the system timezone database
//! (chrono-tz), so DST offset rules at the requested date apply.

use chrono::{Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::scheduling::SchedulingError;
use crate::models::TimeInterval;

/// Convert a local start time + zone identifier + duration into a UTC
/// interval.
///
/// An empty identifier means the wall-clock value is already UTC. An
/// unknown identifier fails with [`SchedulingError::InvalidTimezone`]
/// echoing the identifier verbatim. Deterministic: the same inputs always
/// produce the same interval.
///
/// DST edges: an ambiguous local time (clocks rolled back) resolves to the
/// earliest of its two mappings; a nonexistent local time (clocks rolled
/// forward over it) is rejected as [`SchedulingError::InvalidRequest`].
pub fn normalize(
    start_local: NaiveDateTime,
    timezone: &str,
    duration: Duration,
) -> Result<TimeInterval, SchedulingError> {
    let start_utc = if timezone.is_empty() {
        Utc.from_utc_datetime(&start_local)
    } else {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| SchedulingError::InvalidTimezone {
                timezone: timezone.to_string(),
            })?;
        match tz.from_local_datetime(&start_local) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
            LocalResult::None => {
                return Err(SchedulingError::InvalidRequest(format!(
                    "local time {} does not exist in timezone {}",
                    start_local, timezone
                )))
            }
        }
    };

    TimeInterval::from_start_and_duration(start_utc, duration)
        .map_err(|e| SchedulingError::InvalidRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn naive(y: i32, mo: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_timezone_means_utc() {
        let iv = normalize(naive(2025, 5, 30, 10, 0), "", Duration::hours(1)).unwrap();
        assert_eq!(iv.start(), Utc.with_ymd_and_hms(2025, 5, 30, 10, 0, 0).unwrap());
        assert_eq!(iv.end(), Utc.with_ymd_and_hms(2025, 5, 30, 11, 0, 0).unwrap());
    }

    #[test]
    fn test_sao_paulo_converts_to_utc() {
        // Sao Paulo is UTC-3 year-round since 2019.
        let iv = normalize(
            naive(2025, 5, 30, 10, 0),
            "America/Sao_Paulo",
            Duration::hours(1),
        )
        .unwrap();
        assert_eq!(iv.start(), Utc.with_ymd_and_hms(2025, 5, 30, 13, 0, 0).unwrap());
        assert_eq!(iv.end(), Utc.with_ymd_and_hms(2025, 5, 30, 14, 0, 0).unwrap());
    }

    #[test]
    fn test_dst_offset_applies_at_date() {
        // New York: EDT (UTC-4) in May, EST (UTC-5) in January.
        let summer = normalize(
            naive(2025, 5, 30, 10, 0),
            "America/New_York",
            Duration::hours(1),
        )
        .unwrap();
        assert_eq!(
            summer.start(),
            Utc.with_ymd_and_hms(2025, 5, 30, 14, 0, 0).unwrap()
        );

        let winter = normalize(
            naive(2025, 1, 30, 10, 0),
            "America/New_York",
            Duration::hours(1),
        )
        .unwrap();
        assert_eq!(
            winter.start(),
            Utc.with_ymd_and_hms(2025, 1, 30, 15, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_unknown_timezone_is_reported_verbatim() {
        let err = normalize(
            naive(2025, 5, 30, 10, 0),
            "America/Invalid_TZ",
            Duration::hours(1),
        )
        .unwrap_err();

        match &err {
            SchedulingError::InvalidTimezone { timezone } => {
                assert_eq!(timezone, "America/Invalid_TZ");
            }
            other => panic!("expected InvalidTimezone, got {other:?}"),
        }
        assert!(err.to_string().contains("America/Invalid_TZ"));
    }

    #[test]
    fn test_ambiguous_local_time_takes_earliest_mapping() {
        // 2025-11-02 01:30 happens twice in New York; the EDT (UTC-4)
        // occurrence comes first.
        let iv = normalize(
            naive(2025, 11, 2, 1, 30),
            "America/New_York",
            Duration::hours(1),
        )
        .unwrap();
        assert_eq!(iv.start(), Utc.with_ymd_and_hms(2025, 11, 2, 5, 30, 0).unwrap());
    }

    #[test]
    fn test_nonexistent_local_time_is_rejected() {
        // 2025-03-09 02:30 was skipped by the spring-forward jump.
        let err = normalize(
            naive(2025, 3, 9, 2, 30),
            "America/New_York",
            Duration::hours(1),
        )
        .unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidRequest(_)));
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        let err = normalize(naive(2025, 5, 30, 10, 0), "", Duration::zero()).unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidRequest(_)));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let a = normalize(
            naive(2025, 5, 30, 10, 0),
            "America/Sao_Paulo",
            Duration::minutes(45),
        )
        .unwrap();
        let b = normalize(
            naive(2025, 5, 30, 10, 0),
            "America/Sao_Paulo",
            Duration::minutes(45),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
