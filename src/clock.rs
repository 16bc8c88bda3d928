//! Wall-clock access and the derived time fields of a snapshot.
//! Used by: snapshot, state, handlers::metrics.

use chrono::{DateTime, SecondsFormat, Utc};

/// 2025-08-01T00:00:00Z in milliseconds since the Unix epoch.
pub const UPTIME_EPOCH_MS: i64 = 1_754_006_400_000;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub fn uptime_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(UPTIME_EPOCH_MS).unwrap_or_default()
}

/// Whole seconds since the uptime epoch, floored toward negative infinity.
pub fn uptime_seconds(now: DateTime<Utc>) -> i64 {
    (now.timestamp_millis() - UPTIME_EPOCH_MS).div_euclid(1000)
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn epoch_constant_is_first_of_august() {
        assert_eq!(iso_timestamp(uptime_epoch()), "2025-08-01T00:00:00.000Z");
    }

    #[test]
    fn uptime_is_zero_at_epoch() {
        assert_eq!(uptime_seconds(uptime_epoch()), 0);
    }

    #[test]
    fn uptime_floors_partial_seconds() {
        let t = uptime_epoch() + Duration::milliseconds(1_999);
        assert_eq!(uptime_seconds(t), 1);
    }

    #[test]
    fn uptime_before_epoch_floors_down() {
        let t = uptime_epoch() - Duration::milliseconds(1);
        assert_eq!(uptime_seconds(t), -1);
    }

    #[test]
    fn uptime_counts_whole_days() {
        let t = uptime_epoch() + Duration::days(2);
        assert_eq!(uptime_seconds(t), 172_800);
    }

    #[test]
    fn ten_seconds_later_adds_ten() {
        let t1 = uptime_epoch() + Duration::milliseconds(123_456_789);
        let t2 = t1 + Duration::seconds(10);
        assert_eq!(uptime_seconds(t2) - uptime_seconds(t1), 10);
    }

    #[test]
    fn timestamp_has_millis_and_z_suffix() {
        let t = uptime_epoch() + Duration::milliseconds(3_723_045);
        assert_eq!(iso_timestamp(t), "2025-08-01T01:02:03.045Z");
    }

    #[test]
    fn manual_clock_advances() {
        let clock = manual::ManualClock::at(uptime_epoch());
        clock.advance(Duration::seconds(5));
        assert_eq!(uptime_seconds(clock.now()), 5);
    }
}
