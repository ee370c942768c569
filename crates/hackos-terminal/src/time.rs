//! Wall-clock helpers
//!
//! Hosts hand us `Date.now()`-style epoch milliseconds plus a fixed UTC
//! offset. Everything that prints a date goes through here.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Convert epoch milliseconds to a local time at a fixed offset
pub fn local_time(now_ms: f64, utc_offset_minutes: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix());
    DateTime::<Utc>::from_timestamp_millis(now_ms as i64)
        .unwrap_or_default()
        .with_timezone(&offset)
}

/// `Mon Jan 15 2024 19:42:37 GMT+0000`, the way a browser prints a date
pub fn long_date(time: &DateTime<FixedOffset>) -> String {
    time.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

/// `Mon Jan 15 2024 19:42:37`
pub fn login_date(time: &DateTime<FixedOffset>) -> String {
    time.format("%a %b %d %Y %H:%M:%S").to_string()
}

/// 24-hour `HH:MM`
pub fn clock_face(time: &DateTime<FixedOffset>) -> String {
    time.format("%H:%M").to_string()
}

/// `HH:MM:SS`, used for log timestamps
pub fn log_stamp(time: &DateTime<FixedOffset>) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-15T19:42:37Z
    const STAMP_MS: f64 = 1_705_347_757_000.0;

    #[test]
    fn test_local_time_utc() {
        let t = local_time(STAMP_MS, 0);
        assert_eq!(clock_face(&t), "19:42");
        assert_eq!(login_date(&t), "Mon Jan 15 2024 19:42:37");
        assert_eq!(long_date(&t), "Mon Jan 15 2024 19:42:37 GMT+0000");
    }

    #[test]
    fn test_local_time_offset() {
        let t = local_time(STAMP_MS, 120);
        assert_eq!(clock_face(&t), "21:42");
        assert_eq!(log_stamp(&t), "21:42:37");
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        let t = local_time(STAMP_MS, 100_000);
        assert_eq!(clock_face(&t), "19:42");
    }
}
