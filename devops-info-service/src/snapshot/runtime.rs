//! Uptime and clock snapshot

use chrono::{DateTime, Utc};
use devops_info_common::human_time::format_uptime;
use devops_info_common::time::{self, iso_utc};
use devops_info_common::StartTime;
use serde::Serialize;

/// Timezone label; all timestamps are produced in UTC
pub const TIMEZONE: &str = "UTC";

/// Runtime facts computed per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeSnapshot {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: String,
}

impl RuntimeSnapshot {
    /// Snapshot of the process uptime and the current UTC time
    pub fn collect(start: &StartTime) -> Self {
        Self::at(start.uptime_seconds(), time::now())
    }

    /// Snapshot for a given uptime observed at `now`
    pub fn at(uptime_seconds: u64, now: DateTime<Utc>) -> Self {
        Self {
            uptime_seconds,
            uptime_human: format_uptime(uptime_seconds),
            current_time: iso_utc(now),
            timezone: TIMEZONE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_at_fixed_instant() {
        let now = DateTime::parse_from_rfc3339("2025-02-03T04:05:06.789Z")
            .unwrap()
            .with_timezone(&Utc);
        let snapshot = RuntimeSnapshot::at(3661, now);

        assert_eq!(snapshot.uptime_seconds, 3661);
        assert_eq!(snapshot.uptime_human, "1 hours, 1 minutes");
        assert_eq!(snapshot.current_time, "2025-02-03T04:05:06.789000Z");
        assert_eq!(snapshot.timezone, "UTC");
    }

    #[test]
    fn test_collect_from_fresh_start() {
        let snapshot = RuntimeSnapshot::collect(&StartTime::now());
        assert_eq!(snapshot.uptime_seconds, 0);
        assert_eq!(snapshot.uptime_human, "0 hours, 0 minutes");
        assert!(snapshot.current_time.ends_with('Z'));
    }
}
