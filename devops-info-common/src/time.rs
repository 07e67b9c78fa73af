//! Timestamp and uptime utilities

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{Duration, Instant};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a UTC instant as ISO-8601 with microseconds and a literal `Z` suffix
///
/// Produces e.g. `2024-05-01T12:30:45.123456Z`, never `+00:00`.
pub fn iso_utc(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Instant the server started serving
///
/// Captured once in `main` and handed to the router state. Uptime is measured
/// against the monotonic clock so it never goes backwards, even if the wall
/// clock is adjusted while the process runs.
#[derive(Debug, Clone, Copy)]
pub struct StartTime {
    instant: Instant,
    started_at: DateTime<Utc>,
}

impl StartTime {
    /// Capture the current instant as the start time
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Start time placed `ago` in the past
    ///
    /// Falls back to the current instant when the monotonic clock cannot go
    /// back that far (e.g. shortly after boot).
    pub fn backdated(ago: Duration) -> Self {
        let current = Self::now();
        match current.instant.checked_sub(ago) {
            Some(instant) => Self {
                instant,
                started_at: current.started_at
                    - chrono::Duration::from_std(ago).unwrap_or(chrono::Duration::zero()),
            },
            None => current,
        }
    }

    /// Wall-clock time the server started (UTC)
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time elapsed since start
    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }

    /// Whole seconds elapsed since start
    pub fn uptime_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }
}
