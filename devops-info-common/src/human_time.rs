//! Human-readable uptime formatting

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Format an uptime in seconds as `"<H> hours, <M> minutes"`.
///
/// Leftover seconds are dropped and hours are never folded into days.
/// Units are always plural.
///
/// # Examples
///
/// ```
/// use devops_info_common::human_time::format_uptime;
///
/// assert_eq!(format_uptime(3661), "1 hours, 1 minutes");
/// assert_eq!(format_uptime(59), "0 hours, 0 minutes");
/// assert_eq!(format_uptime(90_000), "25 hours, 0 minutes");
/// ```
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    format!("{} hours, {} minutes", hours, minutes)
}
