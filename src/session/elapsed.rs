use chrono::{DateTime, Utc};

/// Format the time since `start` as `"{hours}h {minutes}m"`.
///
/// Seconds are floored away. An unset start renders as an empty string and
/// a start in the future renders as `0h 0m`.
pub fn format_elapsed(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(start) = start else {
        return String::new();
    };

    let total_minutes = (now - start).num_minutes().max(0);
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
