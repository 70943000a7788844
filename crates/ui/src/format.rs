use chrono::NaiveDateTime;

pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%a %d %b %Y").to_string()
}

pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

/// `09:00 - 10:00`
pub fn format_time_range(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}

/// Placeholder for values the backend leaves empty.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}
