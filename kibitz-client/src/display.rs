use std::fmt::Display;

use chrono::TimeZone;

use crate::api::Time;

/// How long ago `timestamp` was, as shown next to a comment
///
/// Anything older than a day is shown as its calendar date in `tz`.
pub fn relative_time<Tz>(timestamp: Time, now: Time, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let secs = (now - timestamp).num_seconds();
    if secs < 60 {
        String::from("Just now")
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        timestamp.with_timezone(tz).format("%-m/%-d/%Y").to_string()
    }
}

pub fn avatar_letter(username: &str) -> String {
    username
        .chars()
        .next()
        .unwrap_or('A')
        .to_uppercase()
        .collect()
}

pub fn like_label(is_liked: bool, count: u64) -> String {
    let icon = match is_liked {
        true => "❤️",
        false => "🤍",
    };
    format!("{icon} {count}")
}
