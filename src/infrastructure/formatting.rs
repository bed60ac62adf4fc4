// en-US display formatting for currency and timestamps
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::borrow::Cow;

const NOT_AVAILABLE: &str = "N/A";
const LOCALE_DATE_TIME: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// `$1,234.50` style USD formatting, `N/A` when the value is missing
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };

    let cents = (value.abs() * 100.0).round() as u128;
    let whole = group_thousands(cents / 100);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}${}.{:02}", sign, whole, cents % 100)
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-valued floats print without a fractional part (`5.0` -> `5`)
pub fn format_number(value: &serde_json::Number) -> String {
    match (value.as_i64(), value.as_u64(), value.as_f64()) {
        (Some(i), _, _) => i.to_string(),
        (None, Some(u), _) => u.to_string(),
        (None, None, Some(f)) => f.to_string(),
        _ => value.to_string(),
    }
}

pub fn format_local_time(time: &DateTime<Local>) -> String {
    time.format(LOCALE_DATE_TIME).to_string()
}

/// Render a backend timestamp in local time.
/// Offset-less timestamps are read as local time; anything unparseable is shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return format_local_time(&parsed.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));

    match naive.ok().and_then(|n| Local.from_local_datetime(&n).earliest()) {
        Some(local) => format_local_time(&local),
        None => raw.to_string(),
    }
}

pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '<' | '>' | '&' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
