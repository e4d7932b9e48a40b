use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// Shown wherever the scanner never reported a verification time.
pub const MISSING_TIMESTAMP: &str = "—";

/// Render a remote timestamp for display. Missing or blank input yields
/// the fixed placeholder; unparseable input is echoed back unchanged;
/// a valid RFC 3339 value is rendered in the viewer's local time.
pub fn format_timestamp(value: Option<&str>) -> String {
    let raw = match value.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return MISSING_TIMESTAMP.to_string(),
    };
    let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return raw.to_string();
    };
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    parsed
        .to_offset(offset)
        .format(
            &time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
                .unwrap(),
        )
        .unwrap_or_else(|_| raw.to_string())
}
