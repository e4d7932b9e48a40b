use std::fmt;

/// Presentation severity for a raw verification status label.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ToneCategory {
    Info,
    Success,
    Warning,
    Pending,
    Error,
    Unknown,
}

impl ToneCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ToneCategory::Info => "info",
            ToneCategory::Success => "ok",
            ToneCategory::Warning => "warn",
            ToneCategory::Pending => "pending",
            ToneCategory::Error => "error",
            ToneCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ToneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a raw status label to its tone. Case-insensitive exact match,
/// first match wins; anything unrecognized is `Unknown`. Total, no
/// error path.
pub fn classify(status: &str) -> ToneCategory {
    match status.trim().to_ascii_lowercase().as_str() {
        "billable" => ToneCategory::Warning,
        "effective" | "valid" => ToneCategory::Success,
        "pending" => ToneCategory::Pending,
        "rate_limited" | "rate-limited" => ToneCategory::Warning,
        "invalid" | "error" => ToneCategory::Error,
        _ => ToneCategory::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_labels() {
        assert_eq!(classify("billable"), ToneCategory::Warning);
        assert_eq!(classify("effective"), ToneCategory::Success);
        assert_eq!(classify("valid"), ToneCategory::Success);
        assert_eq!(classify("pending"), ToneCategory::Pending);
        assert_eq!(classify("invalid"), ToneCategory::Error);
        assert_eq!(classify("error"), ToneCategory::Error);
    }

    #[test]
    fn classify_ignores_case() {
        assert_eq!(classify("RATE_LIMITED"), ToneCategory::Warning);
        assert_eq!(classify("rate-limited"), ToneCategory::Warning);
        assert_eq!(classify("Valid"), ToneCategory::Success);
    }

    #[test]
    fn classify_requires_exact_match() {
        assert_eq!(classify("validated"), ToneCategory::Unknown);
        assert_eq!(classify("rate"), ToneCategory::Unknown);
    }

    #[test]
    fn classify_unknown_and_empty() {
        assert_eq!(classify(""), ToneCategory::Unknown);
        assert_eq!(classify("quarantined"), ToneCategory::Unknown);
    }
}
