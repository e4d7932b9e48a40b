use thiserror::Error;

/// Every boundary failure surfaces as one of these, each carrying a
/// human-readable detail. A probe reporting bad connectivity or auth is
/// a normal result, not a `FetchError`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("scanner panel unreachable: {0}")]
    Transport(String),
    #[error("{0}")]
    Status(String),
    #[error("malformed response: {0}")]
    Parse(String),
}
