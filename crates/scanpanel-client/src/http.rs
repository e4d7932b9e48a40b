use crate::error::FetchError;
use reqwest::StatusCode;
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub(crate) fn send(builder: RequestBuilder) -> Result<Response, FetchError> {
    builder
        .send()
        .map_err(|err| FetchError::Transport(err.to_string()))
}

/// Pass 2xx through; anything else becomes a `Status` error whose detail
/// is the response body text, or `HTTP {status}` when the body is empty.
pub(crate) fn require_success(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(FetchError::Status(status_detail(status, &body)))
}

pub(crate) fn status_detail(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    response
        .json()
        .map_err(|err| FetchError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_detail_prefers_body_text() {
        assert_eq!(
            status_detail(StatusCode::BAD_GATEWAY, "scanner offline"),
            "scanner offline"
        );
    }

    #[test]
    fn status_detail_falls_back_to_status_code() {
        assert_eq!(status_detail(StatusCode::SERVICE_UNAVAILABLE, ""), "HTTP 503");
        assert_eq!(status_detail(StatusCode::NOT_FOUND, "  \n"), "HTTP 404");
    }
}
