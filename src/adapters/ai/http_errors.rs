//! Shared mapping from HTTP transport failures to [`AIError`].

use reqwest::Response;
use std::time::Duration;

use crate::ports::AIError;

const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Maps a reqwest send failure to the matching error variant.
pub(super) fn map_send_error(error: reqwest::Error, timeout: Duration) -> AIError {
    if error.is_timeout() {
        AIError::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    } else if error.is_connect() {
        AIError::network(format!("Connection failed: {}", error))
    } else {
        AIError::network(error.to_string())
    }
}

/// Passes successful responses through; converts error statuses.
pub(super) async fn check_status(response: Response) -> Result<Response, AIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), error_body))
}

fn status_error(status: u16, error_body: String) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(parse_retry_after(&error_body)),
        400 => AIError::InvalidRequest(error_body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Reads "try again in Ns" out of an error body, defaulting to 30 seconds.
fn parse_retry_after(error_body: &str) -> u32 {
    let message = serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|parsed| {
            parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    message
        .as_deref()
        .and_then(|s| s.find("try again in ").map(|idx| &s[idx + 13..]))
        .and_then(|rest| {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            rest[..end].parse::<u32>().ok()
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_retry_after_from_message() {
        let error =
            r#"{"error":{"message":"Rate limit exceeded. Please try again in 20 seconds."}}"#;
        assert_eq!(parse_retry_after(error), 20);
    }

    #[test]
    fn parse_retry_after_default() {
        assert_eq!(parse_retry_after(r#"{"error":{"message":"nope"}}"#), 30);
        assert_eq!(parse_retry_after("not json"), 30);
    }

    #[test]
    fn statuses_map_to_variants() {
        assert_eq!(status_error(401, String::new()), AIError::AuthenticationFailed);
        assert_eq!(status_error(403, String::new()), AIError::AuthenticationFailed);
        assert!(matches!(status_error(429, String::new()), AIError::RateLimited { .. }));
        assert!(matches!(status_error(400, "bad".into()), AIError::InvalidRequest(b) if b == "bad"));
        assert!(matches!(status_error(503, String::new()), AIError::Unavailable { .. }));
        assert!(matches!(status_error(302, String::new()), AIError::Network(_)));
    }
}
