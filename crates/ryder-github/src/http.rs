//! Shared HTTP response helpers for the contents API.
//!
//! Maps GitHub status codes onto [`GitHubError`] so the request code only
//! deals with successful bodies. A 403 is ambiguous on GitHub: it is a quota
//! error when `x-ratelimit-remaining` is `0`, an access error otherwise.

use chrono::{DateTime, Utc};

use crate::error::GitHubError;

const RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATELIMIT_RESET: &str = "x-ratelimit-reset";

/// Check an HTTP response for error statuses, returning it unchanged on success.
///
/// - **404** → [`GitHubError::NotFound`] for `path`
/// - **429**, or **403** with an exhausted quota → [`GitHubError::RateLimited`]
/// - **401** / other **403** → [`GitHubError::Unauthorized`]
/// - any other non-success → [`GitHubError::Api`] with the response body
pub async fn check_response(
    resp: reqwest::Response,
    path: &str,
) -> Result<reqwest::Response, GitHubError> {
    let status = resp.status().as_u16();
    match status {
        200..=299 => Ok(resp),
        404 => Err(GitHubError::NotFound {
            path: path.to_string(),
        }),
        429 => Err(GitHubError::RateLimited {
            reset_at: parse_reset(&resp),
        }),
        403 if quota_exhausted(&resp) => Err(GitHubError::RateLimited {
            reset_at: parse_reset(&resp),
        }),
        401 | 403 => Err(GitHubError::Unauthorized { status }),
        _ => Err(GitHubError::Api {
            status,
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

fn header<'a>(resp: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

fn quota_exhausted(resp: &reqwest::Response) -> bool {
    header(resp, RATELIMIT_REMAINING).is_some_and(|v| v.trim() == "0")
}

/// Parse `x-ratelimit-reset` (unix seconds) into a timestamp.
fn parse_reset(resp: &reqwest::Response) -> Option<DateTime<Utc>> {
    header(resp, RATELIMIT_RESET)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    fn mock_response_with_headers(status: u16, headers: &[(&str, &str)]) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        reqwest::Response::from(builder.body("").unwrap())
    }

    #[test]
    fn parse_reset_from_header() {
        let resp = mock_response_with_headers(403, &[(RATELIMIT_RESET, "1735689600")]);
        let reset = parse_reset(&resp).unwrap();
        assert_eq!(reset.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn parse_reset_missing_or_garbage() {
        assert!(parse_reset(&mock_response(429)).is_none());
        let resp = mock_response_with_headers(429, &[(RATELIMIT_RESET, "soon")]);
        assert!(parse_reset(&resp).is_none());
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200), "docs").await.is_ok());
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let err = check_response(mock_response(404), "docs/recipes")
            .await
            .unwrap_err();
        assert!(matches!(err, GitHubError::NotFound { ref path } if path == "docs/recipes"));
    }

    #[tokio::test]
    async fn check_response_too_many_requests() {
        let err = check_response(mock_response(429), "docs").await.unwrap_err();
        assert!(matches!(err, GitHubError::RateLimited { reset_at: None }));
    }

    #[tokio::test]
    async fn check_response_forbidden_with_exhausted_quota() {
        let resp = mock_response_with_headers(
            403,
            &[(RATELIMIT_REMAINING, "0"), (RATELIMIT_RESET, "1735689600")],
        );
        let err = check_response(resp, "docs").await.unwrap_err();
        assert!(matches!(err, GitHubError::RateLimited { reset_at: Some(_) }));
    }

    #[tokio::test]
    async fn check_response_forbidden_with_quota_left() {
        let resp = mock_response_with_headers(403, &[(RATELIMIT_REMAINING, "42")]);
        let err = check_response(resp, "docs").await.unwrap_err();
        assert!(matches!(err, GitHubError::Unauthorized { status: 403 }));
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let err = check_response(mock_response(401), "docs").await.unwrap_err();
        assert!(matches!(err, GitHubError::Unauthorized { status: 401 }));
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let err = check_response(mock_response(500), "docs").await.unwrap_err();
        assert!(matches!(err, GitHubError::Api { status: 500, .. }));
    }
}
