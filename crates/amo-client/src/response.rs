//! HTTP response handling with amoCRM-specific extensions.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result, ValidationError};
use crate::security::sanitize_error_message;

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Returns true for 204 No Content, which amoCRM sends for empty lists.
    pub fn is_no_content(&self) -> bool {
        self.status() == 204
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the Retry-After header as a Duration.
    pub fn retry_after(&self) -> Option<Duration> {
        self.header("retry-after")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let text = self.inner.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Deserialize the body as JSON, or return `None` for an empty body.
    pub async fn json_opt<T: DeserializeOwned>(self) -> Result<Option<T>> {
        if self.is_no_content() {
            return Ok(None);
        }
        let text = self.inner.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text).map(Some).map_err(Into::into)
    }
}

/// Extension trait for response error checking.
pub trait ResponseExt {
    /// Check for amoCRM API errors and convert to appropriate error type.
    fn check_amo_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_amo_error(self) -> Result<Response> {
        let status = self.status();

        if self.is_success() {
            return Ok(self);
        }

        let retry_after = self.retry_after();
        let body = self.text().await.unwrap_or_default();
        let mut err = parse_error_response(status, &body);
        if let ErrorKind::RateLimited { retry_after: ref mut ra } = err.kind {
            *ra = retry_after;
        }
        Err(err)
    }
}

/// Parse an error response body and convert to the appropriate error kind.
pub(crate) fn parse_error_response(status: u16, body: &str) -> Error {
    if status == 429 {
        return Error::new(ErrorKind::RateLimited { retry_after: None });
    }

    if let Ok(problem) = serde_json::from_str::<ProblemResponse>(body) {
        let detail = problem
            .detail
            .or(problem.hint)
            .map(|d| sanitize_error_message(&d));
        let title = problem.title.unwrap_or_else(|| format!("HTTP {}", status));

        let kind = match status {
            401 => ErrorKind::Authentication(detail.unwrap_or(title)),
            403 => ErrorKind::Authorization(detail.unwrap_or(title)),
            404 => ErrorKind::NotFound(detail.unwrap_or(title)),
            _ => ErrorKind::AmoApi {
                status,
                title,
                detail,
                validation_errors: problem
                    .validation_errors
                    .into_iter()
                    .flat_map(|group| {
                        let request_id = group.request_id;
                        group.errors.into_iter().map(move |e| ValidationError {
                            request_id: request_id.clone(),
                            code: e.code,
                            path: e.path,
                            detail: sanitize_error_message(&e.detail),
                        })
                    })
                    .collect(),
            },
        };
        return Error::new(kind);
    }

    // Unstructured body: map the status, keep a sanitized copy of the text
    let sanitized = sanitize_error_message(body);
    let kind = match status {
        401 => ErrorKind::Authentication(sanitized),
        403 => ErrorKind::Authorization(sanitized),
        404 => ErrorKind::NotFound(sanitized),
        _ => ErrorKind::Http {
            status,
            message: sanitized,
        },
    };

    Error::new(kind)
}

/// amoCRM problem+json error body.
#[derive(Debug, Deserialize)]
struct ProblemResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default, rename = "validation-errors")]
    validation_errors: Vec<ValidationGroup>,
}

#[derive(Debug, Deserialize)]
struct ValidationGroup {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    errors: Vec<ValidationItem>,
}

#[derive(Debug, Deserialize)]
struct ValidationItem {
    #[serde(default)]
    code: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_response_with_validation_errors() {
        let body = r#"{
            "title": "Bad Request",
            "type": "https://httpstatus.es/400",
            "status": 400,
            "detail": "Request validation failed",
            "validation-errors": [
                {
                    "request_id": "0",
                    "errors": [
                        {"code": "NotSupportedChoice", "path": "custom_fields_values.0.field_id", "detail": "The value you selected is not a valid choice."}
                    ]
                }
            ]
        }"#;

        let err = parse_error_response(400, body);
        match err.kind {
            ErrorKind::AmoApi {
                status,
                title,
                detail,
                validation_errors,
            } => {
                assert_eq!(status, 400);
                assert_eq!(title, "Bad Request");
                assert_eq!(detail.as_deref(), Some("Request validation failed"));
                assert_eq!(validation_errors.len(), 1);
                assert_eq!(validation_errors[0].request_id.as_deref(), Some("0"));
                assert_eq!(validation_errors[0].code, "NotSupportedChoice");
                assert_eq!(validation_errors[0].path, "custom_fields_values.0.field_id");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_unauthorized_problem_uses_hint() {
        let body = r#"{"hint":"Token has expired","title":"Unauthorized","type":"https://developers.amocrm.ru/v3/errors/OAuthProblemJson","status":401}"#;
        let err = parse_error_response(401, body);
        assert!(err.is_auth_error());
        assert!(err.to_string().contains("Token has expired"));
    }

    #[test]
    fn test_unstructured_body_maps_status() {
        let err = parse_error_response(404, "not here");
        assert!(matches!(err.kind, ErrorKind::NotFound(ref m) if m == "not here"));

        let err = parse_error_response(403, "");
        assert!(matches!(err.kind, ErrorKind::Authorization(_)));

        let err = parse_error_response(502, "<html>Bad Gateway</html>");
        assert!(matches!(err.kind, ErrorKind::Http { status: 502, .. }));
    }

    #[test]
    fn test_rate_limit_status() {
        let err = parse_error_response(429, "{}");
        assert!(err.is_rate_limited());
    }
}
