//! Application errors and their HTML rendering.
//!
//! Handlers return `AppErrorResponse`, which pairs an `AppError` with the
//! request id so the error page and the log line can be correlated.

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::config::CACHE_CONTROL_ERROR;
use crate::middleware::RequestId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Gallery tab not found: {0}")]
    TabNotFound(String),

    #[error("Image not found in this tab: {0}")]
    ImageNotFound(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::SnippetNotFound(_) | AppError::TabNotFound(_) | AppError::ImageNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// An `AppError` tagged with the request it occurred in.
#[derive(Debug)]
pub struct AppErrorResponse {
    pub error: AppError,
    pub request_id: Option<RequestId>,
}

impl From<AppError> for AppErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }
}

/// Attach the current request id to an error result.
pub trait ResultExt<T> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse> {
        self.map_err(|e| AppErrorResponse {
            error: e.into(),
            request_id: Some(request_id.clone()),
        })
    }
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = if status == StatusCode::NOT_FOUND {
            tracing::debug!(error = %self.error, "Not found");
            self.error.to_string()
        } else {
            tracing::error!(error = ?self.error, "Internal error");
            "Internal server error".to_string()
        };

        let reference = self
            .request_id
            .map(|id| format!("<p class=\"request-id\">Request ID: {}</p>", id.0))
            .unwrap_or_default();

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {code}</title>
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <div class="container">
        <div class="error-page">
            <h1>Error {code}</h1>
            <p>{message}</p>
            {reference}
            <a href="/">Return to homepage</a>
        </div>
    </div>
</body>
</html>"#,
            code = status.as_u16(),
            // Messages echo query input
            message = tera::escape_html(&message),
            reference = reference,
        );

        let mut response = (status, Html(body)).into_response();
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_ERROR));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_variants() {
        let response = AppErrorResponse::from(AppError::SnippetNotFound("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppErrorResponse::from(AppError::ImageNotFound("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_has_short_cache() {
        let response = AppErrorResponse::from(AppError::Template(tera::Error::msg("boom"))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[CACHE_CONTROL], CACHE_CONTROL_ERROR);
    }

    #[test]
    fn test_with_request_id() {
        let id = RequestId(Uuid::new_v4());
        let result: Result<(), AppError> = Err(AppError::TabNotFound("t".into()));
        let err = result.with_request_id(&id).unwrap_err();
        assert_eq!(err.request_id.unwrap().0, id.0);
    }

    #[tokio::test]
    async fn test_escape_html() {
        let error = AppError::SnippetNotFound("<script>\"x\" & 'y'</script>".into());
        let response = AppErrorResponse::from(error).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;&#x2F;script&gt;"));
    }
}
