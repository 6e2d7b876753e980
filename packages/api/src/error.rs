use serde::Deserialize;
use session::AuthError;

/// Error returned by [`crate::ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (network down, CORS,
    /// malformed body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `detail` is the backend's
    /// own message when it sent one.
    #[error("{detail}")]
    Api { status: u16, detail: String },
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Api {
                status: 400 | 401 | 403,
                ..
            } => AuthError::Unauthorized,
            other => AuthError::Transport(other.to_string()),
        }
    }
}

/// Pass a successful response through, turn anything else into
/// [`ApiError::Api`] with the backend's `{"detail": ...}` message.
pub(crate) async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    let detail = detail_message(status, &body);
    tracing::warn!(status = status.as_u16(), "api request failed: {detail}");
    Err(ApiError::Api {
        status: status.as_u16(),
        detail,
    })
}

fn detail_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        // FastAPI-style backends send `{"detail": "..."}`; validation errors
        // put a list there instead, which we stringify as-is.
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        let msg = detail_message(
            reqwest::StatusCode::FORBIDDEN,
            br#"{"detail": "Not enough privileges"}"#,
        );
        assert_eq!(msg, "Not enough privileges");
    }

    #[test]
    fn structured_detail_is_stringified() {
        let msg = detail_message(
            reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#,
        );
        assert!(msg.contains("field required"));
    }

    #[test]
    fn missing_detail_falls_back_to_status_text() {
        let msg = detail_message(reqwest::StatusCode::BAD_GATEWAY, b"<html>oops</html>");
        assert_eq!(msg, "Bad Gateway");
    }

    #[test]
    fn auth_mapping_collapses_rejections() {
        let rejected = ApiError::Api {
            status: 401,
            detail: "Could not validate credentials".to_string(),
        };
        assert!(matches!(AuthError::from(rejected), AuthError::Unauthorized));

        let broken = ApiError::Api {
            status: 500,
            detail: "Internal Server Error".to_string(),
        };
        assert!(matches!(AuthError::from(broken), AuthError::Transport(_)));
    }
}
