use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Content(String),

    #[error("Groq API error: {0}")]
    Provider(String),

    #[error("Failed to parse AI response: {0}")]
    MalformedOutput(String),

    #[error("Invalid question format: {0}")]
    Schema(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Error::Validation(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Error::Content(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Provider(msg) => {
                tracing::error!("Upstream provider failure: {}", msg);
                (StatusCode::BAD_GATEWAY, format!("Groq API error: {}", msg))
            }
            Error::MalformedOutput(msg) => {
                tracing::error!("Model returned undecodable output: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to parse AI response".to_string(),
                )
            }
            Error::Schema(msg) => {
                tracing::error!("Model output failed structural validation: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Invalid question format: {}", msg),
                )
            }
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
