use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::analysis::AnalysisError;

pub const NO_TEXT_MESSAGE: &str = "No text provided";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no text provided")]
    NoTextProvided,

    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
}

impl From<AnalysisError> for GatewayError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyText => GatewayError::NoTextProvided,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            GatewayError::NoTextProvided => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: NO_TEXT_MESSAGE.to_string(),
                    details: None,
                },
            ),
            GatewayError::AnalysisFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: ANALYSIS_FAILED_MESSAGE.to_string(),
                    details: Some(details),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
