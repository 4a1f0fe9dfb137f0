use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, instrument, warn};

use crate::analysis::{AnalysisRequest, AnalysisResponse};
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;

/// `POST /analyze`.
///
/// A body that is not a JSON object is a server-side failure (500), while a
/// missing, null, or blank `text` is a client error (400).
#[instrument(skip(state, payload))]
pub async fn analyze_handler(
    State(state): State<HandlerState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, GatewayError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(error = %rejection, "Error in analysis");
        GatewayError::AnalysisFailed(rejection.body_text())
    })?;

    let Some(text) = request.trimmed_text() else {
        warn!("Rejected request without text");
        return Err(GatewayError::NoTextProvided);
    };

    let response = state.analyzer.analyze(text).await?;
    Ok(Json(response))
}
