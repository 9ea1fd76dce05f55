//! Axum route handlers for the bio JSON API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::bio::composer::generate_bios;
use crate::bio::models::{BioRequestBody, BioResponse, ModelOption, MODEL_CATALOG};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: &'static [ModelOption],
    pub defaults: BioRequestBody,
}

/// POST /api/v1/bios
///
/// Validates the request, runs one generation and returns the bios.
/// Invalid input is rejected before any call to the inference endpoint.
pub async fn handle_generate_bios(
    State(state): State<AppState>,
    payload: Result<Json<BioRequestBody>, JsonRejection>,
) -> Result<Json<BioResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;
    let request = body.validate().map_err(AppError::InvalidFields)?;

    let response = generate_bios(state.llm.as_ref(), &request, state.config.max_tokens).await?;

    Ok(Json(response))
}

/// GET /api/v1/models
pub async fn handle_list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: MODEL_CATALOG,
        defaults: BioRequestBody::default(),
    })
}
