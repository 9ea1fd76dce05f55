//! Request Composer — turns a validated [`BioRequest`] into one inference call
//! and validates what comes back.
//!
//! Flow: compose prompt + schema → single completion (no retry) → parse JSON →
//!       shape check → guideline review (logged only) → return.

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::bio::guidelines::{check_shape, GuidelineReport, ShapeViolation};
use crate::bio::models::{BioRequest, BioResponse};
use crate::bio::prompts::{bio_response_schema, build_user_prompt, BIO_SYSTEM};
use crate::llm_client::prompts::with_schema_instruction;
use crate::llm_client::{complete_json, CompletionBackend, CompletionRequest, LlmError};

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The call never produced a completion: network, auth, rate limit, upstream error.
    #[error("Inference transport failed: {0}")]
    Transport(#[source] LlmError),

    /// A completion came back but does not match the target shape.
    #[error("Inference output failed schema validation: {0}")]
    SchemaValidation(String),
}

impl From<LlmError> for GenerateError {
    fn from(err: LlmError) -> Self {
        if err.is_transport() {
            GenerateError::Transport(err)
        } else {
            GenerateError::SchemaValidation(err.to_string())
        }
    }
}

impl From<ShapeViolation> for GenerateError {
    fn from(violation: ShapeViolation) -> Self {
        GenerateError::SchemaValidation(violation.to_string())
    }
}

/// Builds the single outbound completion for a bio request: the fixed preamble
/// with the target schema appended, the serialized user fields, and the
/// caller's model and temperature.
pub fn compose(request: &BioRequest, max_tokens: u32) -> CompletionRequest {
    CompletionRequest {
        model: request.model().to_string(),
        system: with_schema_instruction(BIO_SYSTEM, &bio_response_schema()),
        prompt: build_user_prompt(request),
        temperature: request.temperature(),
        max_tokens,
        json_mode: true,
    }
}

/// Runs one generation against the inference boundary.
pub async fn generate_bios(
    backend: &dyn CompletionBackend,
    request: &BioRequest,
    max_tokens: u32,
) -> Result<BioResponse, GenerateError> {
    let span = info_span!(
        "generate_bios",
        request_id = %Uuid::new_v4(),
        model = request.model(),
        temperature = request.temperature()
    );

    async move {
        info!(
            "Requesting bios: type={}, tone={}, emojis={}",
            request.bio_type().as_str(),
            request.tone().as_str(),
            request.emojis()
        );

        let completion = compose(request, max_tokens);
        let response: BioResponse = complete_json(backend, &completion).await?;

        check_shape(&response)?;

        let report = GuidelineReport::review(request, &response);
        if !report.is_clean() {
            warn!(
                "Generated bios missed guidelines: shorter_than_input={:?}, unexpected_emoji={:?}",
                report.shorter_than_input, report.unexpected_emoji
            );
        }

        info!("Generated {} bios", response.data.len());
        Ok::<_, GenerateError>(response)
    }
    .instrument(span)
    .await
}
