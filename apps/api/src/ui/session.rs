//! Form session — the presentation state machine for one form instance.
//!
//! Idle → Submitting → (Success | Failure) → Idle.
//! Only one submission may be outstanding at a time. A failed submission
//! leaves the previous output in place and returns to Idle silently.

use thiserror::Error;
use tracing::{error, warn};

use crate::bio::composer::GenerateError;
use crate::bio::models::{BioRequest, BioRequestBody, BioResponse, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// How a finished submission ended. Both outcomes settle back to [`Phase::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("invalid input: {0}")]
    Invalid(FieldErrors),
}

#[derive(Debug, Clone)]
pub struct FormSession {
    values: BioRequestBody,
    errors: FieldErrors,
    phase: Phase,
    output: Option<BioResponse>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// A fresh Idle session showing the form defaults and no output.
    pub fn new() -> Self {
        Self {
            values: BioRequestBody::default(),
            errors: FieldErrors::default(),
            phase: Phase::Idle,
            output: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Submitting
    }

    pub fn values(&self) -> &BioRequestBody {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn output(&self) -> Option<&BioResponse> {
        self.output.as_ref()
    }

    /// Validates `values` and moves to Submitting. The returned request is the
    /// only way to reach the inference boundary, so invalid input never leaves
    /// the session.
    pub fn begin_submit(&mut self, values: BioRequestBody) -> Result<BioRequest, SubmitRejected> {
        if self.phase == Phase::Submitting {
            return Err(SubmitRejected::InFlight);
        }

        self.values = values;
        match self.values.validate() {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.phase = Phase::Submitting;
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Records the result of the outstanding submission and returns to Idle.
    pub fn finish(&mut self, result: Result<BioResponse, GenerateError>) -> Outcome {
        if self.phase != Phase::Submitting {
            warn!("finish() called with no submission in flight");
        }
        self.phase = Phase::Idle;

        match result {
            Ok(response) => {
                self.output = Some(response);
                Outcome::Success
            }
            Err(e) => {
                error!("Bio generation failed: {e}");
                Outcome::Failure
            }
        }
    }
}
