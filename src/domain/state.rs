// src/domain/state.rs
use crate::domain::form::{FormInput, ValidationError};
use crate::predictor::{PredictError, PredictionRequest, PredictionResponse};

pub const FAILURE_MESSAGE: &str =
    "Oops! Something went wrong on the server. Please try again in a moment.";

/// Message shown above the result area while idle.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Validation(ValidationError),
    Failure,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Validation(err) => err.to_string(),
            Notice::Failure => FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle { notice: Option<Notice> },
    Submitting,
    Displayed(PredictionResponse),
}

/// Everything the predictor page renders from.
///
/// Transitions consume the state and hand back the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorState {
    pub form: FormInput,
    pub phase: Phase,
}

impl Default for PredictorState {
    fn default() -> Self {
        Self::new(FormInput::default())
    }
}

impl PredictorState {
    pub fn new(form: FormInput) -> Self {
        Self {
            form,
            phase: Phase::Idle { notice: None },
        }
    }

    /// The submit control is disabled only while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !matches!(self.phase, Phase::Submitting)
    }

    pub fn response(&self) -> Option<&PredictionResponse> {
        match &self.phase {
            Phase::Displayed(resp) => Some(resp),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.phase {
            Phase::Idle { notice } => notice.as_ref(),
            _ => None,
        }
    }

    /// Idle/Displayed -> Submitting, yielding the request to send.
    ///
    /// Returns the state unchanged if a request is already in flight, or
    /// Idle with a validation notice if the form is incomplete.
    pub fn begin_submit(self) -> Result<(Self, PredictionRequest), Self> {
        if !self.submit_enabled() {
            return Err(self);
        }

        match self.form.to_request() {
            Ok(request) => Ok((
                Self {
                    phase: Phase::Submitting,
                    ..self
                },
                request,
            )),
            Err(err) => Err(self.rejected(err)),
        }
    }

    /// Idle with a validation notice, keeping the form as entered.
    pub fn rejected(self, err: ValidationError) -> Self {
        Self {
            phase: Phase::Idle {
                notice: Some(Notice::Validation(err)),
            },
            ..self
        }
    }

    /// Submitting -> Displayed on success, Idle with a failure notice
    /// otherwise. Either way submission is enabled again.
    pub fn complete(self, result: Result<PredictionResponse, PredictError>) -> Self {
        if self.submit_enabled() {
            log::warn!("Prediction completed while no submission was in flight");
        }

        let phase = match result {
            Ok(resp) => Phase::Displayed(resp),
            Err(e) => {
                log::debug!("Prediction failed: {e}");
                Phase::Idle {
                    notice: Some(Notice::Failure),
                }
            }
        };

        Self { phase, ..self }
    }
}
