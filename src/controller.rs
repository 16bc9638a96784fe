// src/controller.rs
use crate::domain::{FormField, FormInput, PredictorState, ReferenceData};
use crate::predictor::Predictor;

/// Wires the form, the prediction backend and the submission state together.
pub struct Controller {
    pub reference: ReferenceData,
    predictor: Box<dyn Predictor + Send + Sync>,
}

impl Controller {
    pub fn new(reference: ReferenceData, predictor: Box<dyn Predictor + Send + Sync>) -> Self {
        Self {
            reference,
            predictor,
        }
    }

    /// Runs one user submission to completion and returns the state to render.
    pub fn submit(&self, form: FormInput) -> PredictorState {
        let unknown = self.unknown_selections(&form);
        if !unknown.is_empty() {
            log::info!("Rejected submission with unknown options: {unknown:?}");
            let mut err = form.to_request().err().unwrap_or_default();
            err.invalid.extend(unknown);
            return PredictorState::new(form).rejected(err);
        }

        let (submitting, request) = match PredictorState::new(form).begin_submit() {
            Ok(started) => started,
            Err(rejected) => {
                if let Some(notice) = rejected.notice() {
                    log::info!("Rejected submission: {}", notice.message());
                }
                return rejected;
            }
        };

        log::info!(
            "Predicting {} sqm {} in {}, {}",
            request.area,
            request.property_type,
            request.locality,
            request.region
        );

        let result = self.predictor.predict(&request);
        submitting.complete(result)
    }

    /// Select values that are not part of the reference lists.
    fn unknown_selections(&self, form: &FormInput) -> Vec<FormField> {
        let checks = [
            (FormField::Region, &form.region, &self.reference.regions),
            (FormField::Locality, &form.locality, &self.reference.localities),
            (FormField::PropertyType, &form.property_type, &self.reference.types),
        ];

        checks
            .into_iter()
            .filter_map(|(field, value, options)| match value {
                Some(v) if !options.contains(v) => Some(field),
                _ => None,
            })
            .collect()
    }
}
