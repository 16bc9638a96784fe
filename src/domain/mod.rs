pub mod form;
pub mod format;
pub mod reference;
pub mod state;

pub use form::{FormField, FormInput, ValidationError};
pub use reference::{IsNew, ReferenceData};
pub use state::{Notice, Phase, PredictorState};
