// src/domain/form.rs
use crate::domain::reference::IsNew;
use crate::predictor::PredictionRequest;
use std::fmt;
use thiserror::Error;

/// Inputs on the predictor form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Area,
    Rooms,
    Baths,
    Region,
    Locality,
    PropertyType,
    IsNew,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Area,
        FormField::Rooms,
        FormField::Baths,
        FormField::Region,
        FormField::Locality,
        FormField::PropertyType,
        FormField::IsNew,
    ];

    /// The `name` attribute used by the HTML form.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Area => "area",
            FormField::Rooms => "rooms",
            FormField::Baths => "baths",
            FormField::Region => "region",
            FormField::Locality => "locality",
            FormField::PropertyType => "type",
            FormField::IsNew => "is_new",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Area => "Area",
            FormField::Rooms => "Rooms",
            FormField::Baths => "Baths",
            FormField::Region => "Region",
            FormField::Locality => "Locality",
            FormField::PropertyType => "Property type",
            FormField::IsNew => "Is it new?",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised before a request is built when required fields are empty
/// or do not parse.
#[derive(Debug, Clone, PartialEq, Default, Error)]
#[error("{}", describe(.missing, .invalid))]
pub struct ValidationError {
    pub missing: Vec<FormField>,
    pub invalid: Vec<FormField>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }
}

fn join(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(missing: &[FormField], invalid: &[FormField]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("Please fill in: {}.", join(missing)));
    }
    if !invalid.is_empty() {
        parts.push(format!("Please correct: {}.", join(invalid)));
    }
    parts.join(" ")
}

/// Current values of the predictor form.
///
/// Numeric inputs keep the raw text so the form can be re-rendered as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormInput {
    pub area: String,
    pub rooms: String,
    pub baths: String,
    pub region: Option<String>,
    pub locality: Option<String>,
    pub property_type: Option<String>,
    pub is_new: Option<IsNew>,
}

impl FormInput {
    /// Returns a copy with only `name` replaced. Unknown names are ignored.
    pub fn with_field(self, name: &str, value: &str) -> Self {
        let Some(field) = FormField::from_name(name) else {
            log::debug!("Ignoring unknown form field {name:?}");
            return self;
        };

        match field {
            FormField::Area => Self {
                area: value.to_string(),
                ..self
            },
            FormField::Rooms => Self {
                rooms: value.to_string(),
                ..self
            },
            FormField::Baths => Self {
                baths: value.to_string(),
                ..self
            },
            FormField::Region => Self {
                region: selection(value),
                ..self
            },
            FormField::Locality => Self {
                locality: selection(value),
                ..self
            },
            FormField::PropertyType => Self {
                property_type: selection(value),
                ..self
            },
            FormField::IsNew => Self {
                is_new: IsNew::from_form_value(value),
                ..self
            },
        }
    }

    /// Folds decoded `name=value` pairs into a fresh form.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |form, (k, v)| form.with_field(k.as_ref(), v.as_ref()))
    }

    /// Coerces the form into an outbound request, or lists every field
    /// that stops it from being one.
    pub fn to_request(&self) -> Result<PredictionRequest, ValidationError> {
        let mut err = ValidationError::default();

        let area = number(&self.area, FormField::Area, &mut err);
        let rooms = number(&self.rooms, FormField::Rooms, &mut err);
        let baths = number(&self.baths, FormField::Baths, &mut err);
        let region = required(&self.region, FormField::Region, &mut err);
        let locality = required(&self.locality, FormField::Locality, &mut err);
        let property_type = required(&self.property_type, FormField::PropertyType, &mut err);
        if self.is_new.is_none() {
            err.missing.push(FormField::IsNew);
        }

        match (area, rooms, baths, region, locality, property_type, self.is_new) {
            (
                Some(area),
                Some(rooms),
                Some(baths),
                Some(region),
                Some(locality),
                Some(property_type),
                Some(is_new),
            ) if err.is_empty() => Ok(PredictionRequest {
                area,
                rooms,
                baths,
                region,
                locality,
                property_type,
                is_new: is_new.as_flag(),
            }),
            _ => Err(err),
        }
    }
}

fn selection(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn number(raw: &str, field: FormField, err: &mut ValidationError) -> Option<i64> {
    if raw.trim().is_empty() {
        err.missing.push(field);
        return None;
    }
    let parsed = parse_int(raw);
    if parsed.is_none() {
        err.invalid.push(field);
    }
    parsed
}

fn required(value: &Option<String>, field: FormField, err: &mut ValidationError) -> Option<String> {
    if value.is_none() {
        err.missing.push(field);
    }
    value.clone()
}

/// Integer parsing with browser `parseInt` semantics: surrounding whitespace
/// is skipped, an optional sign is accepted, and the leading run of decimal
/// digits is used (`"12.7"` is 12, `"120sqm"` is 120).
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
