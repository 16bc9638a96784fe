// src/domain/reference.rs
use crate::errors::ServerError;
use std::fs;
use std::path::Path;

const REGIONS_JSON: &str = include_str!("../../data/regions.json");
const LOCALITIES_JSON: &str = include_str!("../../data/localities.json");
const TYPES_JSON: &str = include_str!("../../data/types.json");

/// Option lists for the select controls. Loaded once at startup and
/// shared read-only by every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub regions: Vec<String>,
    pub localities: Vec<String>,
    pub types: Vec<String>,
}

impl ReferenceData {
    /// The lists compiled into the binary.
    pub fn bundled() -> Result<Self, ServerError> {
        Ok(Self {
            regions: parse_list("regions.json", REGIONS_JSON)?,
            localities: parse_list("localities.json", LOCALITIES_JSON)?,
            types: parse_list("types.json", TYPES_JSON)?,
        })
    }

    /// Reads `regions.json`, `localities.json` and `types.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ServerError> {
        let read = |name: &str| -> Result<Vec<String>, ServerError> {
            let path = dir.join(name);
            let raw = fs::read_to_string(&path).map_err(|e| {
                ServerError::Config(format!("Failed to read {}: {e}", path.display()))
            })?;
            parse_list(name, &raw)
        };

        Ok(Self {
            regions: read("regions.json")?,
            localities: read("localities.json")?,
            types: read("types.json")?,
        })
    }

    pub fn load(dir: Option<&Path>) -> Result<Self, ServerError> {
        let data = match dir {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::bundled()?,
        };

        log::info!(
            "Reference data loaded: {} regions, {} localities, {} types",
            data.regions.len(),
            data.localities.len(),
            data.types.len()
        );

        Ok(data)
    }
}

fn parse_list(name: &str, raw: &str) -> Result<Vec<String>, ServerError> {
    let list: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| ServerError::Config(format!("{name} is not a list of strings: {e}")))?;

    if list.is_empty() {
        return Err(ServerError::Config(format!("{name} is empty")));
    }

    Ok(list)
}

/// Whether the property is new construction. Sent to the backend as 1 / 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsNew {
    Yes,
    No,
}

impl IsNew {
    pub const ALL: [IsNew; 2] = [IsNew::Yes, IsNew::No];

    pub fn as_flag(self) -> u8 {
        match self {
            IsNew::Yes => 1,
            IsNew::No => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IsNew::Yes => "Yes 🆕",
            IsNew::No => "No 🧱",
        }
    }

    /// Parses the `<option value>` posted by the form.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(IsNew::Yes),
            "0" => Some(IsNew::No),
            _ => None,
        }
    }
}
