use serde::{Deserialize, Deserializer, Serialize};

// POST /predict
//  request
//  ├── area, rooms, baths      (int)
//  ├── region, locality, type  (string)
//  └── is_new                  (0 | 1)
//  response
//  ├── predicted_price
//  └── similar_listings?       (may be absent or null)
//       ├── type, region, locality
//       ├── area, rooms, baths, price
//       ├── cover_image?
//       └── latitude?, longitude?

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub area: i64,
    pub rooms: i64,
    pub baths: i64,
    pub region: String,
    pub locality: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub is_new: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub similar_listings: Vec<Listing>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    #[serde(rename = "type")]
    pub property_type: String,
    pub region: String,
    pub locality: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub area: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub rooms: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub baths: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Listing {
    /// Cover image URL, treating an empty string as absent.
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Both coordinates, or nothing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

// Accepts `3`, `3.0` or `"3"`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {s:?}"))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Listing>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Listing>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
