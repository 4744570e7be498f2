use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// Closed, append-only category set. New values may be appended but existing
/// ones never change meaning, since persisted records reference them by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema,
)]
pub enum Category {
    Airband,
    #[serde(rename = "VHF")]
    #[strum(serialize = "VHF")]
    Vhf,
    #[serde(rename = "UHF")]
    #[strum(serialize = "UHF")]
    Uhf,
    Repeaters,
    #[serde(rename = "CW")]
    #[strum(serialize = "CW")]
    Cw,
    #[serde(rename = "HF")]
    #[strum(serialize = "HF")]
    Hf,
    Satellite,
    Space,
    Military,
    Weather,
    Maritime,
    Digital,
    Amateur,
    #[serde(rename = "VOLMET")]
    #[strum(serialize = "VOLMET")]
    Volmet,
    Utility,
    Airport,
    #[serde(rename = "APRS")]
    #[strum(serialize = "APRS")]
    Aprs,
    LoRa,
    Meshtastic,
    ModeS,
}

pub const ALL_CATEGORIES: [Category; 20] = [
    Category::Airband,
    Category::Vhf,
    Category::Uhf,
    Category::Repeaters,
    Category::Cw,
    Category::Hf,
    Category::Satellite,
    Category::Space,
    Category::Military,
    Category::Weather,
    Category::Maritime,
    Category::Digital,
    Category::Amateur,
    Category::Volmet,
    Category::Utility,
    Category::Airport,
    Category::Aprs,
    Category::LoRa,
    Category::Meshtastic,
    Category::ModeS,
];

impl Category {
    pub fn from_label(label: &str) -> Option<Self> {
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.to_string() == label)
    }
}

/// A category filter as supplied by the UI. `All` is a filter value only and
/// never a record category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(label: &str) -> Option<Self> {
        if label == "All" {
            return Some(CategoryFilter::All);
        }
        Category::from_label(label).map(CategoryFilter::Only)
    }
}

/// Coarse recency bucket derived from the time since last observed activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Green,
    Yellow,
    Orange,
    Red,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub name: String,
    pub coordinates: Coordinates,
}

/// Category-specific attributes. Only meaningful when the record's category
/// matches the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Details {
    Repeater {
        offset: Option<String>,
        tone: Option<String>,
        mode: Option<String>,
    },
    /// Scheduled voice or data transmissions (VOLMET, utility stations).
    Broadcast {
        mode: Option<String>,
        schedule: Option<String>,
        language: Option<String>,
    },
    Airport {
        icao_code: Option<String>,
        iata_code: Option<String>,
        elevation_ft: Option<i32>,
        runways: Vec<String>,
        operation_hours: Option<String>,
    },
    Aprs {
        callsign: String,
        symbol: Option<String>,
        course: Option<f64>,
        speed: Option<f64>,
        altitude: Option<f64>,
        path: Option<String>,
        comment: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FrequencyRecord {
    pub id: String,
    /// Decimal display text, MHz unless the text itself says otherwise.
    pub frequency: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub location: Location,
    #[serde(default)]
    pub activity_status: ActivityStatus,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
    /// Populated only by a location-based sort; km from the query origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl FrequencyRecord {
    pub fn callsign(&self) -> Option<&str> {
        match &self.details {
            Some(Details::Aprs { callsign, .. }) => Some(callsign),
            _ => None,
        }
    }
}

/// Input from the add-frequency form. Detail fields are flat free text, the
/// way the form submits them, and are folded into `Details` by category.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewFrequencyInput {
    pub frequency: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub location: Location,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub callsign: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub course: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl NewFrequencyInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.frequency.trim().is_empty() {
            return Err("frequency must not be empty".to_string());
        }
        if self.name.trim().len() < 2 {
            return Err("name must be at least 2 characters".to_string());
        }
        if self.location.name.trim().len() < 2 {
            return Err("location name must be at least 2 characters".to_string());
        }
        Ok(())
    }

    pub fn details(&self) -> Option<Details> {
        match self.category {
            Category::Repeaters => {
                if self.offset.is_none() && self.tone.is_none() && self.mode.is_none() {
                    return None;
                }
                Some(Details::Repeater {
                    offset: self.offset.clone(),
                    tone: self.tone.clone(),
                    mode: self.mode.clone(),
                })
            }
            Category::Aprs => self.callsign.as_ref().map(|callsign| Details::Aprs {
                callsign: callsign.clone(),
                symbol: self.symbol.clone(),
                course: self.course,
                speed: self.speed,
                altitude: self.altitude,
                path: self.path.clone(),
                comment: self.comment.clone(),
            }),
            _ => self.mode.as_ref().map(|mode| Details::Broadcast {
                mode: Some(mode.clone()),
                schedule: None,
                language: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for category in ALL_CATEGORIES {
            let label = category.to_string();
            assert_eq!(Category::from_label(&label), Some(category));
        }
    }

    #[test]
    fn category_filter_parses_all_and_labels() {
        assert_eq!(CategoryFilter::parse("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("VOLMET"),
            Some(CategoryFilter::Only(Category::Volmet))
        );
        assert_eq!(CategoryFilter::parse("Shortwave"), None);
    }

    #[test]
    fn aprs_input_folds_into_details() {
        let input: NewFrequencyInput = serde_json::from_str(
            r#"{
                "frequency": "144.800",
                "name": "Mobile station",
                "category": "APRS",
                "location": {"name": "Ghent", "coordinates": {"latitude": 51.05, "longitude": 3.72}},
                "callsign": "ON4ABC-9",
                "speed": 45.0
            }"#,
        )
        .unwrap();

        match input.details() {
            Some(Details::Aprs {
                callsign, speed, ..
            }) => {
                assert_eq!(callsign, "ON4ABC-9");
                assert_eq!(speed, Some(45.0));
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn validation_rejects_blank_fields() {
        let input: NewFrequencyInput = serde_json::from_str(
            r#"{
                "frequency": "  ",
                "name": "OK",
                "category": "Airband",
                "location": {"name": "Brussels", "coordinates": {"latitude": 50.85, "longitude": 4.35}}
            }"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }
}
