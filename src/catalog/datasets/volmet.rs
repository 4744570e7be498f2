use super::record;
use crate::catalog::types::{Category, Details, FrequencyRecord};

#[allow(clippy::too_many_arguments)]
fn volmet(
    id: &str,
    frequency: &str,
    name: &str,
    description: &str,
    location_name: &str,
    latitude: f64,
    longitude: f64,
    schedule: &str,
    active_minutes_ago: Option<i64>,
) -> FrequencyRecord {
    FrequencyRecord {
        details: Some(Details::Broadcast {
            mode: Some("USB".to_string()),
            schedule: Some(schedule.to_string()),
            language: Some("English".to_string()),
        }),
        source: Some("DX Info Centre".to_string()),
        ..record(
            id,
            frequency,
            name,
            description,
            Category::Volmet,
            location_name,
            latitude,
            longitude,
            active_minutes_ago,
        )
    }
}

/// HF VOLMET aviation weather broadcasts.
pub fn records() -> Vec<FrequencyRecord> {
    vec![
        volmet(
            "volmet-1",
            "3.413",
            "Shannon VOLMET",
            "Aviation weather for North Atlantic, UK, and Ireland",
            "Shannon, Ireland",
            52.702,
            -8.925,
            "H+00, H+30",
            Some(4),
        ),
        volmet(
            "volmet-2",
            "5.505",
            "Shannon VOLMET",
            "Aviation weather for North Atlantic, UK, and Ireland (Alt)",
            "Shannon, Ireland",
            52.702,
            -8.925,
            "H+00, H+30",
            Some(19),
        ),
        volmet(
            "volmet-3",
            "8.957",
            "New York VOLMET",
            "Aviation weather for North America and Atlantic",
            "New York, USA",
            40.713,
            -74.006,
            "H+00, H+20, H+40",
            Some(7),
        ),
        volmet(
            "volmet-4",
            "13.270",
            "New York VOLMET",
            "Aviation weather for North America and Atlantic (day)",
            "New York, USA",
            40.713,
            -74.006,
            "H+00, H+20, H+40",
            Some(42),
        ),
        volmet(
            "volmet-5",
            "5.450",
            "RAF VOLMET",
            "Military aviation weather for UK and Europe",
            "United Kingdom",
            52.3,
            -0.5,
            "Continuous",
            Some(1),
        ),
        volmet(
            "volmet-6",
            "11.253",
            "RAF VOLMET",
            "Military aviation weather for UK and Europe (day)",
            "United Kingdom",
            52.3,
            -0.5,
            "Continuous",
            Some(29),
        ),
        volmet(
            "volmet-7",
            "6.617",
            "Rostov VOLMET",
            "Aviation weather for Eastern Europe",
            "Rostov, Russia",
            47.235,
            39.701,
            "H+05, H+35",
            None,
        ),
        volmet(
            "volmet-8",
            "127.600",
            "Brussels VOLMET",
            "VHF aviation weather for Belgian airports",
            "Brussels",
            50.9013,
            4.4844,
            "Continuous",
            Some(10),
        ),
    ]
}
