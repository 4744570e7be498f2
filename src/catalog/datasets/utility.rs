use super::record;
use crate::catalog::types::{Category, Details, FrequencyRecord};

#[allow(clippy::too_many_arguments)]
fn utility(
    id: &str,
    frequency: &str,
    name: &str,
    description: &str,
    location_name: &str,
    latitude: f64,
    longitude: f64,
    mode: &str,
    active_minutes_ago: Option<i64>,
) -> FrequencyRecord {
    FrequencyRecord {
        details: Some(Details::Broadcast {
            mode: Some(mode.to_string()),
            schedule: None,
            language: None,
        }),
        source: Some("DX Info Centre".to_string()),
        ..record(
            id,
            frequency,
            name,
            description,
            Category::Utility,
            location_name,
            latitude,
            longitude,
            active_minutes_ago,
        )
    }
}

/// HF utility and government stations.
pub fn records() -> Vec<FrequencyRecord> {
    vec![
        utility(
            "util-1",
            "4.583",
            "German Navy",
            "Naval communications, RTTY",
            "Germany",
            52.520,
            13.405,
            "RTTY",
            Some(16),
        ),
        utility(
            "util-2",
            "8.461",
            "Russian Navy",
            "Naval communications, CW",
            "Russia",
            59.934,
            30.335,
            "CW",
            Some(38),
        ),
        utility(
            "util-3",
            "5.696",
            "US Coast Guard",
            "Search and rescue working channel",
            "Atlantic",
            41.7,
            -70.3,
            "USB",
            Some(2),
        ),
        utility(
            "util-4",
            "4.625",
            "UVB-76 (The Buzzer)",
            "Continuous channel marker with occasional voice traffic",
            "Russia",
            60.311,
            30.278,
            "AM",
            Some(0),
        ),
        utility(
            "util-5",
            "10.1008",
            "DWD Meteo",
            "Deutscher Wetterdienst marine weather, RTTY",
            "Hamburg, Germany",
            53.551,
            9.994,
            "RTTY",
            Some(9),
        ),
        utility(
            "util-6",
            "8.040",
            "Northwood Fax",
            "Royal Navy weather fax transmissions",
            "Northwood, UK",
            51.626,
            -0.419,
            "FAX",
            Some(58),
        ),
        utility(
            "util-7",
            "6.739",
            "US Air Force HFGCS",
            "High Frequency Global Communications System",
            "Worldwide",
            38.0,
            -92.0,
            "USB",
            None,
        ),
        utility(
            "util-8",
            "2.182",
            "Maritime Distress HF",
            "International HF maritime distress and calling",
            "International",
            51.0,
            2.0,
            "USB",
            Some(27),
        ),
    ]
}
