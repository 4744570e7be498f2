use super::record;
use crate::catalog::types::{Category, Details, FrequencyRecord};

#[allow(clippy::too_many_arguments)]
fn repeater(
    id: &str,
    frequency: &str,
    callsign: &str,
    description: &str,
    location_name: &str,
    latitude: f64,
    longitude: f64,
    offset: &str,
    tone: Option<&str>,
    active_minutes_ago: Option<i64>,
) -> FrequencyRecord {
    FrequencyRecord {
        details: Some(Details::Repeater {
            offset: Some(offset.to_string()),
            tone: tone.map(str::to_string),
            mode: Some("FM".to_string()),
        }),
        source: Some("RepeaterBook".to_string()),
        ..record(
            id,
            frequency,
            callsign,
            description,
            Category::Repeaters,
            location_name,
            latitude,
            longitude,
            active_minutes_ago,
        )
    }
}

/// Belgian voice repeaters.
pub fn records() -> Vec<FrequencyRecord> {
    vec![
        repeater(
            "rb-1",
            "145.600",
            "ON0LG",
            "Leuven - 430.125 to 439.9875 MHz, SSTV, RTTY, FAX",
            "Leuven",
            50.878,
            4.700,
            "-0.600",
            Some("103.5 Hz"),
            Some(12),
        ),
        repeater(
            "rb-2",
            "145.625",
            "ON0UR",
            "Uccle - Brussels, BXL Uccle, Open 24/7",
            "Brussels",
            50.800,
            4.350,
            "-0.600",
            Some("79.7 Hz"),
            Some(3),
        ),
        repeater(
            "rb-3",
            "145.650",
            "ON0DK",
            "Sint-Truiden - Linked to ON0DST",
            "Sint-Truiden",
            50.817,
            5.183,
            "-0.600",
            Some("71.9 Hz"),
            Some(8),
        ),
        repeater(
            "rb-4",
            "145.675",
            "ON0NA",
            "Namur - Mont de la Radio",
            "Namur",
            50.467,
            4.867,
            "-0.600",
            Some("118.8 Hz"),
            Some(25),
        ),
        repeater(
            "rb-5",
            "145.750",
            "ON0TN",
            "Tournai - CTCSS required for TX & RX",
            "Tournai",
            50.606,
            3.388,
            "-0.600",
            Some("131.8 Hz"),
            Some(50),
        ),
        repeater(
            "rb-6",
            "145.425",
            "ON0DST",
            "Diest - Linked repeater network",
            "Diest",
            50.983,
            5.050,
            "-0.600",
            None,
            Some(35),
        ),
        repeater(
            "rb-7",
            "438.825",
            "ON0ANT",
            "Antwerp - 70cm coverage for the port area",
            "Antwerp",
            51.219,
            4.402,
            "-7.600",
            Some("131.8 Hz"),
            Some(6),
        ),
        repeater(
            "rb-8",
            "439.100",
            "ON0OST",
            "Ostend - Coastal 70cm repeater",
            "Ostend",
            51.209,
            2.919,
            "-7.600",
            Some("94.8 Hz"),
            None,
        ),
    ]
}
