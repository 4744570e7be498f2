use super::record;
use crate::catalog::types::{Category, FrequencyRecord};

/// Amateur radio digital-mode and calling frequencies.
pub fn records() -> Vec<FrequencyRecord> {
    vec![
        record(
            "ham-1",
            "14.074",
            "FT8 International",
            "FT8 digital mode on the 20m band",
            Category::Amateur,
            "International",
            50.85,
            4.35,
            Some(0),
        ),
        record(
            "ham-2",
            "3.573",
            "FT8 80m",
            "FT8 digital mode on the 80m band",
            Category::Amateur,
            "Europe",
            50.85,
            4.35,
            Some(1),
        ),
        record(
            "ham-3",
            "7.074",
            "FT8 40m",
            "FT8 digital mode on the 40m band",
            Category::Amateur,
            "Europe",
            50.85,
            4.35,
            Some(2),
        ),
        record(
            "ham-4",
            "144.300",
            "SSB Calling",
            "2m single sideband calling frequency",
            Category::Amateur,
            "Europe",
            50.85,
            4.35,
            Some(47),
        ),
        record(
            "ham-5",
            "14.285",
            "SSB International",
            "20m voice calling region",
            Category::Amateur,
            "International",
            50.85,
            4.35,
            Some(18),
        ),
        record(
            "ham-6",
            "7.150",
            "40m Voice",
            "Evening voice traffic on the 40m band",
            Category::Amateur,
            "International",
            50.85,
            4.35,
            None,
        ),
    ]
}
