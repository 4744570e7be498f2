pub mod amateur;
pub mod general;
pub mod repeaters;
pub mod utility;
pub mod volmet;

use chrono::{Duration, Utc};

use super::types::{ActivityStatus, Category, Coordinates, FrequencyRecord, Location};

/// The static catalogs in their fixed aggregation order. Each dataset owns a
/// distinct id prefix (gen-, rb-, volmet-, util-, ham-) so the union stays
/// globally duplicate-free even though the datasets are authored separately.
pub fn all() -> Vec<FrequencyRecord> {
    let mut records = general::records();
    records.extend(repeaters::records());
    records.extend(volmet::records());
    records.extend(utility::records());
    records.extend(amateur::records());
    records
}

/// Dataset names paired with their record counts, in aggregation order.
pub fn dataset_counts() -> Vec<(&'static str, usize)> {
    vec![
        ("general", general::records().len()),
        ("repeaters", repeaters::records().len()),
        ("volmet", volmet::records().len()),
        ("utility", utility::records().len()),
        ("amateur", amateur::records().len()),
    ]
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    frequency: &str,
    name: &str,
    description: &str,
    category: Category,
    location_name: &str,
    latitude: f64,
    longitude: f64,
    active_minutes_ago: Option<i64>,
) -> FrequencyRecord {
    FrequencyRecord {
        id: id.to_string(),
        frequency: frequency.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        location: Location {
            name: location_name.to_string(),
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        },
        activity_status: ActivityStatus::None,
        last_activity: active_minutes_ago.map(|m| Utc::now() - Duration::minutes(m)),
        distance_km: None,
        source: None,
        details: None,
    }
}
