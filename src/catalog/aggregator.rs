use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::datasets;
use super::derive::{activity_status, haversine_distance_km, sort_by_distance};
use super::store::{StorageError, Store};
use super::types::{ActivityStatus, FrequencyRecord, NewFrequencyInput};

/// Every static dataset in its fixed order, followed by the persisted
/// user-added records.
pub fn all_frequencies(store: &dyn Store) -> Vec<FrequencyRecord> {
    let mut records = datasets::all();
    records.extend(store.custom_records());
    records
}

/// Re-derive the activity status of every record for the given instant.
/// Copy-on-write: the input collection stays valid for any holder.
pub fn update_activity_status(
    records: &[FrequencyRecord],
    now: DateTime<Utc>,
) -> Vec<FrequencyRecord> {
    records
        .iter()
        .map(|r| FrequencyRecord {
            activity_status: activity_status(r.last_activity, now),
            ..r.clone()
        })
        .collect()
}

/// Attach the distance from the given origin to every record and sort
/// ascending. Recomputes for the whole collection on every call, so no record
/// ever carries a distance from a previous origin.
pub fn frequencies_by_location(
    records: &[FrequencyRecord],
    latitude: f64,
    longitude: f64,
) -> Vec<FrequencyRecord> {
    let with_distance = records
        .iter()
        .map(|r| FrequencyRecord {
            distance_km: Some(haversine_distance_km(
                latitude,
                longitude,
                r.location.coordinates.latitude,
                r.location.coordinates.longitude,
            )),
            ..r.clone()
        })
        .collect();
    sort_by_distance(with_distance)
}

/// The favorited subset, in `records` order. Ids that resolve to no record
/// are inert.
pub fn favorite_frequencies(
    records: &[FrequencyRecord],
    favorite_ids: &[String],
) -> Vec<FrequencyRecord> {
    records
        .iter()
        .filter(|r| favorite_ids.iter().any(|id| *id == r.id))
        .cloned()
        .collect()
}

/// Construct a record from form input, persist it, and return it for the
/// caller to merge into in-memory state. New records always start with no
/// observed activity.
pub fn add_frequency(
    store: &dyn Store,
    input: &NewFrequencyInput,
) -> Result<FrequencyRecord, StorageError> {
    let record = FrequencyRecord {
        id: Uuid::new_v4().to_string(),
        frequency: input.frequency.clone(),
        name: input.name.clone(),
        description: input.description.clone(),
        category: input.category,
        location: input.location.clone(),
        activity_status: ActivityStatus::None,
        last_activity: None,
        distance_km: None,
        source: input.source.clone(),
        details: input.details(),
    };

    store.append_custom(&record)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::MemoryStore;
    use crate::catalog::types::{Category, Coordinates, Location};
    use chrono::Duration;
    use std::collections::HashSet;

    fn record_at(id: &str, latitude: f64, longitude: f64) -> FrequencyRecord {
        FrequencyRecord {
            id: id.to_string(),
            frequency: "145.500".to_string(),
            name: format!("Station {}", id),
            description: String::new(),
            category: Category::Vhf,
            location: Location {
                name: "Somewhere".to_string(),
                coordinates: Coordinates {
                    latitude,
                    longitude,
                },
            },
            activity_status: ActivityStatus::None,
            last_activity: None,
            distance_km: None,
            source: None,
            details: None,
        }
    }

    fn new_input(name: &str) -> NewFrequencyInput {
        serde_json::from_str(&format!(
            r#"{{
                "frequency": "430.200",
                "name": "{}",
                "description": "added by hand",
                "category": "UHF",
                "location": {{"name": "Ghent", "coordinates": {{"latitude": 51.05, "longitude": 3.72}}}}
            }}"#,
            name
        ))
        .unwrap()
    }

    #[test]
    fn static_datasets_have_globally_unique_ids() {
        let store = MemoryStore::new();
        let records = all_frequencies(&store);
        let ids: HashSet<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn user_records_aggregate_after_static_datasets() {
        let store = MemoryStore::new();
        let added = add_frequency(&store, &new_input("Ghent Digi")).unwrap();

        let records = all_frequencies(&store);
        assert_eq!(records.last().unwrap().id, added.id);
        assert_eq!(
            records.iter().filter(|r| r.id == added.id).count(),
            1,
            "added record appears exactly once"
        );
    }

    #[test]
    fn added_record_starts_without_activity() {
        let store = MemoryStore::new();

        // Activity-like fields in the input payload are ignored outright.
        let input: NewFrequencyInput = serde_json::from_str(
            r#"{
                "frequency": "430.200",
                "name": "Ghent Digi",
                "category": "UHF",
                "location": {"name": "Ghent", "coordinates": {"latitude": 51.05, "longitude": 3.72}},
                "last_activity": "2026-01-01T00:00:00Z",
                "activity_status": "green"
            }"#,
        )
        .unwrap();

        let record = add_frequency(&store, &input).unwrap();
        assert_eq!(record.activity_status, ActivityStatus::None);
        assert_eq!(record.last_activity, None);

        // Simulated reload: the persisted copy matches.
        let reloaded = all_frequencies(&store);
        let persisted = reloaded.iter().find(|r| r.id == record.id).unwrap();
        assert_eq!(persisted.activity_status, ActivityStatus::None);
        assert_eq!(persisted.last_activity, None);
    }

    #[test]
    fn update_activity_status_is_idempotent_and_non_mutating() {
        let now = Utc::now();
        let mut record = record_at("a", 50.85, 4.35);
        record.last_activity = Some(now - Duration::minutes(8));
        let original = vec![record];

        let once = update_activity_status(&original, now);
        let twice = update_activity_status(&once, now);
        assert_eq!(once, twice);
        assert_eq!(once[0].activity_status, ActivityStatus::Yellow);

        // The input snapshot was not touched.
        assert_eq!(original[0].activity_status, ActivityStatus::None);
    }

    #[test]
    fn location_sort_ranks_ties_before_farther_records() {
        // Two records at the origin, one roughly 100 km away.
        let records = vec![
            record_at("near-1", 50.85, 4.35),
            record_at("near-2", 50.85, 4.35),
            record_at("far", 51.75, 4.35),
        ];

        let sorted = frequencies_by_location(&records, 50.85, 4.35);
        let ids: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["near-1", "near-2", "far"]);
        assert_eq!(sorted[0].distance_km, Some(0.0));
        assert!(sorted[2].distance_km.unwrap() > 90.0);
    }

    #[test]
    fn location_sort_is_idempotent_in_field_population() {
        let records = vec![record_at("a", 50.9, 4.48), record_at("b", 51.2, 2.92)];
        let once = frequencies_by_location(&records, 50.85, 4.35);
        let twice = frequencies_by_location(&once, 50.85, 4.35);
        assert_eq!(once, twice);
    }

    #[test]
    fn favorites_follow_record_order_and_ignore_unknown_ids() {
        let records = vec![
            record_at("a", 50.85, 4.35),
            record_at("b", 50.85, 4.35),
            record_at("c", 50.85, 4.35),
        ];
        let favorite_ids = vec![
            "c".to_string(),
            "ghost".to_string(),
            "a".to_string(),
        ];

        let favorites = favorite_frequencies(&records, &favorite_ids);
        let ids: Vec<_> = favorites.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
