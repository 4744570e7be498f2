use chrono::{DateTime, Utc};

use super::types::{ActivityStatus, CategoryFilter, FrequencyRecord};

/// Mean Earth radius in km, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Derive the recency bucket from the last observed activity. Elapsed time is
/// whole minutes, floored; each band is inclusive at its upper bound.
pub fn activity_status(last_activity: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ActivityStatus {
    let Some(last) = last_activity else {
        return ActivityStatus::None;
    };

    let elapsed_minutes = (now - last).num_minutes();
    if elapsed_minutes <= 5 {
        ActivityStatus::Green
    } else if elapsed_minutes <= 10 {
        ActivityStatus::Yellow
    } else if elapsed_minutes <= 30 {
        ActivityStatus::Orange
    } else if elapsed_minutes <= 60 {
        ActivityStatus::Red
    } else {
        ActivityStatus::None
    }
}

/// Great-circle distance between two points, rounded to 0.1 km.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance = EARTH_RADIUS_KM * c;
    (distance * 10.0).round() / 10.0
}

/// Order-preserving category filter. `All` returns the input unchanged.
pub fn filter_by_category(
    records: Vec<FrequencyRecord>,
    filter: CategoryFilter,
) -> Vec<FrequencyRecord> {
    match filter {
        CategoryFilter::All => records,
        CategoryFilter::Only(category) => records
            .into_iter()
            .filter(|r| r.category == category)
            .collect(),
    }
}

/// Case-insensitive substring search over name, description, frequency text,
/// location name, category label and callsign. A blank term is a no-op.
pub fn filter_by_text(records: Vec<FrequencyRecord>, term: &str) -> Vec<FrequencyRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
                || r.frequency.to_lowercase().contains(&needle)
                || r.location.name.to_lowercase().contains(&needle)
                || r.category.to_string().to_lowercase().contains(&needle)
                || r.callsign()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Ascending by distance; records without a distance sort last. The sort is
/// stable, so ties keep their input order.
pub fn sort_by_distance(mut records: Vec<FrequencyRecord>) -> Vec<FrequencyRecord> {
    records.sort_by(|a, b| {
        let da = a.distance_km.unwrap_or(f64::INFINITY);
        let db = b.distance_km.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Category, Coordinates, Location};
    use chrono::Duration;

    fn record(id: &str, category: Category) -> FrequencyRecord {
        FrequencyRecord {
            id: id.to_string(),
            frequency: "145.500".to_string(),
            name: format!("Station {}", id),
            description: String::new(),
            category,
            location: Location {
                name: "Brussels".to_string(),
                coordinates: Coordinates {
                    latitude: 50.8503,
                    longitude: 4.3517,
                },
            },
            activity_status: ActivityStatus::None,
            last_activity: None,
            distance_km: None,
            source: None,
            details: None,
        }
    }

    #[test]
    fn status_is_none_without_activity() {
        let now = Utc::now();
        assert_eq!(activity_status(None, now), ActivityStatus::None);
    }

    #[test]
    fn status_bands_are_inclusive_at_upper_bounds() {
        let now = Utc::now();
        let cases = [
            (0, ActivityStatus::Green),
            (5, ActivityStatus::Green),
            (6, ActivityStatus::Yellow),
            (10, ActivityStatus::Yellow),
            (11, ActivityStatus::Orange),
            (30, ActivityStatus::Orange),
            (31, ActivityStatus::Red),
            (60, ActivityStatus::Red),
            (61, ActivityStatus::None),
        ];
        for (minutes, expected) in cases {
            let last = now - Duration::minutes(minutes);
            assert_eq!(
                activity_status(Some(last), now),
                expected,
                "elapsed {} min",
                minutes
            );
        }
    }

    #[test]
    fn distance_is_zero_for_identical_points() {
        assert_eq!(haversine_distance_km(50.85, 4.35, 50.85, 4.35), 0.0);
    }

    #[test]
    fn distance_brussels_to_airport() {
        // Brussels center to Brussels Airport, roughly 9.7 km.
        let d = haversine_distance_km(50.8503, 4.3517, 50.9013, 4.4844);
        assert!((d - 9.7).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_distance_km(50.8503, 4.3517, 52.702, -8.925);
        let ba = haversine_distance_km(52.702, -8.925, 50.8503, 4.3517);
        assert_eq!(ab, ba);
    }

    #[test]
    fn category_all_is_identity() {
        let records = vec![
            record("a", Category::Airband),
            record("b", Category::Volmet),
        ];
        let filtered = filter_by_category(records.clone(), CategoryFilter::All);
        assert_eq!(filtered, records);
    }

    #[test]
    fn category_filter_is_exact_and_order_preserving() {
        let records = vec![
            record("a", Category::Airband),
            record("b", Category::Volmet),
            record("c", Category::Airband),
        ];
        let filtered = filter_by_category(records, CategoryFilter::Only(Category::Airband));
        let ids: Vec<_> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(filtered.iter().all(|r| r.category == Category::Airband));
    }

    #[test]
    fn text_filter_blank_term_is_noop() {
        let records = vec![record("a", Category::Airband)];
        assert_eq!(filter_by_text(records.clone(), "   "), records);
        assert_eq!(filter_by_text(records.clone(), ""), records);
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        let mut target = record("a", Category::Airband);
        target.name = "Brussels Airport Tower".to_string();
        let records = vec![target, record("b", Category::Volmet)];

        let hits = filter_by_text(records, "tower");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn text_filter_matches_callsign() {
        use crate::catalog::types::Details;

        let mut aprs = record("a", Category::Aprs);
        aprs.details = Some(Details::Aprs {
            callsign: "ON4ABC-9".to_string(),
            symbol: None,
            course: None,
            speed: None,
            altitude: None,
            path: None,
            comment: None,
        });
        let hits = filter_by_text(vec![aprs, record("b", Category::Airband)], "on4abc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn text_filter_matches_category_label() {
        let records = vec![
            record("a", Category::Volmet),
            record("b", Category::Airband),
        ];
        let hits = filter_by_text(records, "volmet");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn distance_sort_is_stable_and_missing_sorts_last() {
        let mut a = record("a", Category::Airband);
        a.distance_km = Some(5.0);
        let mut b = record("b", Category::Airband);
        b.distance_km = Some(5.0);
        let c = record("c", Category::Airband);
        let mut d = record("d", Category::Airband);
        d.distance_km = Some(1.2);

        let sorted = sort_by_distance(vec![a, b, c, d]);
        let ids: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["d", "a", "b", "c"]);
    }
}
