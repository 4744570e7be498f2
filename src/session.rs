use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::catalog::aggregator;
use crate::catalog::derive::{filter_by_category, filter_by_text};
use crate::catalog::{
    CategoryFilter, Coordinates, FrequencyRecord, NewFrequencyInput, StorageError, Store,
};
use crate::location::{GeolocationError, LocationProvider, UserLocation};

pub struct ListFilter {
    pub category: CategoryFilter,
    pub search: Option<String>,
    pub origin: Option<Coordinates>,
}

impl Default for ListFilter {
    fn default() -> Self {
        ListFilter {
            category: CategoryFilter::All,
            search: None,
            origin: None,
        }
    }
}

/// Owns the aggregated snapshot, the favorite ids and the user location.
/// All reads hand out copies; mutations replace whole collections, so the
/// periodic refresh can never clobber a user edit.
pub struct Session {
    store: Arc<dyn Store>,
    provider: Arc<dyn LocationProvider>,
    geolocation_timeout: Duration,
    records: RwLock<Vec<FrequencyRecord>>,
    favorite_ids: RwLock<Vec<String>>,
    location: RwLock<UserLocation>,
}

impl Session {
    pub fn new(
        store: Arc<dyn Store>,
        provider: Arc<dyn LocationProvider>,
        geolocation_timeout: Duration,
    ) -> Self {
        let records = aggregator::update_activity_status(
            &aggregator::all_frequencies(store.as_ref()),
            Utc::now(),
        );
        let favorite_ids = store.favorites();
        Session {
            store,
            provider,
            geolocation_timeout,
            records: RwLock::new(records),
            favorite_ids: RwLock::new(favorite_ids),
            location: RwLock::new(UserLocation::default()),
        }
    }

    /// Current snapshot through the category/search filters. When an origin
    /// is known (query parameters first, resolved user location otherwise)
    /// the result carries distances and is sorted by proximity.
    pub async fn frequencies(&self, filter: &ListFilter) -> Vec<FrequencyRecord> {
        let snapshot = self.records.read().await.clone();
        let mut records = filter_by_category(snapshot, filter.category);
        if let Some(term) = &filter.search {
            records = filter_by_text(records, term);
        }

        let origin = match filter.origin {
            Some(origin) => Some(origin),
            None => self.location.read().await.coordinates,
        };
        match origin {
            Some(origin) => {
                aggregator::frequencies_by_location(&records, origin.latitude, origin.longitude)
            }
            None => records,
        }
    }

    pub async fn find(&self, id: &str) -> Option<FrequencyRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Periodic re-derivation; touches nothing but `activity_status`.
    pub async fn refresh_activity(&self) {
        let now = Utc::now();
        let mut records = self.records.write().await;
        let updated = aggregator::update_activity_status(&records, now);
        *records = updated;
    }

    pub async fn toggle_favorite(&self, id: &str) -> Result<Vec<String>, StorageError> {
        let updated = self.store.toggle_favorite(id)?;
        *self.favorite_ids.write().await = updated.clone();
        Ok(updated)
    }

    pub async fn favorite_ids(&self) -> Vec<String> {
        self.favorite_ids.read().await.clone()
    }

    pub async fn favorites(&self) -> Vec<FrequencyRecord> {
        let records = self.records.read().await;
        let ids = self.favorite_ids.read().await;
        aggregator::favorite_frequencies(&records, &ids)
    }

    pub async fn add(&self, input: &NewFrequencyInput) -> Result<FrequencyRecord, StorageError> {
        let record = aggregator::add_frequency(self.store.as_ref(), input)?;
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    pub async fn location(&self) -> UserLocation {
        self.location.read().await.clone()
    }

    pub async fn set_location(&self, coordinates: Coordinates) -> UserLocation {
        let mut location = self.location.write().await;
        location.set_manual(coordinates);
        location.clone()
    }

    /// Single-shot acquisition from the provider, bounded by the configured
    /// timeout. Whatever resolves last (including a manual override racing
    /// this call) wins.
    pub async fn request_location(&self) -> UserLocation {
        self.location.write().await.begin();

        let outcome = tokio::time::timeout(self.geolocation_timeout, self.provider.locate()).await;

        let mut location = self.location.write().await;
        match outcome {
            Ok(Ok(coordinates)) => location.resolve(coordinates),
            Ok(Err(error)) => location.fail(error),
            Err(_) => location.fail(GeolocationError::Timeout),
        }
        location.clone()
    }
}

pub struct RefreshHandle {
    handle: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Activity-status refresh on a fixed cadence. The returned handle belongs
/// to the caller; dropping or cancelling it stops the task.
pub fn spawn_refresh(session: Arc<Session>, every: Duration) -> RefreshHandle {
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            session.refresh_activity().await;
        }
    });
    RefreshHandle { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::MemoryStore;
    use crate::catalog::{ActivityStatus, Category};
    use crate::location::{FixedStationProvider, LocateFuture};

    struct PendingProvider;

    impl LocationProvider for PendingProvider {
        fn locate(&self) -> LocateFuture<'_> {
            Box::pin(std::future::pending())
        }
    }

    struct DeniedProvider;

    impl LocationProvider for DeniedProvider {
        fn locate(&self) -> LocateFuture<'_> {
            Box::pin(async { Err(GeolocationError::PermissionDenied) })
        }
    }

    fn brussels() -> Coordinates {
        Coordinates {
            latitude: 50.85,
            longitude: 4.35,
        }
    }

    fn session_with(provider: Arc<dyn LocationProvider>) -> Session {
        Session::new(
            Arc::new(MemoryStore::new()),
            provider,
            Duration::from_millis(20),
        )
    }

    fn new_input() -> NewFrequencyInput {
        serde_json::from_str(
            r#"{
                "frequency": "430.200",
                "name": "Ghent Digi",
                "category": "UHF",
                "location": {"name": "Ghent", "coordinates": {"latitude": 51.05, "longitude": 3.72}}
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn category_and_search_filters_compose() {
        let session = session_with(Arc::new(FixedStationProvider::new(None)));

        let filter = ListFilter {
            category: CategoryFilter::Only(Category::Volmet),
            search: Some("shannon".to_string()),
            origin: None,
        };
        let records = session.frequencies(&filter).await;
        assert!(!records.is_empty());
        assert!(records
            .iter()
            .all(|r| r.category == Category::Volmet && r.name.to_lowercase().contains("shannon")));
    }

    #[tokio::test]
    async fn query_origin_attaches_distances() {
        let session = session_with(Arc::new(FixedStationProvider::new(None)));

        let filter = ListFilter {
            origin: Some(brussels()),
            ..ListFilter::default()
        };
        let records = session.frequencies(&filter).await;
        assert!(records.iter().all(|r| r.distance_km.is_some()));
        let distances: Vec<f64> = records.iter().map(|r| r.distance_km.unwrap()).collect();
        let mut sorted = distances.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(distances, sorted);
    }

    #[tokio::test]
    async fn refresh_preserves_user_added_records() {
        let session = session_with(Arc::new(FixedStationProvider::new(None)));

        let added = session.add(&new_input()).await.unwrap();
        session.refresh_activity().await;

        let found = session.find(&added.id).await.unwrap();
        assert_eq!(found.name, added.name);
        assert_eq!(found.activity_status, ActivityStatus::None);
        assert_eq!(found.last_activity, None);
    }

    #[tokio::test]
    async fn toggling_favorites_updates_the_favorite_view() {
        let session = session_with(Arc::new(FixedStationProvider::new(None)));

        let ids = session.toggle_favorite("rb-1").await.unwrap();
        assert_eq!(ids, vec!["rb-1".to_string()]);
        let favorites = session.favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "rb-1");

        // Unknown ids are legal and inert.
        session.toggle_favorite("ghost").await.unwrap();
        assert_eq!(session.favorites().await.len(), 1);

        let ids = session.toggle_favorite("rb-1").await.unwrap();
        assert_eq!(ids, vec!["ghost".to_string()]);
        assert!(session.favorites().await.is_empty());
    }

    #[tokio::test]
    async fn acquisition_times_out_to_a_failed_state() {
        let session = session_with(Arc::new(PendingProvider));

        let location = session.request_location().await;
        assert!(!location.loading);
        assert_eq!(location.coordinates, None);
        assert_eq!(
            location.error.as_deref(),
            Some("The request to get your location timed out.")
        );
    }

    #[tokio::test]
    async fn provider_error_maps_to_its_message() {
        let session = session_with(Arc::new(DeniedProvider));

        let location = session.request_location().await;
        assert_eq!(
            location.error.as_deref(),
            Some("Location access was denied. Please enable location in your settings.")
        );
    }

    #[tokio::test]
    async fn resolved_location_drives_distance_sorting() {
        let session = session_with(Arc::new(FixedStationProvider::new(Some(brussels()))));

        let location = session.request_location().await;
        assert_eq!(location.coordinates, Some(brussels()));

        let records = session.frequencies(&ListFilter::default()).await;
        assert!(records.iter().all(|r| r.distance_km.is_some()));
    }
}
