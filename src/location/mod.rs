use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use utoipa::ToSchema;

use crate::catalog::Coordinates;

/// Typed geolocation failure, mirroring the browser geolocation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    PermissionDenied,
    Unavailable,
    Timeout,
    Unknown,
}

impl GeolocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            GeolocationError::PermissionDenied => {
                "Location access was denied. Please enable location in your settings."
            }
            GeolocationError::Unavailable => "Location information is unavailable.",
            GeolocationError::Timeout => "The request to get your location timed out.",
            GeolocationError::Unknown => {
                "An unknown error occurred while getting your location."
            }
        }
    }
}

/// Tri-state location: unresolved, resolving, or resolved-or-failed.
/// `loading` and a set `error` are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct UserLocation {
    pub coordinates: Option<Coordinates>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserLocation {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn resolve(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, error: GeolocationError) {
        self.coordinates = None;
        self.loading = false;
        self.error = Some(error.user_message().to_string());
    }

    /// Manual override from the UI; last write wins over any in-flight
    /// acquisition.
    pub fn set_manual(&mut self, coordinates: Coordinates) {
        self.resolve(coordinates);
    }
}

pub type LocateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Coordinates, GeolocationError>> + Send + 'a>>;

/// Collaborator that eventually yields a position or a typed error. The
/// session layer bounds every acquisition with its configured timeout.
pub trait LocationProvider: Send + Sync {
    fn locate(&self) -> LocateFuture<'_>;
}

/// Provider backed by a fixed station position from the configuration, the
/// service-side stand-in for a browser geolocation API.
pub struct FixedStationProvider {
    coordinates: Option<Coordinates>,
}

impl FixedStationProvider {
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        FixedStationProvider { coordinates }
    }
}

impl LocationProvider for FixedStationProvider {
    fn locate(&self) -> LocateFuture<'_> {
        let result = self.coordinates.ok_or(GeolocationError::Unavailable);
        Box::pin(async move { result })
    }
}

/// Parse a "lat, lon" pair as written in the configuration file.
pub fn parse_coordinates(coordinates: &str) -> Option<Coordinates> {
    let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
    if parts.len() < 2 {
        return None;
    }
    let latitude = parts[0].parse().ok()?;
    let longitude = parts[1].parse().ok()?;
    Some(Coordinates {
        latitude,
        longitude,
    })
}
