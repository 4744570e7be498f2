use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::types::Details;
use crate::catalog::{Category, Coordinates, FrequencyRecord};
use crate::session::ListFilter;
use crate::web::api::error::ApiResult;
use crate::web::state::AppState;

/// What the map rendering surface consumes: identity, position, category and
/// the display fields its popups need. Tiles and styling stay on its side.
#[derive(Debug, Serialize, ToSchema)]
pub struct MapMarker {
    pub id: String,
    pub coordinates: Coordinates,
    pub category: Category,
    pub color: String,
    pub name: String,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

/// Marker color per category; unmapped categories fall back to gray.
pub fn marker_color(category: Category) -> &'static str {
    match category {
        Category::Airband => "#ef4444",
        Category::Vhf => "#3b82f6",
        Category::Uhf => "#8b5cf6",
        Category::Repeaters => "#10b981",
        Category::Cw => "#f59e0b",
        Category::Hf => "#6366f1",
        Category::Aprs => "#84cc16",
        _ => "#6b7280",
    }
}

impl From<FrequencyRecord> for MapMarker {
    fn from(record: FrequencyRecord) -> Self {
        let (callsign, course, speed, altitude) = match &record.details {
            Some(Details::Aprs {
                callsign,
                course,
                speed,
                altitude,
                ..
            }) => (Some(callsign.clone()), *course, *speed, *altitude),
            _ => (None, None, None, None),
        };

        MapMarker {
            id: record.id,
            coordinates: record.location.coordinates,
            category: record.category,
            color: marker_color(record.category).to_string(),
            name: record.name,
            frequency: record.frequency,
            callsign,
            course,
            speed,
            altitude,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/map/markers",
    tag = "map",
    responses(
        (status = 200, description = "Markers for every catalog record", body = Vec<MapMarker>)
    )
)]
pub async fn list_markers(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let records = state.session.frequencies(&ListFilter::default()).await;
    let markers: Vec<MapMarker> = records.into_iter().map(MapMarker::from).collect();
    Ok((StatusCode::OK, Json(markers)))
}
