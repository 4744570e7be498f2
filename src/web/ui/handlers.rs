use axum::{extract::State, response::IntoResponse};

use crate::session::ListFilter;
use crate::web::state::AppState;

use super::templates::{DirectoryTemplate, MapTemplate};

pub async fn directory(State(state): State<AppState>) -> impl IntoResponse {
    let total = state.session.frequencies(&ListFilter::default()).await.len();
    let station = state
        .config
        .geolocation
        .station
        .as_ref()
        .and_then(|s| s.name.clone())
        .unwrap_or_default();
    DirectoryTemplate { total, station }
}

pub async fn map_page(State(_state): State<AppState>) -> impl IntoResponse {
    MapTemplate {}
}
