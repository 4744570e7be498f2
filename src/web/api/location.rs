use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::catalog::Coordinates;
use crate::location::UserLocation;
use crate::web::api::error::ApiResult;
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/location",
    tag = "location",
    responses(
        (status = 200, description = "Current user location state", body = UserLocation)
    )
)]
pub async fn get_location(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok((StatusCode::OK, Json(state.session.location().await)))
}

#[utoipa::path(
    post,
    path = "/api/location",
    tag = "location",
    request_body = Coordinates,
    responses(
        (status = 200, description = "Location state after the manual override", body = UserLocation)
    )
)]
pub async fn set_location(
    State(state): State<AppState>,
    Json(coordinates): Json<Coordinates>,
) -> ApiResult<impl IntoResponse> {
    let location = state.session.set_location(coordinates).await;
    Ok((StatusCode::OK, Json(location)))
}

#[utoipa::path(
    post,
    path = "/api/location/request",
    tag = "location",
    responses(
        (status = 200, description = "Location state once acquisition settles; failures land in the error field", body = UserLocation)
    )
)]
pub async fn request_location(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let location = state.session.request_location().await;
    Ok((StatusCode::OK, Json(location)))
}
