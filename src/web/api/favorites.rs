use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;

use crate::catalog::FrequencyRecord;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = "favorites",
    responses(
        (status = 200, description = "Favorited records in catalog order", body = Vec<FrequencyRecord>)
    )
)]
pub async fn list_favorites(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let favorites = state.session.favorites().await;
    Ok((StatusCode::OK, Json(favorites)))
}

#[utoipa::path(
    get,
    path = "/api/favorites/ids",
    tag = "favorites",
    responses(
        (status = 200, description = "Favorited record ids", body = Vec<String>)
    )
)]
pub async fn list_favorite_ids(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let ids = state.session.favorite_ids().await;
    Ok((StatusCode::OK, Json(ids)))
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct ToggleFavoriteResponse {
    pub favorite_ids: Vec<String>,
    pub favorited: bool,
}

#[utoipa::path(
    post,
    path = "/api/favorites/{id}/toggle",
    tag = "favorites",
    params(
        ("id" = String, Path, description = "Record id; need not resolve to a record")
    ),
    responses(
        (status = 200, description = "Resulting favorite set", body = ToggleFavoriteResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let favorite_ids = state.session.toggle_favorite(&id).await?;
    let favorited = favorite_ids.iter().any(|f| *f == id);

    Ok((
        StatusCode::OK,
        Json(ToggleFavoriteResponse {
            favorite_ids,
            favorited,
        }),
    ))
}
