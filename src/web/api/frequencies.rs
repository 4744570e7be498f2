use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::types::ALL_CATEGORIES;
use crate::catalog::{CategoryFilter, Coordinates, FrequencyRecord, NewFrequencyInput};
use crate::session::ListFilter;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListFrequenciesQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl ListFrequenciesQuery {
    fn into_filter(self) -> Result<ListFilter, ApiError> {
        let category = match self.category.as_deref() {
            None => CategoryFilter::All,
            Some(label) => CategoryFilter::parse(label)
                .ok_or_else(|| ApiError::Validation(format!("unknown category: {}", label)))?,
        };

        let origin = match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            (None, None) => None,
            _ => {
                return Err(ApiError::Validation(
                    "lat and lon must be supplied together".to_string(),
                ))
            }
        };

        Ok(ListFilter {
            category,
            search: self.search,
            origin,
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/frequencies",
    tag = "frequencies",
    params(
        ("category" = Option<String>, Query, description = "Category label or All"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring search"),
        ("lat" = Option<f64>, Query, description = "Sort origin latitude (requires lon)"),
        ("lon" = Option<f64>, Query, description = "Sort origin longitude (requires lat)")
    ),
    responses(
        (status = 200, description = "Filtered frequency list", body = Vec<FrequencyRecord>),
        (status = 400, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn list_frequencies(
    State(state): State<AppState>,
    Query(query): Query<ListFrequenciesQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = query.into_filter()?;
    let records = state.session.frequencies(&filter).await;
    Ok((StatusCode::OK, Json(records)))
}

#[utoipa::path(
    get,
    path = "/api/frequencies/{id}",
    tag = "frequencies",
    params(
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Frequency record", body = FrequencyRecord),
        (status = 404, description = "Record not found", body = ErrorResponse)
    )
)]
pub async fn get_frequency(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    match state.session.find(&id).await {
        Some(record) => Ok((StatusCode::OK, Json(record))),
        None => Err(ApiError::NotFound),
    }
}

#[utoipa::path(
    post,
    path = "/api/frequencies",
    tag = "frequencies",
    request_body = NewFrequencyInput,
    responses(
        (status = 201, description = "Frequency added", body = FrequencyRecord),
        (status = 400, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn add_frequency(
    State(state): State<AppState>,
    Json(input): Json<NewFrequencyInput>,
) -> ApiResult<impl IntoResponse> {
    input.validate().map_err(ApiError::Validation)?;

    let record = state.session.add(&input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "frequencies",
    responses(
        (status = 200, description = "Category labels with record counts", body = Vec<CategoryCount>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let records = state.session.frequencies(&ListFilter::default()).await;

    let counts: Vec<CategoryCount> = ALL_CATEGORIES
        .iter()
        .map(|category| CategoryCount {
            category: category.to_string(),
            count: records.iter().filter(|r| r.category == *category).count(),
        })
        .collect();

    Ok((StatusCode::OK, Json(counts)))
}
