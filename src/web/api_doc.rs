use utoipa::OpenApi;

use crate::catalog::types::{
    ActivityStatus, Category, Coordinates, Details, FrequencyRecord, Location, NewFrequencyInput,
};
use crate::location::UserLocation;

use super::api::error::ErrorResponse;
use super::api::favorites::ToggleFavoriteResponse;
use super::api::frequencies::CategoryCount;
use super::api::map::MapMarker;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::frequencies::list_frequencies,
        super::api::frequencies::get_frequency,
        super::api::frequencies::add_frequency,
        super::api::frequencies::list_categories,
        super::api::favorites::list_favorites,
        super::api::favorites::list_favorite_ids,
        super::api::favorites::toggle_favorite,
        super::api::location::get_location,
        super::api::location::set_location,
        super::api::location::request_location,
        super::api::map::list_markers,
    ),
    components(
        schemas(
            FrequencyRecord,
            Category,
            ActivityStatus,
            Details,
            Coordinates,
            Location,
            NewFrequencyInput,
            UserLocation,
            MapMarker,
            CategoryCount,
            ToggleFavoriteResponse,
            ErrorResponse,
        )
    ),
    info(
        title = "Wavedir Frequency API",
        description = "API for browsing and extending the radio frequency directory",
        version = "0.1.0"
    ),
    tags(
        (name = "frequencies", description = "Catalog browsing and additions"),
        (name = "favorites", description = "Favorite management"),
        (name = "location", description = "User location state"),
        (name = "map", description = "Map rendering feed")
    )
)]
pub struct ApiDoc;
