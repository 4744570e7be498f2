use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::FileStore;
use crate::location::{parse_coordinates, FixedStationProvider};
use crate::session::{spawn_refresh, Session};

use super::api::favorites as favorite_handlers;
use super::api::frequencies as frequency_handlers;
use super::api::location as location_handlers;
use super::api::map as map_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;
use super::ui::handlers as ui_handlers;

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let store = Arc::new(FileStore::new(config.storage.data_folder.clone()));

    let station = config
        .geolocation
        .station
        .as_ref()
        .and_then(|s| parse_coordinates(&s.coordinates));
    if config.geolocation.station.is_some() && station.is_none() {
        log::warn!("Ignoring station with unparseable coordinates");
    }
    let provider = Arc::new(FixedStationProvider::new(station));

    let session = Arc::new(Session::new(store, provider, config.geolocation.timeout));
    let refresh = spawn_refresh(session.clone(), config.refresh.interval);

    let state = AppState {
        config: Arc::new(config),
        session,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // UI routes
        .route("/", get(ui_handlers::directory))
        .route("/map", get(ui_handlers::map_page))
        // Frequency API endpoints
        .route("/api/frequencies", get(frequency_handlers::list_frequencies))
        .route("/api/frequencies", post(frequency_handlers::add_frequency))
        .route(
            "/api/frequencies/{id}",
            get(frequency_handlers::get_frequency),
        )
        .route("/api/categories", get(frequency_handlers::list_categories))
        // Favorite API endpoints
        .route("/api/favorites", get(favorite_handlers::list_favorites))
        .route(
            "/api/favorites/ids",
            get(favorite_handlers::list_favorite_ids),
        )
        .route(
            "/api/favorites/{id}/toggle",
            post(favorite_handlers::toggle_favorite),
        )
        // Location API endpoints
        .route("/api/location", get(location_handlers::get_location))
        .route("/api/location", post(location_handlers::set_location))
        .route(
            "/api/location/request",
            post(location_handlers::request_location),
        )
        // Map API endpoints
        .route("/api/map/markers", get(map_handlers::list_markers))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let result = axum::serve(listener, app).await;

    refresh.cancel();
    result
}
