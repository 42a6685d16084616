use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::pokemon_handlers;
use super::AppState;

/// The single lookup route exposed by the service.
pub const GET_POKEMON_BY_ID_ENDPOINT: &str = "/record/{lang}/{id}";

/// Create application router
pub fn create_router(state: Arc<AppState>) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route(
            GET_POKEMON_BY_ID_ENDPOINT,
            get(pokemon_handlers::get_pokemon_by_id),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
