use crate::service::PokemonService;

/// Application state shared across all HTTP handlers.
///
/// Wrapped in `Arc` and handed to handlers via Axum's State extraction.
/// It carries the retrieval service, which in turn owns the only shared
/// resource in the system (the connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Retrieval service backing the lookup route
    pub service: PokemonService,
}
