use crate::error::{AppError, AppResult};
use crate::validation::is_valid_language_code;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json};
use std::sync::Arc;

use super::AppState;

/// Handle the `GET /record/{lang}/{id}` endpoint.
///
/// Parameters are checked in a fixed order (id presence, id syntax, id
/// positivity, language presence, language format) so each failure maps
/// to its own 400 message; the store is never reached on a validation
/// failure. The language code is lowercased before validation and before
/// being passed downstream.
pub async fn get_pokemon_by_id(
    State(state): State<Arc<AppState>>,
    Path((lang, id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let lang = lang.to_lowercase();

    if id.is_empty() {
        return Err(AppError::MissingId);
    }

    let id: i32 = id.parse().map_err(|_| AppError::InvalidId)?;

    if id <= 0 {
        return Err(AppError::NonPositiveId);
    }

    if lang.is_empty() {
        return Err(AppError::MissingLanguageCode);
    }

    if !is_valid_language_code(&lang) {
        return Err(AppError::InvalidLanguageCode);
    }

    let pokemon = state.service.get_pokemon_by_id(id, &lang).await?;

    Ok(Json(pokemon))
}
