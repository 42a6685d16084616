use crate::db::PokemonStore;
use crate::error::AppResult;
use crate::models::Pokemon;
use std::sync::Arc;
use tracing::error;

/// Stored procedure returning the localized Pokemon document for
/// `(id, lang)` as a single JSON-encoded column.
const GET_POKEMON_QUERY: &str = "SELECT pokedex.getpokemon($1, $2)";

/// Business logic for Pokemon retrieval.
#[derive(Clone)]
pub struct PokemonService {
    store: Arc<dyn PokemonStore>,
}

impl PokemonService {
    /// Create a new service backed by the given store.
    pub fn new(store: Arc<dyn PokemonStore>) -> Self {
        Self { store }
    }

    /// Retrieve a Pokemon by its ID, localized to `lang`.
    ///
    /// This is the single point where retrieval failures are observed for
    /// diagnostics: both store errors and decode failures are logged once
    /// here and then propagated unchanged. An empty payload (no matching
    /// row, or a NULL column) surfaces as a decode failure. No retry, no
    /// fallback value.
    pub async fn get_pokemon_by_id(&self, id: i32, lang: &str) -> AppResult<Pokemon> {
        let payload = self
            .store
            .query_json(GET_POKEMON_QUERY, id, lang)
            .await
            .map_err(|e| {
                error!("Pokemon query failed for id={} lang={}: {}", id, lang, e);
                e
            })?;

        serde_json::from_slice::<Pokemon>(&payload).map_err(|e| {
            error!(
                "Failed to decode Pokemon payload for id={} lang={}: {}",
                id, lang, e
            );
            e.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::BaseStats;
    use async_trait::async_trait;

    struct FixedStore(Vec<u8>);

    #[async_trait]
    impl PokemonStore for FixedStore {
        async fn query_json(&self, _query: &str, _id: i32, _lang: &str) -> AppResult<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl PokemonStore for FailingStore {
        async fn query_json(&self, _query: &str, _id: i32, _lang: &str) -> AppResult<Vec<u8>> {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn pikachu() -> Pokemon {
        Pokemon {
            id: 25,
            name: "Pikachu".to_string(),
            types: vec!["Electric".to_string()],
            base_stats: BaseStats {
                hp: 35,
                speed: 90,
                attack: 55,
                defense: 40,
                special_attack: 50,
                special_defense: 50,
            },
            generation: 1,
        }
    }

    #[tokio::test]
    async fn test_decodes_store_payload() {
        let payload = serde_json::to_vec(&pikachu()).unwrap();
        let service = PokemonService::new(Arc::new(FixedStore(payload)));

        let result = service.get_pokemon_by_id(25, "en").await.unwrap();
        assert_eq!(result, pikachu());
    }

    #[tokio::test]
    async fn test_empty_payload_is_decode_error() {
        let service = PokemonService::new(Arc::new(FixedStore(Vec::new())));

        let result = service.get_pokemon_by_id(25, "en").await;
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[tokio::test]
    async fn test_store_error_propagates_unchanged() {
        let service = PokemonService::new(Arc::new(FailingStore));

        let result = service.get_pokemon_by_id(25, "en").await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
