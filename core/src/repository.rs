//! Error boundary between the screen controllers and the API client.
//!
//! Every failure coming out of [`ApiClient`] stops here: it is logged and
//! replaced with an empty list or `None`. Callers above this layer never
//! branch on errors.

use crate::client::ApiClient;
use crate::types::Character;

/// Maximum number of characters the list screen ever shows.
pub const LIST_LIMIT: usize = 15;

#[derive(Debug, Clone)]
pub struct CharacterRepository {
    api: ApiClient,
}

impl CharacterRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The first [`LIST_LIMIT`] characters of page 1, in server order.
    /// Empty on any failure.
    pub async fn list_characters(&self) -> Vec<Character> {
        match self.api.fetch_character_page(1).await {
            Ok(page) => {
                let mut results = page.results;
                results.truncate(LIST_LIMIT);
                results
            }
            Err(error) => {
                tracing::warn!(operation = "list_characters", %error, "character list unavailable");
                Vec::new()
            }
        }
    }

    /// The character with `id`, or `None` on any failure including 404.
    pub async fn get_character(&self, id: u32) -> Option<Character> {
        match self.api.fetch_character_by_id(id).await {
            Ok(character) => Some(character),
            Err(error) => {
                tracing::warn!(operation = "get_character", id, %error, "character unavailable");
                None
            }
        }
    }
}
