//! Suggestion Catalog Endpoints
//!
//! Adopting a suggestion goes through `HabitsApi::add_habit`.

use async_trait::async_trait;

use super::HttpBackend;
use crate::error::ClientResult;
use crate::models::Suggestion;

#[async_trait(?Send)]
pub trait SuggestionsApi {
    async fn list_suggestions(&self) -> ClientResult<Vec<Suggestion>>;
}

#[async_trait(?Send)]
impl SuggestionsApi for HttpBackend {
    async fn list_suggestions(&self) -> ClientResult<Vec<Suggestion>> {
        self.get("/suggestions").await
    }
}
