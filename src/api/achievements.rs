//! Achievement Endpoints

use async_trait::async_trait;

use super::HttpBackend;
use crate::error::ClientResult;
use crate::models::Achievement;

#[async_trait(?Send)]
pub trait AchievementsApi {
    async fn list_achievements(&self) -> ClientResult<Vec<Achievement>>;
}

#[async_trait(?Send)]
impl AchievementsApi for HttpBackend {
    async fn list_achievements(&self) -> ClientResult<Vec<Achievement>> {
        self.get("/achievements").await
    }
}
