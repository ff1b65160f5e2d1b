//! Notification Endpoints

use async_trait::async_trait;

use super::HttpBackend;
use crate::error::ClientResult;
use crate::models::Notification;

#[async_trait(?Send)]
pub trait NotificationsApi {
    async fn list_notifications(&self) -> ClientResult<Vec<Notification>>;
}

#[async_trait(?Send)]
impl NotificationsApi for HttpBackend {
    async fn list_notifications(&self) -> ClientResult<Vec<Notification>> {
        self.get("/notifications").await
    }
}
