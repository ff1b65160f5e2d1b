//! Preference Endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::HttpBackend;
use crate::error::ClientResult;
use crate::models::{MessageResponse, Preferences};

/// Partial update; absent fields are left alone by the backend
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
}

#[async_trait(?Send)]
pub trait PreferencesApi {
    async fn get_preferences(&self) -> ClientResult<Preferences>;

    async fn update_preferences(&self, update: &PreferencesUpdate) -> ClientResult<MessageResponse>;
}

#[async_trait(?Send)]
impl PreferencesApi for HttpBackend {
    async fn get_preferences(&self) -> ClientResult<Preferences> {
        self.get(&self.preferences_path).await
    }

    async fn update_preferences(&self, update: &PreferencesUpdate) -> ClientResult<MessageResponse> {
        self.acknowledge(Method::PUT, &self.preferences_path, Some(update)).await
    }
}
