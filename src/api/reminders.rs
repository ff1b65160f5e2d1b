//! Reminder Endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::HttpBackend;
use crate::error::ClientResult;
use crate::models::{MessageResponse, Reminder};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReminder {
    pub habit_id: u32,
    /// `HH:MM`
    pub time: String,
    /// Lowercase weekday names, e.g. `monday`
    pub days: Vec<String>,
}

#[derive(Serialize)]
struct ToggleArgs {
    enabled: bool,
}

#[async_trait(?Send)]
pub trait RemindersApi {
    async fn list_reminders(&self) -> ClientResult<Vec<Reminder>>;

    async fn add_reminder(&self, reminder: &NewReminder) -> ClientResult<MessageResponse>;

    async fn set_reminder_enabled(&self, reminder_id: u32, enabled: bool) -> ClientResult<MessageResponse>;
}

#[async_trait(?Send)]
impl RemindersApi for HttpBackend {
    async fn list_reminders(&self) -> ClientResult<Vec<Reminder>> {
        self.get("/reminders").await
    }

    async fn add_reminder(&self, reminder: &NewReminder) -> ClientResult<MessageResponse> {
        self.acknowledge(Method::POST, "/reminders", Some(reminder)).await
    }

    async fn set_reminder_enabled(&self, reminder_id: u32, enabled: bool) -> ClientResult<MessageResponse> {
        let path = format!("/reminders/{}", reminder_id);
        self.acknowledge(Method::PUT, &path, Some(&ToggleArgs { enabled })).await
    }
}
