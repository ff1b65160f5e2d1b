//! REST Bindings
//!
//! Typed wrappers over the backend endpoints, organized by resource.
//! Each resource is a trait so controllers can run against fakes.

mod achievements;
mod calendar;
mod challenges;
mod habits;
mod notes;
mod notifications;
mod preferences;
mod reminders;
mod suggestions;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::MessageResponse;

pub use achievements::AchievementsApi;
pub use calendar::{CalendarApi, DateRange, StatusUpdate};
pub use challenges::{ChallengesApi, NewChallenge};
pub use habits::{HabitsApi, NewHabit};
pub use notes::NotesApi;
pub use notifications::NotificationsApi;
pub use preferences::{PreferencesApi, PreferencesUpdate};
pub use reminders::{NewReminder, RemindersApi};
pub use suggestions::SuggestionsApi;

/// Backend reached over HTTP (fetch on wasm32)
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    preferences_path: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            preferences_path: config.preferences_path.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        decode(response).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        decode(request.send().await?).await
    }

    /// For endpoints whose body is at most a `{message}`
    async fn acknowledge<B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<MessageResponse>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let text = checked_text(request.send().await?).await?;
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }
}

async fn checked_text(response: Response) -> ClientResult<String> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            message: error_message(&text),
        });
    }
    Ok(text)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let text = checked_text(response).await?;
    Ok(serde_json::from_str(&text)?)
}

/// Pull a human message out of an error body (`{message}`, `{error}` or plain text)
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(m), .. }) | Ok(ErrorBody { error: Some(m), .. }) => m,
        _ => body.trim().chars().take(200).collect(),
    }
}
