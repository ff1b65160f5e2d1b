//! Challenge Endpoints

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;

use super::HttpBackend;
use crate::error::ClientResult;
use crate::models::{Challenge, MessageResponse};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewChallenge {
    pub habit_id: u32,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[async_trait(?Send)]
pub trait ChallengesApi {
    async fn list_challenges(&self) -> ClientResult<Vec<Challenge>>;

    async fn add_challenge(&self, challenge: &NewChallenge) -> ClientResult<MessageResponse>;

    /// Idempotent per user
    async fn join_challenge(&self, challenge_id: u32) -> ClientResult<MessageResponse>;
}

#[async_trait(?Send)]
impl ChallengesApi for HttpBackend {
    async fn list_challenges(&self) -> ClientResult<Vec<Challenge>> {
        self.get("/challenges").await
    }

    async fn add_challenge(&self, challenge: &NewChallenge) -> ClientResult<MessageResponse> {
        self.acknowledge(Method::POST, "/challenges", Some(challenge)).await
    }

    async fn join_challenge(&self, challenge_id: u32) -> ClientResult<MessageResponse> {
        let path = format!("/join_challenge/{}", challenge_id);
        self.acknowledge::<()>(Method::POST, &path, None).await
    }
}
