//! Challenges
//!
//! Create, list and join. "Join" is only offered while the caller is not
//! participating; the backend treats a repeated join as a no-op anyway.

use super::{acknowledge, parse_date_field, report, Mutation};
use crate::api::{ChallengesApi, NewChallenge};
use crate::error::{ClientError, ClientResult};
use crate::models::Challenge;
use crate::shell::Shell;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeDraft {
    pub habit_id: Option<u32>,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl ChallengeDraft {
    pub fn validate(&self) -> ClientResult<NewChallenge> {
        let habit_id = self
            .habit_id
            .ok_or_else(|| ClientError::validation("Please select a habit."))?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::validation("Please enter a challenge name."));
        }
        let start_date = parse_date_field(&self.start_date, "start date")?;
        let end_date = parse_date_field(&self.end_date, "end date")?;
        if end_date < start_date {
            return Err(ClientError::validation("End date cannot be before start date."));
        }

        Ok(NewChallenge {
            habit_id,
            name: name.to_string(),
            description: self.description.trim().to_string(),
            start_date,
            end_date,
        })
    }
}

pub struct ChallengesController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    shell: &'a S,
}

impl<'a, A, S> ChallengesController<'a, A, S>
where
    A: ChallengesApi + ?Sized,
    S: Shell + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S) -> Self {
        Self { api, shell }
    }

    pub async fn load(&self) -> Option<Vec<Challenge>> {
        match self.api.list_challenges().await {
            Ok(challenges) => Some(challenges),
            Err(err) => {
                report(self.shell, "challenges", "Error loading challenges.", &err);
                None
            }
        }
    }

    pub async fn create(&self, draft: &ChallengeDraft) -> Mutation<Vec<Challenge>> {
        let challenge = match draft.validate() {
            Ok(challenge) => challenge,
            Err(err) => {
                report(self.shell, "challenges", "Error creating challenge.", &err);
                return Mutation::Failed;
            }
        };

        match self.api.add_challenge(&challenge).await {
            Ok(response) => acknowledge(self.shell, response.message, "Challenge created successfully!"),
            Err(err) => {
                report(self.shell, "challenges", "Error creating challenge.", &err);
                return Mutation::Failed;
            }
        }
        Mutation::Applied(self.load().await)
    }

    pub async fn join(&self, challenge_id: u32) -> Mutation<Vec<Challenge>> {
        match self.api.join_challenge(challenge_id).await {
            Ok(response) => acknowledge(self.shell, response.message, "Joined challenge successfully!"),
            Err(err) => {
                report(self.shell, "challenges", "Error joining challenge.", &err);
                return Mutation::Failed;
            }
        }
        Mutation::Applied(self.load().await)
    }
}
