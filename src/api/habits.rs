//! Habit Endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::HttpBackend;
use crate::error::{ClientError, ClientResult};
use crate::models::{flag, CompletionResponse, Habit, HabitFrequency, MessageResponse};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewHabit {
    pub habit_name: String,
    pub habit_frequency: String,
}

#[derive(Serialize)]
struct CompletionArgs {
    is_completed: bool,
}

// ========================
// Wire Shapes
// ========================

/// `/get_habits` answers `{habits: [...]}` or a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum HabitsEnvelope {
    Wrapped { habits: Vec<HabitRecord> },
    Bare(Vec<HabitRecord>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HabitRecord {
    Object(HabitObject),
    /// Positional row: `[id, name, frequency, is_completed, streak]`
    Row(u32, String, String, RawFlag, Option<u32>),
}

#[derive(Deserialize)]
struct HabitObject {
    id: u32,
    #[serde(alias = "name")]
    habit_name: String,
    #[serde(alias = "frequency")]
    habit_frequency: HabitFrequency,
    #[serde(default, alias = "completed", deserialize_with = "flag::deserialize_or_false")]
    is_completed: bool,
    #[serde(default)]
    streak: Option<u32>,
}

#[derive(Deserialize)]
struct RawFlag(#[serde(deserialize_with = "flag::deserialize_or_false")] bool);

impl From<HabitRecord> for Habit {
    fn from(record: HabitRecord) -> Self {
        match record {
            HabitRecord::Object(o) => Habit {
                id: o.id,
                name: o.habit_name,
                frequency: o.habit_frequency,
                completed_today: o.is_completed,
                streak: o.streak.unwrap_or(0),
            },
            HabitRecord::Row(id, name, frequency, completed, streak) => Habit {
                id,
                name,
                frequency: HabitFrequency::parse(&frequency),
                completed_today: completed.0,
                streak: streak.unwrap_or(0),
            },
        }
    }
}

/// Normalize any known `/get_habits` body into canonical habits
pub fn parse_habits(body: &str) -> ClientResult<Vec<Habit>> {
    let envelope: HabitsEnvelope = serde_json::from_str(body)
        .map_err(|e| ClientError::Decode(format!("habit collection: {}", e)))?;
    let records = match envelope {
        HabitsEnvelope::Wrapped { habits } => habits,
        HabitsEnvelope::Bare(habits) => habits,
    };
    Ok(records.into_iter().map(Habit::from).collect())
}

// ========================
// Trait
// ========================

#[async_trait(?Send)]
pub trait HabitsApi {
    async fn list_habits(&self) -> ClientResult<Vec<Habit>>;

    async fn add_habit(&self, habit: &NewHabit) -> ClientResult<MessageResponse>;

    async fn update_completion(&self, habit_id: u32, is_completed: bool) -> ClientResult<CompletionResponse>;

    async fn remove_habit(&self, habit_id: u32) -> ClientResult<MessageResponse>;
}

#[async_trait(?Send)]
impl HabitsApi for HttpBackend {
    async fn list_habits(&self) -> ClientResult<Vec<Habit>> {
        let response = self.client.get(self.url("/get_habits")).send().await?;
        let body = super::checked_text(response).await?;
        parse_habits(&body)
    }

    async fn add_habit(&self, habit: &NewHabit) -> ClientResult<MessageResponse> {
        self.acknowledge(Method::POST, "/add_habit", Some(habit)).await
    }

    async fn update_completion(&self, habit_id: u32, is_completed: bool) -> ClientResult<CompletionResponse> {
        let path = format!("/update_habit_completion/{}", habit_id);
        self.send(Method::PUT, &path, Some(&CompletionArgs { is_completed })).await
    }

    async fn remove_habit(&self, habit_id: u32) -> ClientResult<MessageResponse> {
        let path = format!("/remove_habit/{}", habit_id);
        self.acknowledge::<()>(Method::DELETE, &path, None).await
    }
}
