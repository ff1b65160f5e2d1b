//! Frontend Models
//!
//! Data structures matching backend entities, in their canonical shape.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Booleans arrive as `true`/`false` or as SQLite `0`/`1`
pub(crate) mod flag {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match RawFlag::deserialize(deserializer)? {
            RawFlag::Bool(value) => value,
            RawFlag::Int(value) => value != 0,
        })
    }

    pub fn deserialize_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(Option::<RawFlag>::deserialize(deserializer)?
            .map(|raw| match raw {
                RawFlag::Bool(value) => value,
                RawFlag::Int(value) => value != 0,
            })
            .unwrap_or(false))
    }
}

/// Target frequency of a habit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum HabitFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    /// Anything the backend accepts that is not one of the buckets
    Other(String),
}

impl HabitFrequency {
    pub fn as_str(&self) -> &str {
        match self {
            HabitFrequency::Daily => "daily",
            HabitFrequency::Weekly => "weekly",
            HabitFrequency::Monthly => "monthly",
            HabitFrequency::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => HabitFrequency::Daily,
            "weekly" => HabitFrequency::Weekly,
            "monthly" => HabitFrequency::Monthly,
            _ => HabitFrequency::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for HabitFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HabitFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HabitFrequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(HabitFrequency::parse(&raw))
    }
}

/// Habit as rendered by the list (streak is always server-computed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    #[serde(rename = "habit_name")]
    pub name: String,
    #[serde(rename = "habit_frequency")]
    pub frequency: HabitFrequency,
    #[serde(rename = "is_completed", deserialize_with = "flag::deserialize")]
    pub completed_today: bool,
    pub streak: u32,
}

impl Habit {
    /// One-line list label, e.g. `Read - daily - Streak: 0`
    pub fn summary(&self) -> String {
        format!("{} - {} - Streak: {}", self.name, self.frequency, self.streak)
    }
}

/// Date-stamped completion record, source of calendar markers
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionEvent {
    pub habit_name: String,
    pub date: NaiveDate,
    pub completed: bool,
}

/// One row of a day breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHabitStatus {
    #[serde(default)]
    pub habit_id: Option<u32>,
    pub habit_name: String,
    #[serde(default, deserialize_with = "flag::deserialize_or_false")]
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "badge_icon")]
    pub icon: String,
    #[serde(default)]
    pub earned_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "note")]
    pub body: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "habit_name")]
    pub name: String,
    #[serde(rename = "habit_frequency")]
    pub frequency: HabitFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u32,
    #[serde(default)]
    pub habit_name: String,
    pub time: String,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default, deserialize_with = "flag::deserialize_or_false")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(
        default,
        alias = "isParticipating",
        deserialize_with = "flag::deserialize_or_false"
    )]
    pub is_participating: bool,
    #[serde(default)]
    pub completion_rate: Option<f64>,
}

impl Challenge {
    /// Progress bar width, clamped to 0..=100
    pub fn progress_percent(&self) -> f64 {
        self.completion_rate.unwrap_or(0.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, deserialize_with = "flag::deserialize_or_false")]
    pub dark_mode: bool,
    #[serde(default, deserialize_with = "flag::deserialize_or_false")]
    pub email_notifications: bool,
}

/// Generic `{message}` acknowledgement
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Answer to a completion toggle; older backends only send `message`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub streak: Option<u32>,
    #[serde(default)]
    pub new_achievements: Vec<Achievement>,
}
