//! Calendar Endpoints

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::HttpBackend;
use crate::error::ClientResult;
use crate::models::{flag, CompletionEvent, DayHabitStatus, MessageResponse};

/// Inclusive date window requested by the calendar widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Day-level status write keyed by habit + date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub habit_id: u32,
    pub completion_date: NaiveDate,
    pub is_completed: bool,
}

#[derive(Deserialize)]
struct RangeRecord {
    #[serde(alias = "habit_name")]
    name: String,
    #[serde(default, alias = "completion_date")]
    date: Option<String>,
    #[serde(default, deserialize_with = "flag::deserialize_or_false")]
    is_completed: bool,
}

/// Records without a usable date cannot be placed on the calendar
fn into_events(records: Vec<RangeRecord>) -> Vec<CompletionEvent> {
    records
        .into_iter()
        .filter_map(|record| {
            let raw = record.date?;
            match NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw.as_str()), "%Y-%m-%d") {
                Ok(date) => Some(CompletionEvent {
                    habit_name: record.name,
                    date,
                    completed: record.is_completed,
                }),
                Err(_) => {
                    log::warn!("[calendar] skipping record with bad date {:?}", raw);
                    None
                }
            }
        })
        .collect()
}

#[async_trait(?Send)]
pub trait CalendarApi {
    async fn completion_events(&self, range: &DateRange) -> ClientResult<Vec<CompletionEvent>>;

    async fn habits_on_date(&self, date: NaiveDate) -> ClientResult<Vec<DayHabitStatus>>;

    async fn update_habit_status(&self, update: &StatusUpdate) -> ClientResult<MessageResponse>;
}

#[async_trait(?Send)]
impl CalendarApi for HttpBackend {
    async fn completion_events(&self, range: &DateRange) -> ClientResult<Vec<CompletionEvent>> {
        let records: Vec<RangeRecord> = self
            .send(Method::POST, "/habits_on_date_range", Some(range))
            .await?;
        Ok(into_events(records))
    }

    async fn habits_on_date(&self, date: NaiveDate) -> ClientResult<Vec<DayHabitStatus>> {
        self.get(&format!("/habits_on_date/{}", date.format("%Y-%m-%d"))).await
    }

    async fn update_habit_status(&self, update: &StatusUpdate) -> ClientResult<MessageResponse> {
        self.acknowledge(Method::POST, "/update_habit_status", Some(update)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_records_become_events() {
        let records: Vec<RangeRecord> = serde_json::from_str(
            r#"[{"name": "Read", "date": "2024-11-12", "is_completed": 1},
                {"name": "Run", "date": "2024-11-13T00:00:00", "is_completed": false},
                {"name": "Swim", "date": null, "is_completed": 0},
                {"name": "Yoga", "date": "soon", "is_completed": 1}]"#,
        )
        .unwrap();
        let events = into_events(records);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 11, 12).unwrap());
        assert!(events[0].completed);
        assert_eq!(events[1].habit_name, "Run");
        assert!(!events[1].completed);
    }

    #[test]
    fn test_status_update_wire_format() {
        let update = StatusUpdate {
            habit_id: 4,
            completion_date: NaiveDate::from_ymd_opt(2024, 11, 12).unwrap(),
            is_completed: true,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"habit_id": 4, "completion_date": "2024-11-12", "is_completed": true})
        );
    }
}
