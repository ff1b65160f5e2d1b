//! Calendar Controller
//!
//! Feeds the calendar widget with completion markers and drives the
//! day-detail modal (fetch day, render, explicit close).

use chrono::NaiveDate;

use super::{acknowledge, report, Mutation};
use crate::api::{CalendarApi, DateRange, StatusUpdate};
use crate::error::ClientResult;
use crate::models::{CompletionEvent, DayHabitStatus};
use crate::shell::Shell;

pub const EMPTY_DAY: &str = "No habits tracked for this date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColor {
    Completed,
    Pending,
}

impl EventColor {
    pub fn css(self) -> &'static str {
        match self {
            EventColor::Completed => "green",
            EventColor::Pending => "red",
        }
    }
}

/// Widget-independent day marker
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub date: NaiveDate,
    pub color: EventColor,
}

impl From<&CompletionEvent> for CalendarEvent {
    fn from(event: &CompletionEvent) -> Self {
        Self {
            title: event.habit_name.clone(),
            date: event.date,
            color: if event.completed {
                EventColor::Completed
            } else {
                EventColor::Pending
            },
        }
    }
}

/// Accepts `YYYY-MM-DD` with or without a time suffix, as widgets hand them out
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d").ok()
}

/// Day breakdown split into completed / not completed
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub completed: Vec<DayHabitStatus>,
    pub pending: Vec<DayHabitStatus>,
}

impl DayDetail {
    pub fn from_statuses(date: NaiveDate, statuses: Vec<DayHabitStatus>) -> Self {
        let (completed, pending) = statuses.into_iter().partition(|s| s.is_completed);
        Self { date, completed, pending }
    }

    /// e.g. `November 12, 2024`
    pub fn heading(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.pending.is_empty()
    }
}

/// Modal state; closing twice is harmless
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayModal {
    detail: Option<DayDetail>,
}

impl DayModal {
    pub fn open(&mut self, detail: DayDetail) {
        self.detail = Some(detail);
    }

    pub fn close(&mut self) {
        self.detail = None;
    }

    pub fn is_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn detail(&self) -> Option<&DayDetail> {
        self.detail.as_ref()
    }
}

pub struct CalendarController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    shell: &'a S,
}

impl<'a, A, S> CalendarController<'a, A, S>
where
    A: CalendarApi + ?Sized,
    S: Shell + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S) -> Self {
        Self { api, shell }
    }

    /// Event supplier for the widget's visible range
    pub async fn events(&self, range: DateRange) -> ClientResult<Vec<CalendarEvent>> {
        match self.api.completion_events(&range).await {
            Ok(events) => Ok(events.iter().map(CalendarEvent::from).collect()),
            Err(err) => {
                report(self.shell, "calendar", "Error loading calendar events.", &err);
                Err(err)
            }
        }
    }

    pub async fn open_day(&self, date: NaiveDate) -> Option<DayDetail> {
        match self.api.habits_on_date(date).await {
            Ok(statuses) => Some(DayDetail::from_statuses(date, statuses)),
            Err(err) => {
                report(self.shell, "calendar", "Error fetching habits for this date.", &err);
                None
            }
        }
    }

    /// The one day-level write path; re-fetches the day on success
    pub async fn set_day_status(&self, habit_id: u32, date: NaiveDate, completed: bool) -> Mutation<DayDetail> {
        let update = StatusUpdate {
            habit_id,
            completion_date: date,
            is_completed: completed,
        };
        match self.api.update_habit_status(&update).await {
            Ok(response) => acknowledge(self.shell, response.message, "Habit status updated."),
            Err(err) => {
                report(self.shell, "calendar", "Error updating habit status.", &err);
                return Mutation::Failed;
            }
        }
        Mutation::Applied(self.open_day(date).await)
    }
}
