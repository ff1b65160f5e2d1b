//! Widget Controllers
//!
//! One controller per page widget. A controller validates input, issues the
//! backend calls in order, emits notices and hands back what to render.
//! It never touches the DOM; components own the signals.

mod achievements;
mod analytics;
mod calendar;
mod challenges;
mod habits;
mod notes;
mod notifications;
mod preferences;
mod reminders;
mod suggestions;

#[cfg(test)]
pub(crate) mod testing;

use chrono::NaiveDate;

use crate::error::{ClientError, ClientResult};
use crate::shell::{Notice, Shell};

pub use achievements::AchievementsController;
pub use analytics::{
    completion_tick_label, parse_bucket_series, plan_charts, AxisConfig, Bucket, BucketSeries,
    ChartConfig, ChartKind, ChartPlan, ChartSeries, DatasetConfig, FillGradient, SeriesData,
};
pub use calendar::{parse_day, CalendarController, CalendarEvent, DayDetail, DayModal, EventColor, EMPTY_DAY};
pub use challenges::{ChallengeDraft, ChallengesController};
pub use habits::{
    settled_completion, validate_new_habit, CompletionUpdate, HabitListController, StreakBoard,
    CONFIRM_REMOVE, MISSING_HABIT_FIELDS,
};
pub use notes::{NotesController, EMPTY_NOTE};
pub use notifications::{NotificationsController, NOTIFICATIONS_EMPTY, NOTIFICATIONS_FAILED};
pub use preferences::{export_url, PreferencesController};
pub use reminders::{weekday_name, ReminderDraft, RemindersController, WEEKDAYS};
pub use suggestions::{SuggestionsController, SUGGESTIONS_EMPTY, SUGGESTIONS_FAILED};

/// Outcome of a write followed by a targeted re-fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    /// Rejected locally or by the backend; nothing changed
    Failed,
    /// Applied; `None` when the follow-up reload failed and the old render stays
    Applied(Option<T>),
}

impl<T> Mutation<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied(_))
    }

    pub fn reloaded(self) -> Option<T> {
        match self {
            Mutation::Applied(reloaded) => reloaded,
            Mutation::Failed => None,
        }
    }
}

/// Surface a failure: validation as a warning, everything else logged + error notice
pub(crate) fn report<S: Shell + ?Sized>(shell: &S, scope: &str, failure_text: &str, err: &ClientError) {
    match err {
        ClientError::Validation(message) => {
            log::debug!("[{}] rejected locally: {}", scope, message);
            shell.notify(Notice::warning(message.clone()));
        }
        other => {
            log::error!("[{}] {} ({})", scope, failure_text, other);
            shell.notify(Notice::error(failure_text));
        }
    }
}

/// Success notice preferring the backend's own wording
pub(crate) fn acknowledge<S: Shell + ?Sized>(shell: &S, message: Option<String>, fallback: &str) {
    let text = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    shell.notify(Notice::success(text));
}

/// `YYYY-MM-DD` as produced by `<input type="date">`
pub(crate) fn parse_date_field(raw: &str, field: &str) -> ClientResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ClientError::validation(format!("Please select a {}.", field)));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ClientError::validation(format!("The {} must use the YYYY-MM-DD format.", field)))
}
