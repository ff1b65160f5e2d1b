//! Reminders
//!
//! Create with a habit, an `HH:MM` time and at least one weekday; toggle the
//! enabled flag on its own. Both re-fetch the list.

use chrono::{NaiveTime, Weekday};

use super::{acknowledge, report, Mutation};
use crate::api::{NewReminder, RemindersApi};
use crate::error::{ClientError, ClientResult};
use crate::models::Reminder;
use crate::shell::Shell;

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase English name, the form the backend stores
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Form state before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderDraft {
    pub habit_id: Option<u32>,
    pub time: String,
    pub days: Vec<Weekday>,
}

impl ReminderDraft {
    pub fn toggle_day(&mut self, day: Weekday) {
        if let Some(pos) = self.days.iter().position(|d| *d == day) {
            self.days.remove(pos);
        } else {
            self.days.push(day);
        }
    }

    pub fn validate(&self) -> ClientResult<NewReminder> {
        let habit_id = self
            .habit_id
            .ok_or_else(|| ClientError::validation("Please select a habit."))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| ClientError::validation("Please enter a valid time (HH:MM)."))?;
        if self.days.is_empty() {
            return Err(ClientError::validation("Please select at least one day."));
        }

        // week order, no duplicates
        let days = WEEKDAYS
            .iter()
            .filter(|d| self.days.contains(*d))
            .map(|d| weekday_name(*d).to_string())
            .collect();

        Ok(NewReminder {
            habit_id,
            time: time.format("%H:%M").to_string(),
            days,
        })
    }
}

pub struct RemindersController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    shell: &'a S,
}

impl<'a, A, S> RemindersController<'a, A, S>
where
    A: RemindersApi + ?Sized,
    S: Shell + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S) -> Self {
        Self { api, shell }
    }

    pub async fn load(&self) -> Option<Vec<Reminder>> {
        match self.api.list_reminders().await {
            Ok(reminders) => Some(reminders),
            Err(err) => {
                report(self.shell, "reminders", "Error loading reminders.", &err);
                None
            }
        }
    }

    pub async fn create(&self, draft: &ReminderDraft) -> Mutation<Vec<Reminder>> {
        let reminder = match draft.validate() {
            Ok(reminder) => reminder,
            Err(err) => {
                report(self.shell, "reminders", "Error setting reminder.", &err);
                return Mutation::Failed;
            }
        };

        match self.api.add_reminder(&reminder).await {
            Ok(response) => acknowledge(self.shell, response.message, "Reminder set successfully!"),
            Err(err) => {
                report(self.shell, "reminders", "Error setting reminder.", &err);
                return Mutation::Failed;
            }
        }
        Mutation::Applied(self.load().await)
    }

    pub async fn set_enabled(&self, reminder_id: u32, enabled: bool) -> Mutation<Vec<Reminder>> {
        if let Err(err) = self.api.set_reminder_enabled(reminder_id, enabled).await {
            report(self.shell, "reminders", "Error updating reminder.", &err);
            return Mutation::Failed;
        }
        log::debug!("[reminders] reminder {} enabled={}", reminder_id, enabled);
        Mutation::Applied(self.load().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::testing::{Call, FakeBackend, RecordingShell};
    use crate::shell::NoticeLevel;

    fn draft(habit_id: Option<u32>, time: &str, days: &[Weekday]) -> ReminderDraft {
        ReminderDraft {
            habit_id,
            time: time.to_string(),
            days: days.to_vec(),
        }
    }

    #[test]
    fn test_validation_rules() {
        let cases = [
            (draft(None, "08:00", &[Weekday::Mon]), "Please select a habit."),
            (draft(Some(1), "", &[Weekday::Mon]), "Please enter a valid time (HH:MM)."),
            (draft(Some(1), "25:00", &[Weekday::Mon]), "Please enter a valid time (HH:MM)."),
            (draft(Some(1), "8am", &[Weekday::Mon]), "Please enter a valid time (HH:MM)."),
            (draft(Some(1), "08:00", &[]), "Please select at least one day."),
        ];
        for (draft, message) in cases {
            assert_eq!(draft.validate(), Err(ClientError::validation(message)), "{:?}", draft);
        }
    }

    #[test]
    fn test_days_are_sent_in_week_order() {
        let reminder = draft(Some(3), "7:05", &[Weekday::Fri, Weekday::Mon]).validate().unwrap();
        assert_eq!(reminder.time, "07:05");
        assert_eq!(reminder.days, vec!["monday", "friday"]);
    }

    #[test]
    fn test_toggle_day_flips_membership() {
        let mut draft = ReminderDraft::default();
        draft.toggle_day(Weekday::Wed);
        draft.toggle_day(Weekday::Sun);
        draft.toggle_day(Weekday::Wed);
        assert_eq!(draft.days, vec![Weekday::Sun]);
    }

    #[tokio::test]
    async fn test_invalid_draft_sends_nothing() {
        let api = FakeBackend::new();
        let shell = RecordingShell::new();
        let reminders = RemindersController::new(&api, &shell);

        assert_eq!(reminders.create(&draft(Some(1), "08:00", &[])).await, Mutation::Failed);
        assert!(api.calls().is_empty());
        assert_eq!(shell.texts(NoticeLevel::Warning).len(), 1);
    }

    #[tokio::test]
    async fn test_create_then_toggle_refetch_each_time() {
        let api = FakeBackend::new();
        let shell = RecordingShell::new();
        let reminders = RemindersController::new(&api, &shell);

        let created = reminders
            .create(&draft(Some(2), "21:30", &[Weekday::Sat]))
            .await
            .reloaded()
            .unwrap();
        assert!(created[0].enabled);

        let toggled = reminders.set_enabled(created[0].id, false).await.reloaded().unwrap();
        assert!(!toggled[0].enabled);

        assert_eq!(
            api.calls(),
            vec![
                Call::AddReminder(NewReminder {
                    habit_id: 2,
                    time: "21:30".to_string(),
                    days: vec!["saturday".to_string()],
                }),
                Call::ListReminders,
                Call::SetReminderEnabled(1, false),
                Call::ListReminders,
            ]
        );
        assert_eq!(shell.texts(NoticeLevel::Success), vec!["Reminder set successfully!"]);
    }
}
