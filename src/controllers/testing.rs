//! In-memory doubles for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{
    AchievementsApi, CalendarApi, ChallengesApi, DateRange, HabitsApi, NewChallenge, NewHabit,
    NewReminder, NotesApi, NotificationsApi, PreferencesApi, PreferencesUpdate, RemindersApi,
    StatusUpdate, SuggestionsApi,
};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    Achievement, Challenge, CompletionEvent, CompletionResponse, DayHabitStatus, Habit,
    HabitFrequency, MessageResponse, Note, Notification, Preferences, Reminder, Suggestion,
};
use crate::shell::{FlagStore, Notice, NoticeLevel, Shell};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListHabits,
    AddHabit(NewHabit),
    UpdateCompletion(u32, bool),
    RemoveHabit(u32),
    CompletionEvents(DateRange),
    HabitsOnDate(NaiveDate),
    UpdateStatus(StatusUpdate),
    ListNotes(u32),
    AddNote(u32, String),
    ListNotifications,
    ListSuggestions,
    ListAchievements,
    ListReminders,
    AddReminder(NewReminder),
    SetReminderEnabled(u32, bool),
    ListChallenges,
    AddChallenge(NewChallenge),
    JoinChallenge(u32),
    GetPreferences,
    UpdatePreferences(PreferencesUpdate),
}

/// Scripted backend that records every call
#[derive(Default)]
pub struct FakeBackend {
    pub calls: RefCell<Vec<Call>>,
    pub habits: RefCell<Vec<Habit>>,
    pub completion: RefCell<CompletionResponse>,
    pub events: RefCell<Vec<CompletionEvent>>,
    pub day: RefCell<Vec<DayHabitStatus>>,
    pub notes: RefCell<Vec<Note>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub suggestions: RefCell<Vec<Suggestion>>,
    pub achievements: RefCell<Vec<Achievement>>,
    pub reminders: RefCell<Vec<Reminder>>,
    pub challenges: RefCell<Vec<Challenge>>,
    pub preferences: Cell<Preferences>,
    /// Every call fails with this error while set
    pub failure: RefCell<Option<ClientError>>,
    /// Only reads (list/get) fail while set
    pub fail_reads: Cell<bool>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_habits(habits: Vec<Habit>) -> Self {
        let backend = Self::default();
        *backend.habits.borrow_mut() = habits;
        backend
    }

    pub fn fail_with(&self, err: ClientError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        let is_read = matches!(
            call,
            Call::ListHabits
                | Call::CompletionEvents(_)
                | Call::HabitsOnDate(_)
                | Call::ListNotes(_)
                | Call::ListNotifications
                | Call::ListSuggestions
                | Call::ListAchievements
                | Call::ListReminders
                | Call::ListChallenges
                | Call::GetPreferences
        );
        self.calls.borrow_mut().push(call);
        if let Some(err) = self.failure.borrow().clone() {
            return Err(err);
        }
        if is_read && self.fail_reads.get() {
            return Err(ClientError::Transport("connection reset".to_string()));
        }
        Ok(())
    }

    fn ok(message: &str) -> MessageResponse {
        MessageResponse {
            message: Some(message.to_string()),
        }
    }
}

pub fn habit(id: u32, name: &str, frequency: HabitFrequency, streak: u32) -> Habit {
    Habit {
        id,
        name: name.to_string(),
        frequency,
        completed_today: false,
        streak,
    }
}

#[async_trait(?Send)]
impl HabitsApi for FakeBackend {
    async fn list_habits(&self) -> ClientResult<Vec<Habit>> {
        self.record(Call::ListHabits)?;
        Ok(self.habits.borrow().clone())
    }

    async fn add_habit(&self, new: &NewHabit) -> ClientResult<MessageResponse> {
        self.record(Call::AddHabit(new.clone()))?;
        let mut habits = self.habits.borrow_mut();
        let id = habits.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        habits.push(habit(id, &new.habit_name, HabitFrequency::parse(&new.habit_frequency), 0));
        Ok(Self::ok("Habit added"))
    }

    async fn update_completion(&self, habit_id: u32, is_completed: bool) -> ClientResult<CompletionResponse> {
        self.record(Call::UpdateCompletion(habit_id, is_completed))?;
        Ok(self.completion.borrow().clone())
    }

    async fn remove_habit(&self, habit_id: u32) -> ClientResult<MessageResponse> {
        self.record(Call::RemoveHabit(habit_id))?;
        self.habits.borrow_mut().retain(|h| h.id != habit_id);
        Ok(Self::ok("Habit removed successfully!"))
    }
}

#[async_trait(?Send)]
impl CalendarApi for FakeBackend {
    async fn completion_events(&self, range: &DateRange) -> ClientResult<Vec<CompletionEvent>> {
        self.record(Call::CompletionEvents(*range))?;
        Ok(self.events.borrow().clone())
    }

    async fn habits_on_date(&self, date: NaiveDate) -> ClientResult<Vec<DayHabitStatus>> {
        self.record(Call::HabitsOnDate(date))?;
        Ok(self.day.borrow().clone())
    }

    async fn update_habit_status(&self, update: &StatusUpdate) -> ClientResult<MessageResponse> {
        self.record(Call::UpdateStatus(update.clone()))?;
        for row in self.day.borrow_mut().iter_mut() {
            if row.habit_id == Some(update.habit_id) {
                row.is_completed = update.is_completed;
            }
        }
        Ok(Self::ok("Habit status updated successfully!"))
    }
}

#[async_trait(?Send)]
impl NotesApi for FakeBackend {
    async fn list_notes(&self, habit_id: u32) -> ClientResult<Vec<Note>> {
        self.record(Call::ListNotes(habit_id))?;
        Ok(self.notes.borrow().clone())
    }

    async fn add_note(&self, habit_id: u32, note: &str) -> ClientResult<MessageResponse> {
        self.record(Call::AddNote(habit_id, note.to_string()))?;
        self.notes.borrow_mut().push(Note {
            body: note.to_string(),
            date: "2024-11-12".to_string(),
        });
        Ok(MessageResponse::default())
    }
}

#[async_trait(?Send)]
impl NotificationsApi for FakeBackend {
    async fn list_notifications(&self) -> ClientResult<Vec<Notification>> {
        self.record(Call::ListNotifications)?;
        Ok(self.notifications.borrow().clone())
    }
}

#[async_trait(?Send)]
impl SuggestionsApi for FakeBackend {
    async fn list_suggestions(&self) -> ClientResult<Vec<Suggestion>> {
        self.record(Call::ListSuggestions)?;
        Ok(self.suggestions.borrow().clone())
    }
}

#[async_trait(?Send)]
impl AchievementsApi for FakeBackend {
    async fn list_achievements(&self) -> ClientResult<Vec<Achievement>> {
        self.record(Call::ListAchievements)?;
        Ok(self.achievements.borrow().clone())
    }
}

#[async_trait(?Send)]
impl RemindersApi for FakeBackend {
    async fn list_reminders(&self) -> ClientResult<Vec<Reminder>> {
        self.record(Call::ListReminders)?;
        Ok(self.reminders.borrow().clone())
    }

    async fn add_reminder(&self, reminder: &NewReminder) -> ClientResult<MessageResponse> {
        self.record(Call::AddReminder(reminder.clone()))?;
        let mut reminders = self.reminders.borrow_mut();
        let id = reminders.len() as u32 + 1;
        reminders.push(Reminder {
            id,
            habit_name: format!("habit {}", reminder.habit_id),
            time: reminder.time.clone(),
            days: reminder.days.clone(),
            enabled: true,
        });
        Ok(MessageResponse::default())
    }

    async fn set_reminder_enabled(&self, reminder_id: u32, enabled: bool) -> ClientResult<MessageResponse> {
        self.record(Call::SetReminderEnabled(reminder_id, enabled))?;
        for reminder in self.reminders.borrow_mut().iter_mut() {
            if reminder.id == reminder_id {
                reminder.enabled = enabled;
            }
        }
        Ok(MessageResponse::default())
    }
}

#[async_trait(?Send)]
impl ChallengesApi for FakeBackend {
    async fn list_challenges(&self) -> ClientResult<Vec<Challenge>> {
        self.record(Call::ListChallenges)?;
        Ok(self.challenges.borrow().clone())
    }

    async fn add_challenge(&self, challenge: &NewChallenge) -> ClientResult<MessageResponse> {
        self.record(Call::AddChallenge(challenge.clone()))?;
        let mut challenges = self.challenges.borrow_mut();
        let id = challenges.len() as u32 + 1;
        challenges.push(Challenge {
            id,
            name: challenge.name.clone(),
            description: challenge.description.clone(),
            start_date: challenge.start_date.to_string(),
            end_date: challenge.end_date.to_string(),
            participant_count: 1,
            is_participating: true,
            completion_rate: None,
        });
        Ok(MessageResponse::default())
    }

    async fn join_challenge(&self, challenge_id: u32) -> ClientResult<MessageResponse> {
        self.record(Call::JoinChallenge(challenge_id))?;
        for challenge in self.challenges.borrow_mut().iter_mut() {
            if challenge.id == challenge_id && !challenge.is_participating {
                challenge.is_participating = true;
                challenge.participant_count += 1;
            }
        }
        Ok(MessageResponse::default())
    }
}

#[async_trait(?Send)]
impl PreferencesApi for FakeBackend {
    async fn get_preferences(&self) -> ClientResult<Preferences> {
        self.record(Call::GetPreferences)?;
        Ok(self.preferences.get())
    }

    async fn update_preferences(&self, update: &PreferencesUpdate) -> ClientResult<MessageResponse> {
        self.record(Call::UpdatePreferences(*update))?;
        let mut prefs = self.preferences.get();
        if let Some(dark_mode) = update.dark_mode {
            prefs.dark_mode = dark_mode;
        }
        if let Some(email) = update.email_notifications {
            prefs.email_notifications = email;
        }
        self.preferences.set(prefs);
        Ok(MessageResponse::default())
    }
}

/// Shell that records notices, prompts and navigations
pub struct RecordingShell {
    pub notices: RefCell<Vec<Notice>>,
    pub prompts: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<String>>,
    pub confirm_answer: Cell<bool>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::answering(true)
    }

    pub fn answering(confirm_answer: bool) -> Self {
        Self {
            notices: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(confirm_answer),
        }
    }

    pub fn texts(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.text.clone())
            .collect()
    }
}

impl Shell for RecordingShell {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}

#[derive(Default)]
pub struct MemoryFlags {
    pub flags: RefCell<HashMap<String, bool>>,
}

impl FlagStore for MemoryFlags {
    fn read_flag(&self, key: &str) -> Option<bool> {
        self.flags.borrow().get(key).copied()
    }

    fn write_flag(&self, key: &str, value: bool) {
        self.flags.borrow_mut().insert(key.to_string(), value);
    }
}
