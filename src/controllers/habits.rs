//! Habit List Controller
//!
//! Add / toggle / remove flows for the habit list. The streak shown on a
//! row only ever comes from a backend payload.

use std::collections::HashMap;

use super::{acknowledge, report, Mutation};
use crate::api::{HabitsApi, NewHabit};
use crate::error::{ClientError, ClientResult};
use crate::models::{Achievement, Habit};
use crate::shell::{Notice, Shell};

pub const MISSING_HABIT_FIELDS: &str = "Both habit name and frequency are required.";
pub const CONFIRM_REMOVE: &str = "Are you sure you want to remove this habit?";

/// Client-side, blocking check run before any request
pub fn validate_new_habit(name: &str, frequency: &str) -> ClientResult<NewHabit> {
    let name = name.trim();
    let frequency = frequency.trim();
    if name.is_empty() || frequency.is_empty() {
        return Err(ClientError::validation(MISSING_HABIT_FIELDS));
    }
    Ok(NewHabit {
        habit_name: name.to_string(),
        habit_frequency: frequency.to_string(),
    })
}

/// What a successful toggle changes: one row, never the whole list
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionUpdate {
    pub habit_id: u32,
    pub completed: bool,
    /// `None` when the backend answered with a bare message
    pub streak: Option<u32>,
    pub unlocked: Vec<Achievement>,
}

impl CompletionUpdate {
    pub fn reload_achievements(&self) -> bool {
        !self.unlocked.is_empty()
    }
}

/// Checkbox state once a toggle settles; a rejected toggle flips back
pub fn settled_completion(requested: bool, update: Option<&CompletionUpdate>) -> bool {
    update.map_or(!requested, |u| u.completed)
}

/// Per-row streak display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreakBoard(HashMap<u32, u32>);

impl StreakBoard {
    pub fn from_habits(habits: &[Habit]) -> Self {
        Self(habits.iter().map(|h| (h.id, h.streak)).collect())
    }

    pub fn get(&self, habit_id: u32) -> Option<u32> {
        self.0.get(&habit_id).copied()
    }

    /// Returns whether the row's display changed
    pub fn apply(&mut self, update: &CompletionUpdate) -> bool {
        match update.streak {
            Some(streak) => self.0.insert(update.habit_id, streak) != Some(streak),
            None => false,
        }
    }
}

pub struct HabitListController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    shell: &'a S,
}

impl<'a, A, S> HabitListController<'a, A, S>
where
    A: HabitsApi + ?Sized,
    S: Shell + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S) -> Self {
        Self { api, shell }
    }

    /// Full collection; `None` keeps whatever is rendered now
    pub async fn load(&self) -> Option<Vec<Habit>> {
        match self.api.list_habits().await {
            Ok(habits) => {
                log::debug!("[habits] loaded {} habits", habits.len());
                Some(habits)
            }
            Err(err) => {
                report(self.shell, "habits", "Error loading habits.", &err);
                None
            }
        }
    }

    pub async fn add(&self, name: &str, frequency: &str) -> Mutation<Vec<Habit>> {
        let habit = match validate_new_habit(name, frequency) {
            Ok(habit) => habit,
            Err(err) => {
                report(self.shell, "habits", "Error adding habit.", &err);
                return Mutation::Failed;
            }
        };

        match self.api.add_habit(&habit).await {
            Ok(response) => acknowledge(self.shell, response.message, "Habit added successfully!"),
            Err(err) => {
                report(self.shell, "habits", "Error adding habit.", &err);
                return Mutation::Failed;
            }
        }

        Mutation::Applied(self.load().await)
    }

    pub async fn toggle_completion(&self, habit_id: u32, completed: bool) -> Option<CompletionUpdate> {
        let response = match self.api.update_completion(habit_id, completed).await {
            Ok(response) => response,
            Err(err) => {
                report(self.shell, "habits", "Error updating habit completion.", &err);
                return None;
            }
        };

        if response.streak.is_none() {
            if let Some(message) = response.message.filter(|m| !m.trim().is_empty()) {
                self.shell.notify(Notice::info(message));
            }
        }
        for achievement in &response.new_achievements {
            self.shell
                .notify(Notice::success(format!("Achievement Unlocked: {}", achievement.name)));
        }

        Some(CompletionUpdate {
            habit_id,
            completed,
            streak: response.streak,
            unlocked: response.new_achievements,
        })
    }

    pub async fn remove(&self, habit_id: u32) -> Mutation<Vec<Habit>> {
        if !self.shell.confirm(CONFIRM_REMOVE) {
            log::debug!("[habits] removal of {} cancelled", habit_id);
            return Mutation::Failed;
        }

        match self.api.remove_habit(habit_id).await {
            Ok(response) => acknowledge(self.shell, response.message, "Habit removed successfully!"),
            Err(err) => {
                report(self.shell, "habits", "Error removing habit.", &err);
                return Mutation::Failed;
            }
        }

        Mutation::Applied(self.load().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::testing::{habit, Call, FakeBackend, RecordingShell};
    use crate::models::{CompletionResponse, HabitFrequency};
    use crate::shell::NoticeLevel;

    #[tokio::test]
    async fn test_blank_fields_never_hit_the_backend() {
        let api = FakeBackend::new();
        let shell = RecordingShell::new();
        let list = HabitListController::new(&api, &shell);

        for (name, frequency) in [("", "daily"), ("Read", ""), ("   ", "weekly"), ("", "")] {
            assert_eq!(list.add(name, frequency).await, Mutation::Failed);
        }

        assert!(api.calls().is_empty());
        assert_eq!(shell.texts(NoticeLevel::Warning), vec![MISSING_HABIT_FIELDS; 4]);
    }

    #[tokio::test]
    async fn test_add_posts_pair_and_reloads() {
        let api = FakeBackend::new();
        let shell = RecordingShell::new();
        let list = HabitListController::new(&api, &shell);

        let outcome = list.add("Read", "daily").await;

        assert_eq!(
            api.calls(),
            vec![
                Call::AddHabit(NewHabit {
                    habit_name: "Read".to_string(),
                    habit_frequency: "daily".to_string(),
                }),
                Call::ListHabits,
            ]
        );
        let habits = outcome.reloaded().expect("list reloaded");
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].summary(), "Read - daily - Streak: 0");
        assert_eq!(shell.texts(NoticeLevel::Success), vec!["Habit added"]);
    }

    #[tokio::test]
    async fn test_add_applied_even_when_reload_fails() {
        let api = FakeBackend::new();
        api.fail_reads.set(true);
        let shell = RecordingShell::new();
        let list = HabitListController::new(&api, &shell);

        assert_eq!(list.add("Read", "daily").await, Mutation::Applied(None));
        assert_eq!(shell.texts(NoticeLevel::Error), vec!["Error loading habits."]);
    }

    #[tokio::test]
    async fn test_toggle_sends_one_put_and_reports_unlocks() {
        let api = FakeBackend::with_habits(vec![habit(7, "Read", HabitFrequency::Daily, 2)]);
        *api.completion.borrow_mut() = CompletionResponse {
            message: None,
            streak: Some(3),
            new_achievements: vec![Achievement {
                name: "3-Day Streak".to_string(),
                description: String::new(),
                icon: String::new(),
                earned_date: String::new(),
            }],
        };
        let shell = RecordingShell::new();
        let list = HabitListController::new(&api, &shell);

        let update = list.toggle_completion(7, true).await.expect("toggle applied");

        assert!(settled_completion(true, Some(&update)));
        assert_eq!(api.calls(), vec![Call::UpdateCompletion(7, true)]);
        assert_eq!(update.streak, Some(3));
        assert!(update.reload_achievements());
        assert_eq!(shell.texts(NoticeLevel::Success), vec!["Achievement Unlocked: 3-Day Streak"]);
    }

    #[tokio::test]
    async fn test_legacy_toggle_response_leaves_streak_alone() {
        let api = FakeBackend::with_habits(vec![habit(7, "Read", HabitFrequency::Daily, 2)]);
        *api.completion.borrow_mut() = CompletionResponse {
            message: Some("Habit completion status updated successfully!".to_string()),
            ..CompletionResponse::default()
        };
        let shell = RecordingShell::new();
        let list = HabitListController::new(&api, &shell);
        let mut board = StreakBoard::from_habits(&api.habits.borrow());

        let update = list.toggle_completion(7, false).await.unwrap();

        assert!(!board.apply(&update));
        assert_eq!(board.get(7), Some(2));
        assert!(!update.reload_achievements());
        assert_eq!(
            shell.texts(NoticeLevel::Info),
            vec!["Habit completion status updated successfully!"]
        );
    }

    #[tokio::test]
    async fn test_toggle_failure_is_reported_once() {
        let api = FakeBackend::new();
        api.fail_with(ClientError::Status {
            status: 500,
            message: "boom".to_string(),
        });
        let shell = RecordingShell::new();
        let list = HabitListController::new(&api, &shell);

        let outcome = list.toggle_completion(3, true).await;

        assert!(outcome.is_none());
        assert!(!settled_completion(true, outcome.as_ref()));
        assert_eq!(api.calls(), vec![Call::UpdateCompletion(3, true)]);
        assert_eq!(shell.texts(NoticeLevel::Error), vec!["Error updating habit completion."]);
    }

    #[test]
    fn test_streak_board_updates_single_row() {
        let habits = vec![
            habit(1, "Read", HabitFrequency::Daily, 4),
            habit(2, "Run", HabitFrequency::Weekly, 1),
        ];
        let mut board = StreakBoard::from_habits(&habits);
        let update = CompletionUpdate {
            habit_id: 2,
            completed: true,
            streak: Some(2),
            unlocked: Vec::new(),
        };

        assert!(board.apply(&update));
        assert!(!board.apply(&update));
        assert_eq!(board.get(1), Some(4));
        assert_eq!(board.get(2), Some(2));
    }

    #[tokio::test]
    async fn test_declined_removal_sends_nothing() {
        let api = FakeBackend::with_habits(vec![habit(5, "Run", HabitFrequency::Daily, 0)]);
        let shell = RecordingShell::answering(false);
        let list = HabitListController::new(&api, &shell);

        assert_eq!(list.remove(5).await, Mutation::Failed);
        assert!(api.calls().is_empty());
        assert_eq!(shell.prompts.borrow().as_slice(), [CONFIRM_REMOVE.to_string()]);
    }

    #[tokio::test]
    async fn test_confirmed_removal_deletes_and_reloads() {
        let api = FakeBackend::with_habits(vec![
            habit(5, "Run", HabitFrequency::Daily, 0),
            habit(6, "Read", HabitFrequency::Daily, 0),
        ]);
        let shell = RecordingShell::new();
        let list = HabitListController::new(&api, &shell);

        let habits = list.remove(5).await.reloaded().unwrap();

        assert_eq!(api.calls(), vec![Call::RemoveHabit(5), Call::ListHabits]);
        assert_eq!(habits.iter().map(|h| h.id).collect::<Vec<_>>(), vec![6]);
        assert_eq!(shell.texts(NoticeLevel::Success), vec!["Habit removed successfully!"]);
    }
}
