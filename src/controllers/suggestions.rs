//! Habit Suggestions
//!
//! Adopting a suggestion is the add-habit flow with the suggestion's values.

use super::{report, HabitListController, Mutation};
use crate::api::{HabitsApi, SuggestionsApi};
use crate::models::{Habit, Suggestion};
use crate::shell::Shell;

pub const SUGGESTIONS_EMPTY: &str = "No suggestions available.";
pub const SUGGESTIONS_FAILED: &str = "Error loading suggestions.";

pub struct SuggestionsController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    shell: &'a S,
}

impl<'a, A, S> SuggestionsController<'a, A, S>
where
    A: SuggestionsApi + HabitsApi + ?Sized,
    S: Shell + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S) -> Self {
        Self { api, shell }
    }

    pub async fn load(&self) -> Option<Vec<Suggestion>> {
        match self.api.list_suggestions().await {
            Ok(suggestions) => Some(suggestions),
            Err(err) => {
                report(self.shell, "suggestions", SUGGESTIONS_FAILED, &err);
                None
            }
        }
    }

    /// Returns the reloaded habit list so the caller can publish it
    pub async fn adopt(&self, suggestion: &Suggestion) -> Mutation<Vec<Habit>> {
        log::info!("[suggestions] adopting {}", suggestion.name);
        HabitListController::new(self.api, self.shell)
            .add(&suggestion.name, suggestion.frequency.as_str())
            .await
    }
}
