//! Habit Notes
//!
//! The modal's target habit is always passed in; nothing here remembers it.

use super::{acknowledge, report, Mutation};
use crate::api::NotesApi;
use crate::error::ClientError;
use crate::models::Note;
use crate::shell::Shell;

pub const EMPTY_NOTE: &str = "Note cannot be empty.";

pub struct NotesController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    shell: &'a S,
}

impl<'a, A, S> NotesController<'a, A, S>
where
    A: NotesApi + ?Sized,
    S: Shell + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S) -> Self {
        Self { api, shell }
    }

    /// Prior notes of `habit_id`, in backend order
    pub async fn open(&self, habit_id: u32) -> Option<Vec<Note>> {
        match self.api.list_notes(habit_id).await {
            Ok(notes) => Some(notes),
            Err(err) => {
                report(self.shell, "notes", "Error loading notes.", &err);
                None
            }
        }
    }

    pub async fn save(&self, habit_id: u32, text: &str) -> Mutation<Vec<Note>> {
        let text = text.trim();
        if text.is_empty() {
            report(self.shell, "notes", "Error adding note.", &ClientError::validation(EMPTY_NOTE));
            return Mutation::Failed;
        }

        match self.api.add_note(habit_id, text).await {
            Ok(_) => acknowledge(self.shell, None, "Note added successfully!"),
            Err(err) => {
                report(self.shell, "notes", "Error adding note.", &err);
                return Mutation::Failed;
            }
        }
        Mutation::Applied(self.open(habit_id).await)
    }
}
