//! Habit Note Endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::HttpBackend;
use crate::error::ClientResult;
use crate::models::{MessageResponse, Note};

#[derive(Serialize)]
struct NoteArgs<'a> {
    note: &'a str,
}

#[async_trait(?Send)]
pub trait NotesApi {
    async fn list_notes(&self, habit_id: u32) -> ClientResult<Vec<Note>>;

    async fn add_note(&self, habit_id: u32, note: &str) -> ClientResult<MessageResponse>;
}

#[async_trait(?Send)]
impl NotesApi for HttpBackend {
    async fn list_notes(&self, habit_id: u32) -> ClientResult<Vec<Note>> {
        self.get(&format!("/habit/{}/notes", habit_id)).await
    }

    async fn add_note(&self, habit_id: u32, note: &str) -> ClientResult<MessageResponse> {
        let path = format!("/habit/{}/notes", habit_id);
        self.acknowledge(Method::POST, &path, Some(&NoteArgs { note })).await
    }
}
