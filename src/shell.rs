//! Host Shell
//!
//! What controllers may ask of the page: notices, blocking confirmation,
//! navigation and a small persisted flag store.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast-success",
            NoticeLevel::Info => "toast-info",
            NoticeLevel::Warning => "toast-warning",
            NoticeLevel::Error => "toast-error",
        }
    }
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self { level, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }
}

pub trait Shell {
    fn notify(&self, notice: Notice);

    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;

    fn navigate(&self, url: &str);
}

/// Boolean flags persisted on the client (localStorage in the browser)
pub trait FlagStore {
    fn read_flag(&self, key: &str) -> Option<bool>;

    fn write_flag(&self, key: &str, value: bool);
}
