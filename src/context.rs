//! Application Context
//!
//! Page-wide state shared by every island via the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpBackend;
use crate::browser::{BrowserShell, LocalStorageFlags};
use crate::config::ClientConfig;
use crate::models::Habit;
use crate::shell::{FlagStore, Notice};

/// Toast on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<ClientConfig>,
    backend: StoredValue<HttpBackend, LocalStorage>,
    /// Toast queue rendered by the host on `<body>`
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u64>,
    /// Latest habit list from the backend (`None` until the first load).
    /// Publishing a new list here is how islands refresh each other.
    pub habits: RwSignal<Option<Vec<Habit>>>,
    achievements_reload: RwSignal<u32>,
    /// Habit whose notes modal is open
    pub note_target: RwSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let backend = HttpBackend::new(&config);
        Self {
            config: StoredValue::new(config),
            backend: StoredValue::new_local(backend),
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(0),
            habits: RwSignal::new(None),
            achievements_reload: RwSignal::new(0),
            note_target: RwSignal::new(None),
        }
    }

    pub fn backend(&self) -> HttpBackend {
        self.backend.get_value()
    }

    pub fn shell(&self) -> BrowserShell {
        BrowserShell::new(*self)
    }

    pub fn flags(&self) -> LocalStorageFlags {
        LocalStorageFlags
    }

    pub fn restore_dark_mode(&self) -> bool {
        let key = self.config.with_value(|c| c.dark_mode_key.clone());
        self.flags().read_flag(&key).unwrap_or(false)
    }

    /// Queue a toast and return its id
    pub fn push_toast(&self, notice: Notice) -> u64 {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));
        id
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Tracked read for effects that re-fetch achievements
    pub fn achievements_version(&self) -> u32 {
        self.achievements_reload.get()
    }

    pub fn reload_achievements(&self) {
        self.achievements_reload.update(|v| *v += 1);
    }
}
