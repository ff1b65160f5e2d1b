//! Browser Shell
//!
//! `Shell` and `FlagStore` over the real page: toasts in a signal,
//! `window.confirm`, `location.href` and localStorage.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::shell::{FlagStore, Notice, Shell};

#[derive(Clone, Copy)]
pub struct BrowserShell {
    ctx: AppContext,
}

impl BrowserShell {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }
}

impl Shell for BrowserShell {
    fn notify(&self, notice: Notice) {
        let ctx = self.ctx;
        let id = ctx.push_toast(notice);
        let timeout_ms = ctx.config.with_value(|c| c.notice_timeout_ms);
        Timeout::new(timeout_ms, move || ctx.dismiss_toast(id)).forget();
    }

    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }

    fn navigate(&self, url: &str) {
        if let Err(err) = window().location().set_href(url) {
            log::error!("[shell] navigation to {} failed: {:?}", url, err);
        }
    }
}

/// Flags stored as `"true"` / `"false"` strings
#[derive(Clone, Copy, Default)]
pub struct LocalStorageFlags;

impl LocalStorageFlags {
    fn storage() -> Option<web_sys::Storage> {
        window().local_storage().ok().flatten()
    }
}

impl FlagStore for LocalStorageFlags {
    fn read_flag(&self, key: &str) -> Option<bool> {
        let raw = Self::storage()?.get_item(key).ok().flatten()?;
        raw.parse().ok()
    }

    fn write_flag(&self, key: &str, value: bool) {
        let Some(storage) = Self::storage() else {
            log::warn!("[shell] localStorage unavailable, {} not saved", key);
            return;
        };
        if let Err(err) = storage.set_item(key, if value { "true" } else { "false" }) {
            log::warn!("[shell] could not save {}: {:?}", key, err);
        }
    }
}

pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().get_element_by_id(id)
}

/// Text of a `<script type="application/json">` block
pub fn embedded_json(id: &str) -> Option<String> {
    element_by_id(id)
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty())
}

pub fn origin() -> String {
    window().location().origin().unwrap_or_default()
}

pub fn apply_dark_mode(enabled: bool) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(err) = body.class_list().toggle_with_force("dark-mode", enabled) {
        log::warn!("[shell] could not toggle dark-mode: {:?}", err);
    }
}
