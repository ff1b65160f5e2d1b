//! Preferences Panel
//!
//! Dark mode lives in two places: the local flag store (applied instantly on
//! load) and the backend (authoritative once it answers). Export is a plain
//! navigation to the backend's download endpoint.

use chrono::NaiveDate;

use super::{parse_date_field, report};
use crate::api::{PreferencesApi, PreferencesUpdate};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::Preferences;
use crate::shell::{FlagStore, Notice, Shell};

/// Download URL for a validated range
pub fn export_url(base_url: &str, start: &str, end: &str, max_days: i64) -> ClientResult<String> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return Err(ClientError::validation("Please select both start and end dates."));
    }
    let start: NaiveDate = parse_date_field(start, "start date")?;
    let end: NaiveDate = parse_date_field(end, "end date")?;
    if end < start {
        return Err(ClientError::validation("End date cannot be before start date."));
    }
    if (end - start).num_days() > max_days {
        return Err(ClientError::validation(format!("Date range cannot exceed {} days.", max_days)));
    }
    Ok(format!(
        "{}/export_stats?start_date={}&end_date={}",
        base_url.trim_end_matches('/'),
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    ))
}

pub struct PreferencesController<'a, A: ?Sized, S: ?Sized, F: ?Sized> {
    api: &'a A,
    shell: &'a S,
    flags: &'a F,
    config: &'a ClientConfig,
}

impl<'a, A, S, F> PreferencesController<'a, A, S, F>
where
    A: PreferencesApi + ?Sized,
    S: Shell + ?Sized,
    F: FlagStore + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S, flags: &'a F, config: &'a ClientConfig) -> Self {
        Self {
            api,
            shell,
            flags,
            config,
        }
    }

    /// Locally remembered dark mode, available before any request
    pub fn restore_dark_mode(&self) -> bool {
        self.flags.read_flag(&self.config.dark_mode_key).unwrap_or(false)
    }

    /// Backend values; dark mode is mirrored to the flag store
    pub async fn load(&self) -> Option<Preferences> {
        match self.api.get_preferences().await {
            Ok(preferences) => {
                self.flags.write_flag(&self.config.dark_mode_key, preferences.dark_mode);
                Some(preferences)
            }
            Err(err) => {
                report(self.shell, "preferences", "Error loading preferences.", &err);
                None
            }
        }
    }

    /// The local flag flips first so the page can re-theme without waiting
    pub async fn set_dark_mode(&self, enabled: bool) -> bool {
        self.flags.write_flag(&self.config.dark_mode_key, enabled);
        self.update(PreferencesUpdate {
            dark_mode: Some(enabled),
            ..PreferencesUpdate::default()
        })
        .await
    }

    pub async fn set_email_notifications(&self, enabled: bool) -> bool {
        self.update(PreferencesUpdate {
            email_notifications: Some(enabled),
            ..PreferencesUpdate::default()
        })
        .await
    }

    async fn update(&self, update: PreferencesUpdate) -> bool {
        match self.api.update_preferences(&update).await {
            Ok(_) => {
                self.shell.notify(Notice::success("Preferences updated."));
                true
            }
            Err(err) => {
                report(self.shell, "preferences", "Error updating preferences.", &err);
                false
            }
        }
    }

    /// Navigates on a valid range; returns whether it did
    pub fn export(&self, start: &str, end: &str) -> bool {
        match export_url(&self.config.base_url, start, end, self.config.export_max_days) {
            Ok(url) => {
                log::info!("[preferences] exporting {} .. {}", start, end);
                self.shell.navigate(&url);
                true
            }
            Err(err) => {
                report(self.shell, "preferences", "Error exporting data.", &err);
                false
            }
        }
    }
}
