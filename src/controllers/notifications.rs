//! Notifications Panel

use super::report;
use crate::api::NotificationsApi;
use crate::models::Notification;
use crate::shell::Shell;

pub const NOTIFICATIONS_EMPTY: &str = "No new notifications.";
pub const NOTIFICATIONS_FAILED: &str = "Error loading notifications.";

pub struct NotificationsController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    shell: &'a S,
}

impl<'a, A, S> NotificationsController<'a, A, S>
where
    A: NotificationsApi + ?Sized,
    S: Shell + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S) -> Self {
        Self { api, shell }
    }

    /// `None` on failure: the panel shows the failure text on first load,
    /// otherwise keeps the previous list
    pub async fn load(&self) -> Option<Vec<Notification>> {
        match self.api.list_notifications().await {
            Ok(notifications) => Some(notifications),
            Err(err) => {
                report(self.shell, "notifications", NOTIFICATIONS_FAILED, &err);
                None
            }
        }
    }
}
