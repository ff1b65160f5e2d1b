//! Achievements Grid

use super::report;
use crate::api::AchievementsApi;
use crate::models::Achievement;
use crate::shell::Shell;

pub struct AchievementsController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    shell: &'a S,
}

impl<'a, A, S> AchievementsController<'a, A, S>
where
    A: AchievementsApi + ?Sized,
    S: Shell + ?Sized,
{
    pub fn new(api: &'a A, shell: &'a S) -> Self {
        Self { api, shell }
    }

    pub async fn load(&self) -> Option<Vec<Achievement>> {
        match self.api.list_achievements().await {
            Ok(achievements) => Some(achievements),
            Err(err) => {
                report(self.shell, "achievements", "Error loading achievements.", &err);
                None
            }
        }
    }
}
