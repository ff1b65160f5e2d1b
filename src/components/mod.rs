//! UI Components
//!
//! One island per page widget, plus the toast host.

mod achievements_grid;
mod analytics_charts;
mod calendar_view;
mod challenges_board;
mod habit_list;
mod habit_select;
mod notes_modal;
mod notifications_panel;
mod preferences_panel;
mod reminders_panel;
mod suggestions_list;
mod toast_host;

pub use achievements_grid::AchievementsGrid;
pub use analytics_charts::AnalyticsCharts;
pub use calendar_view::CalendarView;
pub use challenges_board::ChallengesBoard;
pub use habit_list::HabitList;
pub use habit_select::HabitSelect;
pub use notes_modal::NotesModal;
pub use notifications_panel::NotificationsPanel;
pub use preferences_panel::PreferencesPanel;
pub use reminders_panel::RemindersPanel;
pub use suggestions_list::SuggestionsList;
pub use toast_host::ToastHost;
