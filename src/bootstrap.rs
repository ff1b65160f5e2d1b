//! Page Bootstrap
//!
//! The server renders the page; each widget is mounted as an island on its
//! anchor element if that element is present.

/// Every island the client knows how to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    HabitList,
    Calendar,
    Analytics,
    Notifications,
    Suggestions,
    Achievements,
    Reminders,
    Challenges,
    Preferences,
}

impl Widget {
    pub const ALL: [Widget; 9] = [
        Widget::HabitList,
        Widget::Calendar,
        Widget::Analytics,
        Widget::Notifications,
        Widget::Suggestions,
        Widget::Achievements,
        Widget::Reminders,
        Widget::Challenges,
        Widget::Preferences,
    ];

    /// Element id the island mounts into
    pub fn anchor(self) -> &'static str {
        match self {
            Widget::HabitList => "habits-root",
            Widget::Calendar => "calendar",
            Widget::Analytics => "analytics-container",
            Widget::Notifications => "notifications-container",
            Widget::Suggestions => "suggestions-list",
            Widget::Achievements => "achievements-container",
            Widget::Reminders => "reminders-container",
            Widget::Challenges => "challenges-container",
            Widget::Preferences => "preferences-panel",
        }
    }
}

/// Widgets whose anchor is present, in mount order
pub fn widgets_on_page(has_anchor: impl Fn(&str) -> bool) -> Vec<Widget> {
    Widget::ALL
        .into_iter()
        .filter(|widget| has_anchor(widget.anchor()))
        .collect()
}

#[cfg(target_arch = "wasm32")]
pub use browser_start::start;

#[cfg(target_arch = "wasm32")]
mod browser_start {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{widgets_on_page, Widget};
    use crate::browser;
    use crate::components::{
        AchievementsGrid, AnalyticsCharts, CalendarView, ChallengesBoard, HabitList,
        NotificationsPanel, PreferencesPanel, RemindersPanel, SuggestionsList, ToastHost,
    };
    use crate::config::{ClientConfig, CONFIG_ELEMENT_ID};
    use crate::context::AppContext;
    use crate::logging;

    fn load_config() -> ClientConfig {
        let config = match browser::embedded_json(CONFIG_ELEMENT_ID) {
            Some(raw) => ClientConfig::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("[bootstrap] ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
                ClientConfig::default()
            }),
            None => ClientConfig::default(),
        };
        config.with_origin(&browser::origin())
    }

    fn mount<F, V>(anchor: &str, ctx: AppContext, view: F)
    where
        F: FnOnce() -> V + 'static,
        V: IntoView + 'static,
    {
        let Some(element) = browser::element_by_id(anchor) else {
            return;
        };
        let Ok(parent) = element.dyn_into::<web_sys::HtmlElement>() else {
            log::warn!("[bootstrap] #{} is not an HTML element", anchor);
            return;
        };
        leptos::mount::mount_to(parent, move || {
            provide_context(ctx);
            view()
        })
        .forget();
    }

    /// Entry point: logger, config, shared context, then one island per anchor
    pub fn start() {
        console_error_panic_hook::set_once();
        logging::init();

        // root owner for the shared signals, alive for the whole page
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(load_config());

            // remembered theme first, before any island renders
            browser::apply_dark_mode(ctx.restore_dark_mode());

            leptos::mount::mount_to_body(move || {
                provide_context(ctx);
                view! { <ToastHost /> }
            })
            .forget();

            let widgets = widgets_on_page(|id| browser::element_by_id(id).is_some());
            log::info!("[bootstrap] mounting {:?}", widgets);

            for widget in widgets {
                let anchor = widget.anchor();
                match widget {
                    Widget::HabitList => mount(anchor, ctx, || view! { <HabitList /> }),
                    Widget::Calendar => mount(anchor, ctx, || view! { <CalendarView /> }),
                    Widget::Analytics => mount(anchor, ctx, || view! { <AnalyticsCharts /> }),
                    Widget::Notifications => mount(anchor, ctx, || view! { <NotificationsPanel /> }),
                    Widget::Suggestions => mount(anchor, ctx, || view! { <SuggestionsList /> }),
                    Widget::Achievements => mount(anchor, ctx, || view! { <AchievementsGrid /> }),
                    Widget::Reminders => mount(anchor, ctx, || view! { <RemindersPanel /> }),
                    Widget::Challenges => mount(anchor, ctx, || view! { <ChallengesBoard /> }),
                    Widget::Preferences => mount(anchor, ctx, || view! { <PreferencesPanel /> }),
                }
            }
        });
        std::mem::forget(owner);
    }
}
