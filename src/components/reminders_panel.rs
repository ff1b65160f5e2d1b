//! Reminders Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::HabitSelect;
use crate::context::AppContext;
use crate::controllers::{weekday_name, ReminderDraft, RemindersController, WEEKDAYS};
use crate::models::Reminder;

#[component]
fn ReminderRow(reminder: Reminder, on_toggle: Callback<(u32, bool)>) -> impl IntoView {
    let id = reminder.id;
    let summary = format!("{} at {} ({})", reminder.habit_name, reminder.time, reminder.days.join(", "));
    view! {
        <li class="reminder">
            <span>{summary}</span>
            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=reminder.enabled
                    on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
                />
                "Enabled"
            </label>
        </li>
    }
}

#[component]
pub fn RemindersPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (reminders, set_reminders) = signal(Vec::<Reminder>::new());
    let draft = RwSignal::new(ReminderDraft::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            if let Some(loaded) = RemindersController::new(&api, &shell).load().await {
                set_reminders.set(loaded);
            }
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let outcome = RemindersController::new(&api, &shell).create(&current).await;
            if outcome.is_applied() {
                draft.set(ReminderDraft::default());
            }
            if let Some(loaded) = outcome.reloaded() {
                set_reminders.set(loaded);
            }
        });
    };

    let on_toggle = Callback::new(move |(id, enabled): (u32, bool)| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let outcome = RemindersController::new(&api, &shell).set_enabled(id, enabled).await;
            if let Some(loaded) = outcome.reloaded() {
                set_reminders.set(loaded);
            }
        });
    });

    view! {
        <div class="reminders">
            <form class="reminder-form" on:submit=on_create>
                <HabitSelect
                    selected=Signal::derive(move || draft.with(|d| d.habit_id))
                    on_select=move |habit_id: Option<u32>| draft.update(|d| d.habit_id = habit_id)
                />
                <input
                    type="time"
                    prop:value=move || draft.with(|d| d.time.clone())
                    on:input=move |ev| draft.update(|d| d.time = event_target_value(&ev))
                />
                <div class="weekday-picker">
                    {WEEKDAYS.iter().map(|day| {
                        let day = *day;
                        view! {
                            <label class="weekday">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|d| d.days.contains(&day))
                                    on:change=move |_| draft.update(|d| d.toggle_day(day))
                                />
                                {weekday_name(day)}
                            </label>
                        }
                    }).collect_view()}
                </div>
                <button type="submit">"Set Reminder"</button>
            </form>
            <ul class="reminder-list">
                <For
                    each=move || reminders.get()
                    key=|r| (r.id, r.enabled)
                    children=move |reminder| view! { <ReminderRow reminder=reminder on_toggle=on_toggle /> }
                />
            </ul>
        </div>
    }
}
