//! Habit picker shared by the reminder and challenge forms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::controllers::HabitListController;

#[component]
pub fn HabitSelect(
    selected: Signal<Option<u32>>,
    #[prop(into)] on_select: Callback<Option<u32>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Pages without the habit list still need the names
    Effect::new(move |_| {
        if ctx.habits.get_untracked().is_some() {
            return;
        }
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            if let Some(habits) = HabitListController::new(&api, &shell).load().await {
                ctx.habits.set(Some(habits));
            }
        });
    });

    view! {
        <select
            class="habit-select"
            on:change=move |ev| on_select.run(event_target_value(&ev).parse().ok())
        >
            <option value="" selected=move || selected.get().is_none()>"Select a habit"</option>
            {move || ctx.habits.get().unwrap_or_default().into_iter().map(|habit| {
                let id = habit.id;
                view! {
                    <option value=id.to_string() selected=move || selected.get() == Some(id)>
                        {habit.name}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
