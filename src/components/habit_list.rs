//! Habit List Component
//!
//! Add form, one row per habit (completion checkbox, streak, notes, remove)
//! and the notes modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::NotesModal;
use crate::context::AppContext;
use crate::controllers::{settled_completion, HabitListController, Mutation, StreakBoard};
use crate::models::Habit;

const FREQUENCIES: &[(&str, &str)] = &[("daily", "Daily"), ("weekly", "Weekly"), ("monthly", "Monthly")];

/// One habit row; the streak comes from the board, never from local math
#[component]
fn HabitRow(habit: Habit, streaks: RwSignal<StreakBoard>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = habit.id;
    let initial_streak = habit.streak;
    let label = format!("{} - {}", habit.name, habit.frequency);
    let checked = RwSignal::new(habit.completed_today);

    let on_toggle = move |ev: web_sys::Event| {
        let completed = event_target_checked(&ev);
        checked.set(completed);
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let outcome = HabitListController::new(&api, &shell)
                .toggle_completion(id, completed)
                .await;
            checked.set(settled_completion(completed, outcome.as_ref()));
            let Some(update) = outcome else {
                return;
            };
            streaks.update(|board| {
                board.apply(&update);
            });
            if update.reload_achievements() {
                ctx.reload_achievements();
            }
        });
    };

    let on_remove = move |_| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            if let Mutation::Applied(Some(habits)) = HabitListController::new(&api, &shell).remove(id).await {
                ctx.habits.set(Some(habits));
            }
        });
    };

    view! {
        <li class="habit-item" data-habit-id=id.to_string()>
            <input type="checkbox" class="habit-complete" prop:checked=move || checked.get() on:change=on_toggle />
            <span class="habit-label">
                {label}
                " - Streak: "
                <span class="habit-streak">
                    {move || streaks.with(|board| board.get(id)).unwrap_or(initial_streak)}
                </span>
            </span>
            <button class="notes-btn" on:click=move |_| ctx.note_target.set(Some(id))>"Notes"</button>
            <button class="remove-btn" on:click=on_remove>"Remove"</button>
        </li>
    }
}

#[component]
pub fn HabitList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (frequency, set_frequency) = signal(String::from("daily"));
    let (load_failed, set_load_failed) = signal(false);
    let streaks = RwSignal::new(StreakBoard::default());

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            match HabitListController::new(&api, &shell).load().await {
                Some(habits) => ctx.habits.set(Some(habits)),
                None => set_load_failed.set(true),
            }
        });
    });

    // Any freshly published list resets the per-row streaks
    Effect::new(move |_| {
        if let Some(habits) = ctx.habits.get() {
            streaks.set(StreakBoard::from_habits(&habits));
            set_load_failed.set(false);
        }
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_name = name.get();
        let new_frequency = frequency.get();
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let outcome = HabitListController::new(&api, &shell)
                .add(&new_name, &new_frequency)
                .await;
            if outcome.is_applied() {
                set_name.set(String::new());
            }
            if let Some(habits) = outcome.reloaded() {
                ctx.habits.set(Some(habits));
            }
        });
    };

    view! {
        <div class="habit-list">
            <form class="habit-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="New habit..."
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_frequency.set(event_target_value(&ev))>
                    {FREQUENCIES.iter().map(|(value, label)| {
                        let value = *value;
                        view! {
                            <option value=value selected=move || frequency.get() == value>{*label}</option>
                        }
                    }).collect_view()}
                </select>
                <button type="submit">"Add Habit"</button>
            </form>

            {move || match ctx.habits.get() {
                Some(habits) if habits.is_empty() => {
                    view! { <p class="empty-state">"No habits yet. Add one above!"</p> }.into_any()
                }
                Some(_) => view! {
                    <ul class="habits">
                        <For
                            each=move || ctx.habits.get().unwrap_or_default()
                            key=|habit| habit.id
                            children=move |habit| view! { <HabitRow habit=habit streaks=streaks /> }
                        />
                    </ul>
                }.into_any(),
                None if load_failed.get() => {
                    view! { <p class="error-state">"Error loading habits."</p> }.into_any()
                }
                None => view! { <p class="loading">"Loading habits..."</p> }.into_any(),
            }}

            <NotesModal />
        </div>
    }
}
