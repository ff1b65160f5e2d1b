//! Challenges Board Component
//!
//! Create form plus one card per challenge with a progress bar and a join button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::HabitSelect;
use crate::context::AppContext;
use crate::controllers::{ChallengeDraft, ChallengesController};
use crate::models::Challenge;

#[component]
fn ChallengeCard(challenge: Challenge, on_join: Callback<u32>) -> impl IntoView {
    let id = challenge.id;
    let progress = challenge.progress_percent();
    let participating = challenge.is_participating;
    view! {
        <div class="challenge-card">
            <h4>{challenge.name}</h4>
            <p>{challenge.description}</p>
            <small>{format!("{} to {}", challenge.start_date, challenge.end_date)}</small>
            <p class="participants">{format!("Participants: {}", challenge.participant_count)}</p>
            <div class="progress">
                <div class="progress-bar" style=format!("width: {:.0}%;", progress)></div>
            </div>
            <span class="progress-label">{format!("{:.0}% complete", progress)}</span>
            <Show when=move || !participating>
                <button class="join-btn" on:click=move |_| on_join.run(id)>"Join"</button>
            </Show>
        </div>
    }
}

#[component]
pub fn ChallengesBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (challenges, set_challenges) = signal(Vec::<Challenge>::new());
    let draft = RwSignal::new(ChallengeDraft::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            if let Some(loaded) = ChallengesController::new(&api, &shell).load().await {
                set_challenges.set(loaded);
            }
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let outcome = ChallengesController::new(&api, &shell).create(&current).await;
            if outcome.is_applied() {
                draft.set(ChallengeDraft::default());
            }
            if let Some(loaded) = outcome.reloaded() {
                set_challenges.set(loaded);
            }
        });
    };

    let on_join = Callback::new(move |id: u32| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            if let Some(loaded) = ChallengesController::new(&api, &shell).join(id).await.reloaded() {
                set_challenges.set(loaded);
            }
        });
    });

    view! {
        <div class="challenges">
            <form class="challenge-form" on:submit=on_create>
                <HabitSelect
                    selected=Signal::derive(move || draft.with(|d| d.habit_id))
                    on_select=move |habit_id: Option<u32>| draft.update(|d| d.habit_id = habit_id)
                />
                <input
                    type="text"
                    placeholder="Challenge name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.start_date.clone())
                    on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.end_date.clone())
                    on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                />
                <button type="submit">"Create Challenge"</button>
            </form>
            <div class="challenge-list">
                <For
                    each=move || challenges.get()
                    key=|c| (c.id, c.participant_count, c.is_participating)
                    children=move |challenge| view! { <ChallengeCard challenge=challenge on_join=on_join /> }
                />
            </div>
        </div>
    }
}
