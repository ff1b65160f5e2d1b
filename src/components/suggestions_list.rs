//! Suggestions List Component
//!
//! Catalog of habits to adopt; adopting publishes the new habit list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::controllers::{SuggestionsController, SUGGESTIONS_EMPTY, SUGGESTIONS_FAILED};
use crate::models::Suggestion;

#[component]
pub fn SuggestionsList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let suggestions = RwSignal::new(None::<Vec<Suggestion>>);
    let (failed, set_failed) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            match SuggestionsController::new(&api, &shell).load().await {
                Some(loaded) => suggestions.set(Some(loaded)),
                None => set_failed.set(true),
            }
        });
    });

    let adopt = move |suggestion: Suggestion| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let outcome = SuggestionsController::new(&api, &shell).adopt(&suggestion).await;
            if let Some(habits) = outcome.reloaded() {
                ctx.habits.set(Some(habits));
            }
        });
    };

    view! {
        <div class="suggestions">
            {move || match suggestions.get() {
                Some(list) if list.is_empty() => view! { <p class="empty-state">{SUGGESTIONS_EMPTY}</p> }.into_any(),
                Some(list) => view! {
                    <ul class="suggestion-list">
                        {list.into_iter().map(|suggestion| {
                            let text = format!("{} ({})", suggestion.name, suggestion.frequency);
                            view! {
                                <li class="suggestion">
                                    <span>{text}</span>
                                    <button on:click=move |_| adopt(suggestion.clone())>"Add"</button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any(),
                None if failed.get() => view! { <p class="error-state">{SUGGESTIONS_FAILED}</p> }.into_any(),
                None => view! { <p class="loading">"Loading suggestions..."</p> }.into_any(),
            }}
        </div>
    }
}
