//! Notes Modal
//!
//! Open while `note_target` holds a habit id; that id is handed to every call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::controllers::NotesController;
use crate::models::Note;

#[component]
pub fn NotesModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (notes, set_notes) = signal(Vec::<Note>::new());
    let (draft, set_draft) = signal(String::new());

    Effect::new(move |_| {
        let Some(habit_id) = ctx.note_target.get() else {
            return;
        };
        set_notes.set(Vec::new());
        set_draft.set(String::new());
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            if let Some(loaded) = NotesController::new(&api, &shell).open(habit_id).await {
                // a different habit may have been opened meanwhile
                if ctx.note_target.get_untracked() == Some(habit_id) {
                    set_notes.set(loaded);
                }
            }
        });
    });

    let close = move || ctx.note_target.set(None);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(habit_id) = ctx.note_target.get_untracked() else {
            return;
        };
        let text = draft.get();
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let outcome = NotesController::new(&api, &shell).save(habit_id, &text).await;
            if outcome.is_applied() {
                set_draft.set(String::new());
            }
            if let Some(loaded) = outcome.reloaded() {
                set_notes.set(loaded);
            }
        });
    };

    view! {
        <Show when=move || ctx.note_target.get().is_some()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal notes-modal" on:click=|ev| ev.stop_propagation()>
                    <h3>"Habit Notes"</h3>
                    <ul class="notes-list">
                        {move || notes.get().into_iter().map(|note| view! {
                            <li class="note">
                                <p>{note.body}</p>
                                <small>{note.date}</small>
                            </li>
                        }).collect_view()}
                    </ul>
                    <form on:submit=on_save>
                        <textarea
                            placeholder="Write a note..."
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        ></textarea>
                        <button type="submit">"Save Note"</button>
                        <button type="button" on:click=move |_| close()>"Close"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
