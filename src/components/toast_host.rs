//! Toast Host
//!
//! Renders the notice queue; each toast removes itself after a timeout or on click.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-container">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.notice.level.css_class());
                    view! {
                        <div class=class role="status" on:click=move |_| ctx.dismiss_toast(id)>
                            {toast.notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
