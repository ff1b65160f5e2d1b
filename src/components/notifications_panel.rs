//! Notifications Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::controllers::{NotificationsController, NOTIFICATIONS_EMPTY, NOTIFICATIONS_FAILED};
use crate::models::Notification;

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let notifications = RwSignal::new(None::<Vec<Notification>>);
    let (failed, set_failed) = signal(false);

    let refresh = move || {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            match NotificationsController::new(&api, &shell).load().await {
                Some(loaded) => {
                    notifications.set(Some(loaded));
                    set_failed.set(false);
                }
                // a previous list stays on screen
                None => set_failed.set(true),
            }
        });
    };

    Effect::new(move |_| refresh());

    view! {
        <div class="notifications">
            {move || match notifications.get() {
                Some(list) if list.is_empty() => view! { <p class="empty-state">{NOTIFICATIONS_EMPTY}</p> }.into_any(),
                Some(list) => view! {
                    <ul class="notification-list">
                        {list.into_iter().map(|n| view! { <li class="notification">{n.message}</li> }).collect_view()}
                    </ul>
                }.into_any(),
                None if failed.get() => view! { <p class="error-state">{NOTIFICATIONS_FAILED}</p> }.into_any(),
                None => view! { <p class="loading">"Loading notifications..."</p> }.into_any(),
            }}
            <button class="refresh-btn" on:click=move |_| refresh()>"Refresh"</button>
        </div>
    }
}
