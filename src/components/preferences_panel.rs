//! Preferences Panel Component
//!
//! Dark mode, email notifications and the statistics export form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::AppContext;
use crate::controllers::PreferencesController;

#[component]
pub fn PreferencesPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (dark_mode, set_dark_mode) = signal(ctx.restore_dark_mode());
    let (email, set_email) = signal(false);
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let flags = ctx.flags();
            let config = ctx.config.get_value();
            let loaded = PreferencesController::new(&api, &shell, &flags, &config).load().await;
            if let Some(preferences) = loaded {
                set_dark_mode.set(preferences.dark_mode);
                set_email.set(preferences.email_notifications);
                browser::apply_dark_mode(preferences.dark_mode);
            }
        });
    });

    let on_dark_mode = move |ev: web_sys::Event| {
        let enabled = event_target_checked(&ev);
        set_dark_mode.set(enabled);
        browser::apply_dark_mode(enabled);
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let flags = ctx.flags();
            let config = ctx.config.get_value();
            PreferencesController::new(&api, &shell, &flags, &config)
                .set_dark_mode(enabled)
                .await;
        });
    };

    let on_email = move |ev: web_sys::Event| {
        let enabled = event_target_checked(&ev);
        set_email.set(enabled);
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let flags = ctx.flags();
            let config = ctx.config.get_value();
            PreferencesController::new(&api, &shell, &flags, &config)
                .set_email_notifications(enabled)
                .await;
        });
    };

    let on_export = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.backend();
        let shell = ctx.shell();
        let flags = ctx.flags();
        let config = ctx.config.get_value();
        PreferencesController::new(&api, &shell, &flags, &config)
            .export(&start_date.get(), &end_date.get());
    };

    view! {
        <div class="preferences">
            <label class="preference">
                <input type="checkbox" prop:checked=move || dark_mode.get() on:change=on_dark_mode />
                "Dark mode"
            </label>
            <label class="preference">
                <input type="checkbox" prop:checked=move || email.get() on:change=on_email />
                "Email notifications"
            </label>
            <form class="export-form" on:submit=on_export>
                <input
                    type="date"
                    prop:value=move || start_date.get()
                    on:input=move |ev| set_start_date.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || end_date.get()
                    on:input=move |ev| set_end_date.set(event_target_value(&ev))
                />
                <button type="submit">"Export Statistics"</button>
            </form>
        </div>
    }
}
