//! Achievements Grid Component
//!
//! Reloaded whenever a completion toggle reports new unlocks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::controllers::AchievementsController;
use crate::models::Achievement;

#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let alt = achievement.name.clone();
    view! {
        <div class="achievement-card">
            <img class="achievement-icon" src=achievement.icon alt=alt />
            <h4>{achievement.name}</h4>
            <p>{achievement.description}</p>
            <small>{format!("Earned: {}", achievement.earned_date)}</small>
        </div>
    }
}

#[component]
pub fn AchievementsGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (achievements, set_achievements) = signal(Vec::<Achievement>::new());

    Effect::new(move |_| {
        let _ = ctx.achievements_version();
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            if let Some(loaded) = AchievementsController::new(&api, &shell).load().await {
                set_achievements.set(loaded);
            }
        });
    });

    view! {
        <div class="achievements-grid">
            <For
                each=move || achievements.get()
                key=|a| (a.name.clone(), a.earned_date.clone())
                children=move |achievement| view! { <AchievementCard achievement=achievement /> }
            />
        </div>
    }
}
