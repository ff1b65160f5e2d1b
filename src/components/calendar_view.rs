//! Calendar View Component
//!
//! Hosts the FullCalendar widget and the day-detail modal.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DateRange;
use crate::bindings::calendar::{self, Calendar, EventSink};
use crate::context::AppContext;
use crate::controllers::{CalendarController, DayDetail, DayModal, Mutation, EMPTY_DAY};
use crate::models::DayHabitStatus;

#[component]
fn DayRow(status: DayHabitStatus, date: NaiveDate, on_change: Callback<(u32, bool)>) -> impl IntoView {
    let class = if status.is_completed { "day-habit completed" } else { "day-habit pending" };
    view! {
        <li class=class>
            {status.habit_id.map(|habit_id| view! {
                <input
                    type="checkbox"
                    prop:checked=status.is_completed
                    aria-label=format!("{} on {}", status.habit_name, date)
                    on:change=move |ev| on_change.run((habit_id, event_target_checked(&ev)))
                />
            })}
            <span>{status.habit_name.clone()}</span>
        </li>
    }
}

#[component]
fn DayDetailView(detail: DayDetail, on_change: Callback<(u32, bool)>) -> impl IntoView {
    let date = detail.date;
    let heading = detail.heading();
    let body = if detail.is_empty() {
        view! { <p class="empty-state">{EMPTY_DAY}</p> }.into_any()
    } else {
        view! {
            <h4>"Completed"</h4>
            <ul class="day-completed">
                {detail.completed.into_iter().map(|status| view! {
                    <DayRow status=status date=date on_change=on_change />
                }).collect_view()}
            </ul>
            <h4>"Not Completed"</h4>
            <ul class="day-pending">
                {detail.pending.into_iter().map(|status| view! {
                    <DayRow status=status date=date on_change=on_change />
                }).collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <h3>{heading}</h3>
        {body}
    }
}

#[component]
pub fn CalendarView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let container = NodeRef::<leptos::html::Div>::new();
    let widget = StoredValue::new_local(None::<Calendar>);
    let modal = RwSignal::new(DayModal::default());

    let open_day = move |date: NaiveDate| {
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            if let Some(detail) = CalendarController::new(&api, &shell).open_day(date).await {
                modal.update(|m| m.open(detail));
            }
        });
    };

    Effect::new(move |_| {
        let Some(el) = container.get() else {
            return;
        };
        if widget.with_value(Option::is_some) {
            return;
        }

        let fetch = move |range: DateRange, sink: EventSink| {
            spawn_local(async move {
                let api = ctx.backend();
                let shell = ctx.shell();
                match CalendarController::new(&api, &shell).events(range).await {
                    Ok(events) => sink.resolve(&events),
                    Err(err) => sink.reject(&err.to_string()),
                }
            });
        };

        match calendar::mount(&el, fetch, open_day) {
            Ok(calendar) => widget.set_value(Some(calendar)),
            Err(err) => log::error!("[calendar] widget failed to start: {:?}", err),
        }
    });

    let on_status_change = Callback::new(move |(habit_id, completed): (u32, bool)| {
        let Some(date) = modal.with_untracked(|m| m.detail().map(|d| d.date)) else {
            return;
        };
        spawn_local(async move {
            let api = ctx.backend();
            let shell = ctx.shell();
            let outcome = CalendarController::new(&api, &shell)
                .set_day_status(habit_id, date, completed)
                .await;
            if let Mutation::Applied(reloaded) = outcome {
                if let Some(detail) = reloaded {
                    modal.update(|m| m.open(detail));
                }
                widget.with_value(|w| {
                    if let Some(calendar) = w {
                        calendar.refetch_events();
                    }
                });
            }
        });
    });

    view! {
        <div class="calendar-view">
            <div class="calendar-widget" node_ref=container></div>
            <Show when=move || modal.with(DayModal::is_open)>
                <div class="modal-overlay" on:click=move |_| modal.update(DayModal::close)>
                    <div class="modal day-modal" on:click=|ev| ev.stop_propagation()>
                        {move || modal.with(|m| m.detail().cloned()).map(|detail| view! {
                            <DayDetailView detail=detail on_change=on_status_change />
                        })}
                        <button class="close-btn" on:click=move |_| modal.update(DayModal::close)>"Close"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
