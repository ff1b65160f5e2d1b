//! FullCalendar

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::{get_path, set};
use crate::api::DateRange;
use crate::controllers::{parse_day, CalendarEvent};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = FullCalendar)]
    pub type Calendar;

    #[wasm_bindgen(constructor, catch, js_namespace = FullCalendar)]
    fn new(el: &HtmlElement, options: &JsValue) -> Result<Calendar, JsValue>;

    #[wasm_bindgen(method)]
    fn render(this: &Calendar);

    #[wasm_bindgen(method, js_name = refetchEvents)]
    pub fn refetch_events(this: &Calendar);
}

/// Event object as the widget expects it
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetEvent<'a> {
    title: &'a str,
    start: String,
    background_color: &'static str,
    border_color: &'static str,
    text_color: &'static str,
    all_day: bool,
}

impl<'a> From<&'a CalendarEvent> for WidgetEvent<'a> {
    fn from(event: &'a CalendarEvent) -> Self {
        Self {
            title: &event.title,
            start: event.date.format("%Y-%m-%d").to_string(),
            background_color: event.color.css(),
            border_color: event.color.css(),
            text_color: "white",
            all_day: true,
        }
    }
}

/// The widget's `success` / `failure` pair for one fetch
pub struct EventSink {
    success: js_sys::Function,
    failure: js_sys::Function,
}

impl EventSink {
    pub fn resolve(&self, events: &[CalendarEvent]) {
        let shaped: Vec<WidgetEvent> = events.iter().map(WidgetEvent::from).collect();
        let outcome = serde_wasm_bindgen::to_value(&shaped)
            .map_err(JsValue::from)
            .and_then(|array| self.success.call1(&JsValue::NULL, &array));
        if let Err(err) = outcome {
            log::error!("[calendar] could not hand events to the widget: {:?}", err);
        }
    }

    pub fn reject(&self, message: &str) {
        if let Err(err) = self.failure.call1(&JsValue::NULL, &JsValue::from_str(message)) {
            log::error!("[calendar] could not report a failed fetch to the widget: {:?}", err);
        }
    }
}

fn range_of(fetch_info: &JsValue) -> Option<DateRange> {
    let start = get_path(fetch_info, &["startStr"]).ok()?.as_string()?;
    let end = get_path(fetch_info, &["endStr"]).ok()?.as_string()?;
    Some(DateRange {
        start_date: parse_day(&start)?,
        end_date: parse_day(&end)?,
    })
}

fn toolbar() -> Result<JsValue, JsValue> {
    let toolbar: JsValue = js_sys::Object::new().into();
    set(&toolbar, "left", &"prev,next today".into())?;
    set(&toolbar, "center", &"title".into())?;
    set(&toolbar, "right", &"dayGridMonth,timeGridWeek,timeGridDay".into())?;
    Ok(toolbar)
}

/// Builds and renders the widget inside `el`.
///
/// `fetch` is called for every visible range change; `on_day` for a click on
/// a day cell or on an event.
pub fn mount(
    el: &HtmlElement,
    fetch: impl Fn(DateRange, EventSink) + 'static,
    on_day: impl Fn(NaiveDate) + 'static,
) -> Result<Calendar, JsValue> {
    let options: JsValue = js_sys::Object::new().into();
    set(&options, "initialView", &"dayGridMonth".into())?;
    set(&options, "headerToolbar", &toolbar()?)?;

    let events = Closure::<dyn Fn(JsValue, js_sys::Function, js_sys::Function)>::new(
        move |info: JsValue, success: js_sys::Function, failure: js_sys::Function| {
            let sink = EventSink { success, failure };
            match range_of(&info) {
                Some(range) => fetch(range, sink),
                None => {
                    log::warn!("[calendar] unreadable visible range");
                    sink.reject("unreadable visible range");
                }
            }
        },
    );
    set(&options, "events", events.as_ref())?;
    events.forget();

    let on_day = std::rc::Rc::new(on_day);

    let day_click = {
        let on_day = on_day.clone();
        Closure::<dyn Fn(JsValue)>::new(move |info: JsValue| {
            let date = get_path(&info, &["dateStr"]).ok().and_then(|v| v.as_string());
            match date.as_deref().and_then(parse_day) {
                Some(date) => on_day(date),
                None => log::warn!("[calendar] day click without a usable date"),
            }
        })
    };
    set(&options, "dateClick", day_click.as_ref())?;
    day_click.forget();

    let event_click = Closure::<dyn Fn(JsValue)>::new(move |info: JsValue| {
        let date = get_path(&info, &["event", "startStr"]).ok().and_then(|v| v.as_string());
        match date.as_deref().and_then(parse_day) {
            Some(date) => on_day(date),
            None => log::warn!("[calendar] event click without a usable date"),
        }
    });
    set(&options, "eventClick", event_click.as_ref())?;
    event_click.forget();

    let calendar = Calendar::new(el, &options)?;
    calendar.render();
    Ok(calendar)
}
