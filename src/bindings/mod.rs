//! JS Widget Bindings
//!
//! The only place that knows the JS shapes of Chart.js and FullCalendar.
//! Both libraries are loaded by the page as global bundles.

pub mod calendar;
pub mod chart;

use wasm_bindgen::JsValue;

/// `obj[key] = value`
fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

/// `obj.a.b.c`, failing on the first missing link
fn get_path(target: &JsValue, keys: &[&str]) -> Result<JsValue, JsValue> {
    let mut current = target.clone();
    for key in keys {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key))?;
        if current.is_undefined() || current.is_null() {
            return Err(JsValue::from_str(&format!("missing `{}`", key)));
        }
    }
    Ok(current)
}
