//! Chart.js

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{get_path, set};
use crate::controllers::{completion_tick_label, ChartKind, ChartPlan};

#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(static_method_of = Chart, js_name = getChart)]
    fn get_chart(canvas: &HtmlCanvasElement) -> Option<Chart>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

/// Draws one plan, replacing whatever chart already owns the canvas
pub fn render(plan: &ChartPlan) -> Result<Chart, JsValue> {
    let canvas = leptos::prelude::document()
        .get_element_by_id(&plan.mount_id)
        .ok_or_else(|| JsValue::from_str("canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;

    if let Some(existing) = Chart::get_chart(&canvas) {
        existing.destroy();
    }

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let config = serde_wasm_bindgen::to_value(&plan.config)?;

    let datasets = get_path(&config, &["data", "datasets"])?;
    for (index, dataset) in plan.config.data.datasets.iter().enumerate() {
        let Some(fill) = &dataset.gradient else {
            continue;
        };
        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, f64::from(canvas.height()));
        gradient.add_color_stop(0.0, &fill.top)?;
        gradient.add_color_stop(1.0, &fill.bottom)?;
        let target = js_sys::Reflect::get_u32(&datasets, index as u32)?;
        set(&target, "backgroundColor", &gradient)?;
    }

    if plan.kind == ChartKind::Completion {
        let ticks = get_path(&config, &["options", "scales", "y", "ticks"])?;
        let callback = Closure::<dyn Fn(JsValue) -> JsValue>::new(|value: JsValue| {
            JsValue::from_str(completion_tick_label(value.as_f64().unwrap_or(f64::NAN)))
        });
        set(&ticks, "callback", &callback.into_js_value())?;
    }

    Chart::new(&ctx, &config)
}
