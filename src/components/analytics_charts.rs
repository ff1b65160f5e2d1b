//! Analytics Charts Component
//!
//! Reads the series the server embedded in the page and draws every chart
//! whose canvas exists. Nothing is rendered by the island itself.

use leptos::prelude::*;

use crate::bindings::chart;
use crate::browser;
use crate::controllers::{parse_bucket_series, plan_charts, BucketSeries};
use crate::palette::HuePalette;

const CHART_DATA_ID: &str = "chart-data";
const STREAK_DATA_ID: &str = "streak-data";

fn embedded_series(id: &str) -> BucketSeries {
    match browser::embedded_json(id) {
        Some(raw) => parse_bucket_series(&raw),
        None => {
            log::debug!("[analytics] no #{} on this page", id);
            BucketSeries::default()
        }
    }
}

#[component]
pub fn AnalyticsCharts() -> impl IntoView {
    Effect::new(move |_| {
        let completion = embedded_series(CHART_DATA_ID);
        let streak = embedded_series(STREAK_DATA_ID);
        let palette = HuePalette::new(js_sys::Math::random());

        let plans = plan_charts(&completion, &streak, |id| browser::element_by_id(id).is_some(), &palette);
        for plan in &plans {
            if let Err(err) = chart::render(plan) {
                log::warn!("[analytics] #{} not drawn: {:?}", plan.mount_id, err);
            }
        }
        log::debug!("[analytics] drew {} charts", plans.len());
    });
}
