//! Analytics Charts
//!
//! Turns the per-bucket completion/streak series embedded in the page into
//! Chart.js line configs. Planning is pure; the chart binding only executes
//! the plans it is handed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::palette::{Palette, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Daily,
    Weekly,
    Monthly,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Daily, Bucket::Weekly, Bucket::Monthly];

    pub fn key(self) -> &'static str {
        match self {
            Bucket::Daily => "daily",
            Bucket::Weekly => "weekly",
            Bucket::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Completion,
    Streak,
}

impl ChartKind {
    /// Canvas id, e.g. `dailyCompletionChart`
    pub fn mount_id(self, bucket: Bucket) -> String {
        let suffix = match self {
            ChartKind::Completion => "CompletionChart",
            ChartKind::Streak => "StreakChart",
        };
        format!("{}{}", bucket.key(), suffix)
    }
}

/// One line of a chart
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesData {
    #[serde(default)]
    pub label: Option<String>,
    pub values: Vec<f64>,
    /// `#rrggbb`; the palette fills in when absent
    #[serde(default)]
    pub color: Option<String>,
}

/// Labels shared by one or more lines.
///
/// Accepts `{labels, values, label?}` as well as `{labels, datasets: [...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesData>,
}

#[derive(Deserialize)]
struct RawSeries {
    #[serde(default)]
    labels: Vec<Value>,
    #[serde(default)]
    values: Option<Vec<f64>>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    datasets: Option<Vec<SeriesData>>,
}

impl TryFrom<RawSeries> for ChartSeries {
    type Error = String;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        let labels = raw
            .labels
            .into_iter()
            .map(|label| match label {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();

        let datasets = match (raw.datasets, raw.values) {
            (Some(datasets), _) => datasets,
            (None, Some(values)) => vec![SeriesData {
                label: raw.label,
                values,
                color: raw.color,
            }],
            (None, None) => return Err("series has neither values nor datasets".to_string()),
        };

        if datasets.iter().all(|d| d.values.is_empty()) {
            return Err("series has no values".to_string());
        }
        Ok(Self { labels, datasets })
    }
}

/// The three buckets of one embedded data object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketSeries {
    pub daily: Option<ChartSeries>,
    pub weekly: Option<ChartSeries>,
    pub monthly: Option<ChartSeries>,
}

impl BucketSeries {
    pub fn get(&self, bucket: Bucket) -> Option<&ChartSeries> {
        match bucket {
            Bucket::Daily => self.daily.as_ref(),
            Bucket::Weekly => self.weekly.as_ref(),
            Bucket::Monthly => self.monthly.as_ref(),
        }
    }

    fn slot(&mut self, bucket: Bucket) -> &mut Option<ChartSeries> {
        match bucket {
            Bucket::Daily => &mut self.daily,
            Bucket::Weekly => &mut self.weekly,
            Bucket::Monthly => &mut self.monthly,
        }
    }
}

/// Lenient: a malformed bucket is dropped with a warning, never an error
pub fn parse_bucket_series(raw: &str) -> BucketSeries {
    let mut series = BucketSeries::default();
    let object = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            log::warn!("[analytics] chart data is not an object");
            return series;
        }
        Err(err) => {
            log::warn!("[analytics] unreadable chart data: {}", err);
            return series;
        }
    };

    for bucket in Bucket::ALL {
        let Some(value) = object.get(bucket.key()) else {
            log::debug!("[analytics] no {} data", bucket.key());
            continue;
        };
        match serde_json::from_value::<ChartSeries>(value.clone()) {
            Ok(parsed) => *series.slot(bucket) = Some(parsed),
            Err(err) => log::warn!("[analytics] skipping {} data: {}", bucket.key(), err),
        }
    }
    series
}

/// Y tick text on completion charts
pub fn completion_tick_label(value: f64) -> &'static str {
    if value == 0.0 {
        "Not Completed"
    } else if value == 1.0 {
        "Completed"
    } else {
        ""
    }
}

/// Vertical fill, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct FillGradient {
    pub top: String,
    pub bottom: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    /// Flat fallback; the binding swaps in `gradient` once a canvas context exists
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
    #[serde(skip)]
    pub gradient: Option<FillGradient>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickConfig {
    pub step_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub ticks: TickConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendConfig {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginsConfig {
    pub legend: LegendConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalesConfig {
    pub y: AxisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginsConfig,
    pub scales: ScalesConfig,
}

/// Serializes to the object handed to `new Chart(ctx, config)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    fn line(kind: ChartKind, data: ChartData) -> Self {
        let y = match kind {
            ChartKind::Completion => AxisConfig {
                begin_at_zero: true,
                min: Some(0.0),
                max: Some(1.0),
                ticks: TickConfig { step_size: 1.0 },
            },
            ChartKind::Streak => AxisConfig {
                begin_at_zero: true,
                min: None,
                max: None,
                ticks: TickConfig { step_size: 1.0 },
            },
        };
        Self {
            kind: "line",
            data,
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: PluginsConfig {
                    legend: LegendConfig { position: "top" },
                },
                scales: ScalesConfig { y },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub mount_id: String,
    pub bucket: Bucket,
    pub kind: ChartKind,
    pub config: ChartConfig,
}

fn default_label(kind: ChartKind, bucket: Bucket) -> String {
    let key = bucket.key();
    let title = format!("{}{}", key[..1].to_uppercase(), &key[1..]);
    match kind {
        ChartKind::Completion => format!("{} Completion", title),
        ChartKind::Streak => format!("{} Streak", title),
    }
}

/// Charts to draw, in bucket order, completion before streak.
///
/// Missing mount points and missing buckets are skipped. The palette index
/// runs across every planned series so no two lines on the page share a color.
pub fn plan_charts(
    chart: &BucketSeries,
    streak: &BucketSeries,
    has_mount: impl Fn(&str) -> bool,
    palette: &dyn Palette,
) -> Vec<ChartPlan> {
    let mut plans = Vec::new();
    let mut color_index = 0;

    for bucket in Bucket::ALL {
        for (kind, source) in [(ChartKind::Completion, chart), (ChartKind::Streak, streak)] {
            let mount_id = kind.mount_id(bucket);
            if !has_mount(&mount_id) {
                log::debug!("[analytics] no mount point #{}", mount_id);
                continue;
            }
            let Some(series) = source.get(bucket) else {
                log::debug!("[analytics] no data for #{}", mount_id);
                continue;
            };

            let datasets = series
                .datasets
                .iter()
                .map(|data| {
                    let color = data
                        .color
                        .as_deref()
                        .and_then(Rgb::from_hex)
                        .unwrap_or_else(|| palette.color(color_index));
                    color_index += 1;
                    DatasetConfig {
                        label: data.label.clone().unwrap_or_else(|| default_label(kind, bucket)),
                        data: data.values.clone(),
                        border_color: color.css(),
                        background_color: color.css_alpha(0.4),
                        fill: true,
                        tension: 0.3,
                        gradient: Some(FillGradient {
                            top: color.css_alpha(0.4),
                            bottom: color.css_alpha(0.0),
                        }),
                    }
                })
                .collect();

            let data = ChartData {
                labels: series.labels.clone(),
                datasets,
            };
            plans.push(ChartPlan {
                mount_id,
                bucket,
                kind,
                config: ChartConfig::line(kind, data),
            });
        }
    }
    plans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::HuePalette;

    const CHART: &str = r##"{
        "daily": {"labels": ["2024-11-10", "2024-11-11"], "values": [1, 0]},
        "weekly": {"labels": ["W45"], "datasets": [
            {"label": "Read", "values": [1], "color": "#4bc0c0"},
            {"label": "Run", "values": [0]}
        ]},
        "monthly": {"labels": ["Nov"]}
    }"##;

    const STREAK: &str = r#"{"daily": {"labels": [1, 2], "values": [2, 3], "label": "Streak"}}"#;

    #[test]
    fn test_parses_both_series_shapes() {
        let series = parse_bucket_series(CHART);
        assert_eq!(series.daily.as_ref().unwrap().datasets.len(), 1);
        assert_eq!(series.weekly.as_ref().unwrap().datasets[0].color.as_deref(), Some("#4bc0c0"));
        assert_eq!(series.weekly.as_ref().unwrap().datasets[1].label.as_deref(), Some("Run"));
        assert!(series.monthly.is_none(), "bucket without values is dropped");

        let streak = parse_bucket_series(STREAK);
        assert_eq!(streak.daily.unwrap().labels, vec!["1", "2"]);
    }

    #[test]
    fn test_garbage_data_yields_no_series() {
        assert_eq!(parse_bucket_series("not json"), BucketSeries::default());
        assert_eq!(parse_bucket_series("[1, 2]"), BucketSeries::default());
        assert_eq!(parse_bucket_series(r#"{"daily": 5}"#), BucketSeries::default());
    }

    #[test]
    fn test_missing_buckets_and_mounts_are_skipped() {
        let chart = parse_bucket_series(CHART);
        let streak = parse_bucket_series(STREAK);

        let plans = plan_charts(&chart, &streak, |id| id != "weeklyCompletionChart", &HuePalette::default());

        let ids: Vec<&str> = plans.iter().map(|p| p.mount_id.as_str()).collect();
        assert_eq!(ids, vec!["dailyCompletionChart", "dailyStreakChart"]);
    }

    #[test]
    fn test_empty_data_plans_nothing() {
        let plans = plan_charts(
            &BucketSeries::default(),
            &BucketSeries::default(),
            |_| true,
            &HuePalette::default(),
        );
        assert!(plans.is_empty());
    }

    #[test]
    fn test_every_series_gets_a_distinct_color() {
        let chart = parse_bucket_series(CHART);
        let streak = parse_bucket_series(STREAK);

        let plans = plan_charts(&chart, &streak, |_| true, &HuePalette::new(0.1));

        let colors: Vec<&str> = plans
            .iter()
            .flat_map(|p| p.config.data.datasets.iter().map(|d| d.border_color.as_str()))
            .collect();
        assert_eq!(colors.len(), 4);
        assert!(colors.contains(&"rgb(75, 192, 192)"), "explicit color kept");
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_axis_rules_per_kind() {
        let chart = parse_bucket_series(CHART);
        let streak = parse_bucket_series(STREAK);
        let plans = plan_charts(&chart, &streak, |_| true, &HuePalette::default());

        let completion = serde_json::to_value(&plans[0].config).unwrap();
        assert_eq!(completion["type"], "line");
        assert_eq!(completion["options"]["maintainAspectRatio"], false);
        assert_eq!(completion["options"]["scales"]["y"]["max"], 1.0);
        assert_eq!(completion["options"]["scales"]["y"]["ticks"]["stepSize"], 1.0);
        assert_eq!(completion["data"]["datasets"][0]["label"], "Daily Completion");
        assert!(completion["data"]["datasets"][0].get("gradient").is_none());

        let streak = serde_json::to_value(&plans[1].config).unwrap();
        assert_eq!(plans[1].kind, ChartKind::Streak);
        assert!(streak["options"]["scales"]["y"].get("max").is_none());
        assert_eq!(streak["options"]["scales"]["y"]["beginAtZero"], true);
    }

    #[test]
    fn test_completion_tick_labels() {
        assert_eq!(completion_tick_label(0.0), "Not Completed");
        assert_eq!(completion_tick_label(1.0), "Completed");
        assert_eq!(completion_tick_label(0.5), "");
    }
}
