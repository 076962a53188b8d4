use crate::palette::Scheme;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    pub date: NaiveDate,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TimeSeriesRecord {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBucket {
    pub label: String,
    pub total: f64,
}

/// One named activity stream, e.g. commits per day or minutes read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub scheme: Scheme,
    /// Value domain for heatmap ticks; the observed min/max when absent.
    #[serde(default)]
    pub range: Option<[f64; 2]>,
    #[serde(default)]
    pub records: Vec<TimeSeriesRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub series: Vec<Series>,
}

impl Dataset {
    pub fn find(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub series: usize,
}

#[derive(Debug, Serialize)]
pub struct SeriesInfo {
    pub name: String,
    pub units: String,
    pub records: usize,
    pub years: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct Percentiles {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

#[derive(Debug, Serialize)]
pub struct SeriesSummary {
    pub name: String,
    pub units: String,
    pub year: i32,
    pub category: Option<String>,
    pub record_count: usize,
    pub total: f64,
    pub active_days: usize,
    pub daily_percentiles: Option<Percentiles>,
    pub weekdays: Vec<AggregateBucket>,
    pub months: Vec<AggregateBucket>,
    pub categories: Vec<AggregateBucket>,
}

#[derive(Debug, Serialize)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    pub total: f64,
    pub bucket: usize,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub name: String,
    pub units: String,
    pub year: i32,
    pub boundaries: Vec<f64>,
    pub palette: Vec<String>,
    pub legend: Vec<LegendEntry>,
    pub days: Vec<HeatmapDay>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub name: String,
    pub year: i32,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub series: usize,
    pub records: usize,
}
