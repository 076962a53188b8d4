use crate::calendar::{
    daily_totals, filter_category, filter_year, group_by_month, group_by_weekday, years,
};
use crate::errors::AnalyticsError;
use crate::grouping::group_and_sum;
use crate::models::{
    AggregateBucket, HeatmapDay, HeatmapResponse, LegendEntry, Percentiles, Series,
    SeriesSummary, TimeSeriesRecord,
};
use crate::quantile::{nonzero_thresholds, quantiles};
use crate::scale::{above_sentinel, heatmap_boundaries, heatmap_scale, ZERO_SENTINEL};
use chrono::{Datelike, Local};
use serde::Deserialize;

const SUMMARY_PERCENTILES: [f64; 3] = [10.0, 50.0, 90.0];
const HEATMAP_PERCENTILES: [f64; 3] = [20.0, 50.0, 80.0];

/// How heatmap boundaries are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapMode {
    /// Nice ticks over the series' value range.
    #[default]
    Ticks,
    /// p20/p50/p80 of the year's active days.
    Quantile,
}

/// Latest year with data, or the current year for an empty series.
pub fn default_year(series: &Series) -> i32 {
    years(&series.records)
        .last()
        .copied()
        .unwrap_or_else(|| Local::now().year())
}

pub fn build_summary(series: &Series, year: i32, category: Option<&str>) -> SeriesSummary {
    let records = scoped_records(series, year, category);
    let days: Vec<f64> = daily_totals(&records, year)
        .into_iter()
        .map(|day| day.total)
        .collect();
    let active: Vec<f64> = days.iter().copied().filter(|total| *total > 0.0).collect();

    let daily_percentiles = quantiles(&active, &SUMMARY_PERCENTILES)
        .ok()
        .map(|values| Percentiles {
            p10: values[0],
            p50: values[1],
            p90: values[2],
        });

    let categories = group_and_sum(records.iter().filter_map(|record| {
        record
            .category
            .as_ref()
            .map(|category| (category.clone(), record.value))
    }))
    .into_buckets(true)
    .into_iter()
    .map(|(label, total)| AggregateBucket { label, total })
    .collect();

    SeriesSummary {
        name: series.name.clone(),
        units: series.units.clone(),
        year,
        category: category.map(str::to_string),
        record_count: records.len(),
        total: days.iter().sum(),
        active_days: active.len(),
        daily_percentiles,
        weekdays: group_by_weekday(&records),
        months: group_by_month(&records),
        categories,
    }
}

pub fn build_heatmap(
    series: &Series,
    year: i32,
    category: Option<&str>,
    mode: HeatmapMode,
) -> Result<HeatmapResponse, AnalyticsError> {
    let records = scoped_records(series, year, category);
    let days = daily_totals(&records, year);

    let boundaries = match mode {
        HeatmapMode::Ticks => {
            let [lo, hi] = value_range(series);
            heatmap_boundaries(lo, hi)
        }
        HeatmapMode::Quantile => {
            let totals: Vec<f64> = days.iter().map(|day| day.total).collect();
            match nonzero_thresholds(&totals, &HEATMAP_PERCENTILES) {
                Ok(thresholds) => above_sentinel(&thresholds),
                Err(AnalyticsError::EmptyInput) => vec![ZERO_SENTINEL],
                Err(err) => return Err(err),
            }
        }
    };

    let scale = heatmap_scale(series.scheme, boundaries)?;
    let legend = legend(scale.boundaries(), scale.palette());
    let days = days
        .into_iter()
        .map(|day| {
            let bucket = scale.bucket_index(day.total);
            HeatmapDay {
                date: day.date,
                total: day.total,
                bucket,
                color: scale.palette()[bucket].clone(),
            }
        })
        .collect();

    Ok(HeatmapResponse {
        name: series.name.clone(),
        units: series.units.clone(),
        year,
        boundaries: scale.boundaries().to_vec(),
        palette: scale.palette().to_vec(),
        legend,
        days,
    })
}

fn scoped_records(series: &Series, year: i32, category: Option<&str>) -> Vec<TimeSeriesRecord> {
    let records = filter_year(&series.records, year);
    match category {
        Some(category) => filter_category(&records, category),
        None => records,
    }
}

fn value_range(series: &Series) -> [f64; 2] {
    if let Some(range) = series.range {
        return range;
    }
    let mut values = series.records.iter().map(|record| record.value);
    let Some(first) = values.next() else {
        return [0.0, 0.0];
    };
    values.fold([first, first], |[lo, hi], value| [lo.min(value), hi.max(value)])
}

// "0", ">0", then the lower edge of every later bucket
fn legend(boundaries: &[f64], palette: &[String]) -> Vec<LegendEntry> {
    palette
        .iter()
        .enumerate()
        .map(|(index, color)| LegendEntry {
            label: match index {
                0 => "0".to_string(),
                1 => ">0".to_string(),
                _ => tick_label(boundaries[index - 1]),
            },
            color: color.clone(),
        })
        .collect()
}

// trims float noise such as 0.30000000000000004
fn tick_label(value: f64) -> String {
    let label = format!("{value:.6}");
    let label = label.trim_end_matches('0').trim_end_matches('.');
    if label == "-0" { "0".to_string() } else { label.to_string() }
}
