use crate::calendar::{distinct_categories, filter_year, years};
use crate::errors::AppError;
use crate::models::{
    CategoriesResponse, Dataset, HealthResponse, HeatmapResponse, ReloadResponse, Series, SeriesInfo,
    SeriesSummary,
};
use crate::state::AppState;
use crate::stats::{build_heatmap, build_summary, default_year, HeatmapMode};
use crate::storage::reload_data;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    pub year: Option<i32>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HeatmapQuery {
    pub year: Option<i32>,
    pub category: Option<String>,
    #[serde(default)]
    pub mode: HeatmapMode,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let data = state.data.read().await;
    Json(HealthResponse {
        status: "ok",
        series: data.series.len(),
    })
}

pub async fn list_series(State(state): State<AppState>) -> Json<Vec<SeriesInfo>> {
    let data = state.data.read().await;
    Json(
        data.series
            .iter()
            .map(|series| SeriesInfo {
                name: series.name.clone(),
                units: series.units.clone(),
                records: series.records.len(),
                years: years(&series.records),
            })
            .collect(),
    )
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<SeriesSummary>, AppError> {
    let data = state.data.read().await;
    let series = find_series(&data, &name)?;
    let year = query.year.unwrap_or_else(|| default_year(series));

    let summary = build_summary(series, year, query.category.as_deref());
    debug!(series = %name, year, records = summary.record_count, "built summary");
    Ok(Json(summary))
}

pub async fn get_heatmap(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<HeatmapQuery>,
) -> Result<Json<HeatmapResponse>, AppError> {
    let data = state.data.read().await;
    let series = find_series(&data, &name)?;
    let year = query.year.unwrap_or_else(|| default_year(series));

    let heatmap = build_heatmap(series, year, query.category.as_deref(), query.mode)?;
    debug!(
        series = %name,
        year,
        mode = ?query.mode,
        buckets = heatmap.palette.len(),
        "built heatmap"
    );
    Ok(Json(heatmap))
}

pub async fn get_categories(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let data = state.data.read().await;
    let series = find_series(&data, &name)?;
    let year = query.year.unwrap_or_else(|| default_year(series));

    Ok(Json(CategoriesResponse {
        name: series.name.clone(),
        year,
        categories: distinct_categories(&filter_year(&series.records, year)),
    }))
}

pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    // parse outside the lock so readers are only blocked for the swap
    let fresh = reload_data(&state.data_path).await?;
    let response = ReloadResponse {
        series: fresh.series.len(),
        records: fresh.series.iter().map(|series| series.records.len()).sum(),
    };

    *state.data.write().await = fresh;
    info!(
        series = response.series,
        records = response.records,
        "reloaded dataset"
    );
    Ok(Json(response))
}

fn find_series<'a>(data: &'a Dataset, name: &str) -> Result<&'a Series, AppError> {
    data.find(name)
        .ok_or_else(|| AppError::not_found(format!("unknown series '{name}'")))
}
