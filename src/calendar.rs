use crate::grouping::group_and_sum;
use crate::models::{AggregateBucket, DailyTotal, TimeSeriesRecord};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Seven buckets, Monday first, every one present even when empty.
pub fn group_by_weekday(records: &[TimeSeriesRecord]) -> Vec<AggregateBucket> {
    let grouped = group_and_sum(
        records
            .iter()
            .map(|record| (record.date.weekday().num_days_from_monday() as usize, record.value)),
    );
    canonical_buckets(&WEEKDAY_NAMES, |index| grouped.get(&index))
}

/// Twelve buckets, January first, every one present even when empty.
pub fn group_by_month(records: &[TimeSeriesRecord]) -> Vec<AggregateBucket> {
    let grouped = group_and_sum(
        records
            .iter()
            .map(|record| (record.date.month0() as usize, record.value)),
    );
    canonical_buckets(&MONTH_NAMES, |index| grouped.get(&index))
}

fn canonical_buckets(
    labels: &[&str],
    lookup: impl Fn(usize) -> Option<f64>,
) -> Vec<AggregateBucket> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| AggregateBucket {
            label: label.to_string(),
            total: lookup(index).unwrap_or(0.0),
        })
        .collect()
}

pub fn filter_year(records: &[TimeSeriesRecord], year: i32) -> Vec<TimeSeriesRecord> {
    records
        .iter()
        .filter(|record| record.date.year() == year)
        .cloned()
        .collect()
}

pub fn filter_category(records: &[TimeSeriesRecord], category: &str) -> Vec<TimeSeriesRecord> {
    records
        .iter()
        .filter(|record| record.category.as_deref() == Some(category))
        .cloned()
        .collect()
}

/// Categories in the order they first show up.
pub fn distinct_categories(records: &[TimeSeriesRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|record| record.category.as_ref())
        .filter(|category| seen.insert(*category))
        .cloned()
        .collect()
}

/// Calendar years present in `records`, ascending.
pub fn years(records: &[TimeSeriesRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|record| record.date.year()).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// One total per calendar day of `year`, zero-filled. Records outside the
/// year are ignored.
pub fn daily_totals(records: &[TimeSeriesRecord], year: i32) -> Vec<DailyTotal> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    let grouped = group_and_sum(
        records
            .iter()
            .filter(|record| record.date.year() == year)
            .map(|record| (record.date, record.value)),
    );

    let mut days = Vec::with_capacity(366);
    let mut date = first;
    loop {
        days.push(DailyTotal {
            date,
            total: grouped.get(&date).unwrap_or(0.0),
        });
        match date.succ_opt() {
            Some(next) if next.year() == year => date = next,
            _ => break,
        }
    }
    days
}
