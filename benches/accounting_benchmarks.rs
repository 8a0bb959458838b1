//! Performance benchmarks for the PTO accounting engine.
//!
//! Covers the pure engine functions over a year of dates and one HTTP
//! round trip through the router.
//!
//! Run with: `cargo bench`

use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use pto_planner::accounting::{commit_time_off, dates_in_range, days_used, range_info};
use pto_planner::api::{AppState, create_router};
use pto_planner::config::HolidayLoader;
use pto_planner::models::{HolidaySet, TimeOffLedger};
use pto_planner::planner::Planner;
use pto_planner::store::MemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn us_holidays() -> HolidaySet {
    let calendar = HolidayLoader::load("./config/holidays").expect("Failed to load holidays");
    calendar.holidays_for("United States").clone()
}

/// Benchmark: range_info over spans of increasing length.
fn bench_range_info(c: &mut Criterion) {
    let holidays = us_holidays();
    let start = date(2026, 1, 1);

    let mut group = c.benchmark_group("range_info");
    for days in [1u64, 7, 31, 365].iter() {
        let end = start + chrono::Days::new(days - 1);
        group.throughput(Throughput::Elements(*days));
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, _| {
            b.iter(|| black_box(range_info(black_box(start), black_box(end), &holidays)))
        });
    }
    group.finish();
}

/// Benchmark: days_used over a full-year ledger.
fn bench_days_used(c: &mut Criterion) {
    let holidays = us_holidays();
    let ledger: TimeOffLedger = dates_in_range(date(2026, 1, 1), date(2026, 12, 31))
        .into_iter()
        .collect();

    let mut group = c.benchmark_group("days_used");
    group.throughput(Throughput::Elements(ledger.len() as u64));
    group.bench_function("full_year", |b| {
        b.iter(|| black_box(days_used(black_box(&ledger), &holidays)))
    });
    group.finish();
}

/// Benchmark: committing a two-week range into a half-full ledger.
fn bench_commit(c: &mut Criterion) {
    let ledger: TimeOffLedger = dates_in_range(date(2026, 1, 1), date(2026, 6, 30))
        .into_iter()
        .collect();
    let span = dates_in_range(date(2026, 6, 22), date(2026, 7, 5));

    c.bench_function("commit_two_weeks", |b| {
        b.iter(|| black_box(commit_time_off(ledger.clone(), black_box(&span))))
    });
}

/// Benchmark: range preview through the HTTP router.
fn bench_range_preview_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let calendar = HolidayLoader::load("./config/holidays").expect("Failed to load holidays");
    let planner = Planner::new(calendar, Arc::new(MemoryStore::new()));
    planner
        .create_profile("bench", "United States", 25, Vec::new())
        .expect("Failed to create profile");
    let router = create_router(AppState::new(planner));
    let body = serde_json::json!({"start": "2026-12-21", "end": "2027-01-08"}).to_string();

    c.bench_function("range_preview_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/users/bench/range-preview")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_range_info,
    bench_days_used,
    bench_commit,
    bench_range_preview_request,
);
criterion_main!(benches);
