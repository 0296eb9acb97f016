//! Performance benchmarks for the payroll engine.
//!
//! Covers the engine entry points called directly, the bracket evaluator
//! across the whole table, and a full HTTP round trip.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{compute_bonus, compute_net_salary, evaluate_tax};
use payroll_engine::config::ConfigLoader;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/ar_2026").expect("Failed to load config")
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Benchmark: single bonus calculation.
fn bench_bonus(c: &mut Criterion) {
    let loader = load_config();
    let settings = *loader.config().bonus();
    let entry = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
    let calc = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

    c.bench_function("compute_bonus", |b| {
        b.iter(|| {
            black_box(compute_bonus(
                black_box(dec("600000")),
                black_box(entry),
                black_box(calc),
                &settings,
            ))
        })
    });
}

/// Benchmark: single net salary calculation, with and without income tax.
fn bench_net_salary(c: &mut Criterion) {
    let loader = load_config();
    let config = loader.config();

    let mut group = c.benchmark_group("compute_net_salary");
    for gross in ["500000", "5000000", "12000000"] {
        let amount = dec(gross);
        group.bench_with_input(BenchmarkId::new("gross", gross), &amount, |b, amount| {
            b.iter(|| black_box(compute_net_salary(*amount, true, 1, config)))
        });
    }
    group.finish();
}

/// Benchmark: bracket evaluation across every bracket of the table.
fn bench_evaluate_tax(c: &mut Criterion) {
    let loader = load_config();
    let table = loader.config().bracket_table();
    let amounts: Vec<Decimal> = (0..100)
        .map(|i| Decimal::from(i * 100_000))
        .collect();

    let mut group = c.benchmark_group("evaluate_tax");
    group.throughput(Throughput::Elements(amounts.len() as u64));
    group.bench_function("sweep_0_to_10m", |b| {
        b.iter(|| {
            for amount in &amounts {
                black_box(evaluate_tax(*amount, table));
            }
        })
    });
    group.finish();
}

/// Benchmark: POST /net-salary through the router.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = serde_json::json!({
        "gross_salary": "5000000",
        "has_union": true,
        "dependents_count": 2
    })
    .to_string();

    c.bench_function("http_net_salary", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/net-salary")
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
    bench_bonus,
    bench_net_salary,
    bench_evaluate_tax,
    bench_http_round_trip,
);
criterion_main!(benches);
