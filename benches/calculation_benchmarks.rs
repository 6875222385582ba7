//! Performance benchmarks for the compensation engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single-row report: < 1ms mean
//! - Report with 100 rows: < 10ms mean
//! - Report with 1000 rows: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use compensation_engine::api::{AppState, ReportRequest, create_router};
use compensation_engine::calculation::resolve_compensation;
use compensation_engine::config::ConfigLoader;
use compensation_engine::models::RoleClass;

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a report request with a specified number of rows.
fn create_request_with_rows(row_count: usize) -> ReportRequest {
    let rows: Vec<serde_json::Value> = (0..row_count)
        .map(|i| {
            serde_json::json!({
                "id": format!("row_{:04}", i + 1),
                "name": format!("Bench row {}", i + 1),
                "role_class": if i % 5 == 0 { "patron" } else { "employee" },
                "activity_income": format!("{}", 5000 + (i * 137) % 90000),
                "invoice_income": "2500",
                "sales_income": "1500"
            })
        })
        .collect();

    let request_json = serde_json::json!({
        "rows": rows,
        "declared_balance": "350000",
        "deductible_expenses": "12000",
        "withdrawals": "4000"
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

/// Benchmark: direct compensation resolution, no HTTP layer.
///
/// Target: < 10μs mean
fn bench_resolve_compensation(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let table = config.compensation().clone();
    let amount = Decimal::from(37500);

    c.bench_function("resolve_compensation", |b| {
        b.iter(|| {
            black_box(resolve_compensation(
                black_box(amount),
                &table,
                RoleClass::Employee,
            ))
        })
    });
}

/// Benchmark: single-row report through the full HTTP stack.
///
/// Target: < 1ms mean
fn bench_single_row_report(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let request = create_request_with_rows(1);
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("single_row_report", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/report")
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

/// Benchmark: various row counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for row_count in [1, 10, 100, 1000].iter() {
        let router = create_router(state.clone());
        let request = create_request_with_rows(*row_count);
        let body = serde_json::to_string(&request).unwrap();

        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::new("rows", row_count), row_count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/report")
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

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_compensation,
    bench_single_row_report,
    bench_scaling,
);
criterion_main!(benches);
