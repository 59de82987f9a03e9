//! Performance benchmarks for the salon payroll engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single salary calculation (library): < 50μs mean
//! - Single salary request (HTTP): < 1ms mean
//! - Full roster for one month: < 5ms mean
//! - A year of payroll for the roster: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use salon_payroll::api::{AppState, create_router};
use salon_payroll::calculation::{DEFAULT_MEAL_ALLOWANCE_PER_DAY, compute_salary};
use salon_payroll::calendar::{classify_day, month_days};
use salon_payroll::config::ConfigLoader;
use salon_payroll::models::{HolidayCalendar, NagerHoliday, Receipt};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/salon").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a month of daily receipts for the given employee.
fn create_receipts(employee_id: &str, year: i32, month: u32, count: u32) -> Vec<Receipt> {
    (1..=count)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| Receipt {
            employee_id: employee_id.to_string(),
            date,
            amount: 85.0,
        })
        .collect()
}

/// Creates a salary request body with the given number of receipts.
fn create_request_body(receipt_count: u32) -> String {
    let receipts: Vec<serde_json::Value> = (1..=receipt_count)
        .map(|i| {
            serde_json::json!({
                "date": format!("2022-09-{:02}", (i % 28) + 1),
                "amount": 85.0
            })
        })
        .collect();

    let request = serde_json::json!({
        "employee": {
            "name": "Carla",
            "title": "hairdresser",
            "base_salary": 627.45,
            "commission_percent": 0.15,
            "threshold_for_commission": 1410.0
        },
        "year": 2022,
        "month": 9,
        "receipts": receipts,
        "vacations": ["2022-09-12", "2022-09-13"],
        "holidays": []
    });

    serde_json::to_string(&request).expect("Failed to create request")
}

/// Benchmark: single salary calculation through the library.
///
/// Target: < 50μs mean
fn bench_compute_salary(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/salon").expect("Failed to load config");
    let carla = config
        .get_employee_by_name("Carla")
        .expect("Carla missing from roster")
        .clone();
    let receipts = create_receipts(&carla.id, 2022, 9, 28);

    c.bench_function("compute_salary", |b| {
        b.iter(|| {
            let result = compute_salary(
                black_box(&carla),
                black_box(&receipts),
                2,
                1,
                2022,
                9,
                DEFAULT_MEAL_ALLOWANCE_PER_DAY,
            );
            black_box(result)
        })
    });
}

/// Benchmark: single salary request through the HTTP router.
///
/// Target: < 1ms mean
fn bench_salary_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body(28);

    c.bench_function("salary_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary")
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

/// Benchmark: the full roster for one month through the library.
///
/// Target: < 5ms mean
fn bench_full_roster_month(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/salon").expect("Failed to load config");
    let staff: Vec<_> = config
        .active_employees(2022, 9, true)
        .into_iter()
        .cloned()
        .collect();

    let mut group = c.benchmark_group("roster");
    group.throughput(Throughput::Elements(staff.len() as u64));

    group.bench_function("full_roster_month", |b| {
        b.iter(|| {
            let results: Vec<_> = staff
                .iter()
                .map(|employee| {
                    let receipts = create_receipts(&employee.id, 2022, 9, 28);
                    compute_salary(
                        employee,
                        &receipts,
                        0,
                        0,
                        2022,
                        9,
                        DEFAULT_MEAL_ALLOWANCE_PER_DAY,
                    )
                })
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: classifying every day of a month.
fn bench_month_classification(c: &mut Criterion) {
    let holidays = HolidayCalendar::from_api(
        2022,
        "PT",
        vec![NagerHoliday {
            date: "2022-12-25".to_string(),
            local_name: "Natal".to_string(),
            name: "Christmas Day".to_string(),
            global: true,
        }],
    );
    let vacation = NaiveDate::from_ymd_opt(2022, 12, 12).expect("valid date");

    c.bench_function("month_classification", |b| {
        b.iter(|| {
            let classes: Vec<_> = month_days(2022, 12)
                .map(|day| classify_day(day, black_box(&holidays), |d| d == vacation))
                .collect();
            black_box(classes)
        })
    });
}

/// Benchmark: scaling over receipt counts.
fn bench_receipt_scaling(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/salon").expect("Failed to load config");
    let carla = config
        .get_employee_by_name("Carla")
        .expect("Carla missing from roster")
        .clone();

    let mut group = c.benchmark_group("receipt_scaling");

    for receipt_count in [1u32, 7, 14, 28].iter() {
        let receipts = create_receipts(&carla.id, 2022, 9, *receipt_count);

        group.throughput(Throughput::Elements(*receipt_count as u64));
        group.bench_with_input(
            BenchmarkId::new("receipts", receipt_count),
            receipt_count,
            |b, _| {
                b.iter(|| {
                    let result = compute_salary(
                        black_box(&carla),
                        black_box(&receipts),
                        0,
                        0,
                        2022,
                        9,
                        DEFAULT_MEAL_ALLOWANCE_PER_DAY,
                    );
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_salary,
    bench_salary_request,
    bench_full_roster_month,
    bench_month_classification,
    bench_receipt_scaling,
);
criterion_main!(benches);
