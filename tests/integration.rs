//! Integration tests for the overtime engine HTTP API.
//!
//! This test suite covers:
//! - Weekly summaries (daily thresholds, weekly crossover, seventh day across weeks)
//! - Clocked entries and rounding
//! - Rate resolution (request override, per-worker, file default)
//! - Multi-job day allocation
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use overtime_engine::api::{AppState, create_router};
use overtime_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn manual(id: &str, date: &str, hours: &str) -> Value {
    json!({ "id": id, "date": date, "hours": hours })
}

fn job(id: &str, job_id: &str, date: &str, hours: &str) -> Value {
    json!({ "id": id, "job_id": job_id, "date": date, "hours": hours })
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected a decimal string, got {}", value));
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

fn assert_day(result: &Value, date: &str, regular: &str, overtime: &str, double_time: &str) {
    let day = &result["calculation"]["days"][date];
    assert!(!day.is_null(), "No record for {}", date);
    assert_decimal(&day["regular_hours"], regular);
    assert_decimal(&day["overtime_hours"], overtime);
    assert_decimal(&day["double_time_hours"], double_time);
}

// =============================================================================
// SECTION 1: Weekly summary
// =============================================================================

#[tokio::test]
async fn test_week_daily_overtime_and_double_time() {
    // wkr_001 at $32.50: Mon 10h (8/2/0), Tue 14h (8/4/2)
    // Pay: 16 x 32.50 + 6 x 48.75 + 2 x 65.00 = 520 + 292.50 + 130 = 942.50
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "week_of": "2026-03-02",
        "entries": [
            manual("te_1", "2026-03-02", "10"),
            manual("te_2", "2026-03-03", "14")
        ]
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["worker_id"], "wkr_001");
    assert_eq!(result["week"]["start_date"], "2026-03-02");
    assert_eq!(result["week"]["end_date"], "2026-03-08");
    assert_day(&result, "2026-03-02", "8", "2", "0");
    assert_day(&result, "2026-03-03", "8", "4", "2");
    assert_decimal(&result["calculation"]["weekly_total"], "24");
    assert_decimal(&result["pay"]["total_pay"], "942.50");
    assert!(result["calculation_id"].is_string());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_week_weekly_crossover_with_settings_override() {
    // Daily rules off: 38 hours Mon-Thu, Friday's 4 hours split 2 regular / 2 overtime
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "settings": { "use_daily_ot": false },
        "week_of": "2026-03-06",
        "entries": [
            manual("te_1", "2026-03-02", "10"),
            manual("te_2", "2026-03-03", "10"),
            manual("te_3", "2026-03-04", "10"),
            manual("te_4", "2026-03-05", "8"),
            manual("te_5", "2026-03-06", "4")
        ]
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_day(&result, "2026-03-02", "10", "0", "0");
    assert_day(&result, "2026-03-06", "2", "2", "0");
    assert_decimal(&result["calculation"]["weekly_regular"], "40");
    assert_decimal(&result["calculation"]["weekly_overtime"], "2");
    // 40 x 32.50 + 2 x 48.75
    assert_decimal(&result["pay"]["total_pay"], "1397.50");

    let steps = result["calculation"]["audit_steps"].as_array().unwrap();
    assert!(
        steps
            .iter()
            .any(|step| step["rule_id"] == "weekly_reclassification" && step["date"] == "2026-03-06")
    );
}

#[tokio::test]
async fn test_week_seventh_day_from_previous_week_history() {
    // Wed 25 Feb - Mon 2 Mar worked, Tuesday 3 Mar is the seventh consecutive day
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "week_of": "2026-03-03",
        "entries": [
            manual("te_p1", "2026-02-25", "8"),
            manual("te_p2", "2026-02-26", "8"),
            manual("te_p3", "2026-02-27", "8"),
            manual("te_p4", "2026-02-28", "8"),
            manual("te_p5", "2026-03-01", "8"),
            manual("te_1", "2026-03-02", "8"),
            manual("te_2", "2026-03-03", "6")
        ]
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let days = result["calculation"]["days"].as_object().unwrap();
    assert_eq!(days.len(), 2, "history outside the week is not reported");

    assert_day(&result, "2026-03-02", "8", "0", "0");
    assert_eq!(result["calculation"]["days"]["2026-03-02"]["consecutive_day"], 6);

    assert_day(&result, "2026-03-03", "0", "6", "0");
    assert_eq!(result["calculation"]["days"]["2026-03-03"]["consecutive_day"], 7);
    assert_eq!(result["calculation"]["days"]["2026-03-03"]["is_seventh_day"], true);
    assert_decimal(&result["calculation"]["weekly_total"], "14");
}

#[tokio::test]
async fn test_week_clocked_entry_with_unpaid_break() {
    // 07:00-17:00 with a 30 minute unpaid lunch = 9.5 hours
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "week_of": "2026-03-02",
        "entries": [{
            "id": "te_1",
            "clock_in": "2026-03-02T07:00:00",
            "clock_out": "2026-03-02T17:00:00",
            "breaks": [{
                "start_time": "2026-03-02T12:00:00",
                "end_time": "2026-03-02T12:30:00",
                "is_paid": false
            }]
        }]
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_day(&result, "2026-03-02", "8", "1.5", "0");
}

#[tokio::test]
async fn test_week_rounding_to_quarter_hour() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "settings": { "rounding_interval": 15, "rounding_type": "nearest" },
        "week_of": "2026-03-02",
        "entries": [manual("te_1", "2026-03-02", "7.9")]
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_day(&result, "2026-03-02", "8", "0", "0");
    assert_decimal(&result["calculation"]["days"]["2026-03-02"]["total_hours"], "8");
}

#[tokio::test]
async fn test_week_request_rates_override_configuration() {
    // Same 10 hour day, priced at $20 / $30
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001", "rates": { "regular_rate": "20.00" } },
        "week_of": "2026-03-02",
        "entries": [manual("te_1", "2026-03-02", "10")]
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["pay"]["regular_pay"], "160");
    assert_decimal(&result["pay"]["overtime_pay"], "60");
    assert_decimal(&result["pay"]["total_pay"], "220");
}

#[tokio::test]
async fn test_week_explicit_configured_rates() {
    // wkr_002: $30 regular, explicit $45 overtime and $60 double-time
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_002" },
        "week_of": "2026-03-02",
        "entries": [manual("te_1", "2026-03-02", "13")]
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    // 8 x 30 + 4 x 45 + 1 x 60
    assert_decimal(&result["pay"]["total_pay"], "480");
}

#[tokio::test]
async fn test_week_unlisted_worker_uses_default_rates() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_new" },
        "week_of": "2026-03-02",
        "entries": [manual("te_1", "2026-03-02", "8")]
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["pay"]["total_pay"], "200");
}

#[tokio::test]
async fn test_week_with_no_entries_is_empty() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "week_of": "2026-03-02",
        "entries": []
    });

    let (status, result) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation"]["days"].as_object().unwrap().is_empty());
    assert_decimal(&result["pay"]["total_pay"], "0");
}

// =============================================================================
// SECTION 2: Multi-job day allocation
// =============================================================================

#[tokio::test]
async fn test_allocate_two_jobs_proportionally() {
    // 10 hour day (8/2) across 6h and 4h jobs
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001", "rates": { "regular_rate": "20" } },
        "date": "2026-03-02",
        "job_entries": [
            job("te_a", "job_kitchen", "2026-03-02", "6"),
            job("te_b", "job_garage", "2026-03-02", "4")
        ],
        "day_total": "10"
    });

    let (status, result) = post(router, "/days/allocate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["day"]["regular_hours"], "8");
    assert_decimal(&result["day"]["overtime_hours"], "2");

    let allocations = result["allocations"].as_array().unwrap();
    assert_eq!(allocations.len(), 2);

    assert_eq!(allocations[0]["entry_id"], "te_a");
    assert_eq!(allocations[0]["job_id"], "job_kitchen");
    assert_decimal(&allocations[0]["hours"]["regular_hours"], "4.8");
    assert_decimal(&allocations[0]["hours"]["overtime_hours"], "1.2");
    assert_decimal(&allocations[0]["estimated_pay"], "132");

    assert_eq!(allocations[1]["entry_id"], "te_b");
    assert_decimal(&allocations[1]["hours"]["regular_hours"], "3.2");
    assert_decimal(&allocations[1]["hours"]["overtime_hours"], "0.8");
    assert_decimal(&allocations[1]["estimated_pay"], "88");
}

#[tokio::test]
async fn test_allocate_after_weekly_threshold_reached() {
    // Mon-Thu 10h each (40 hours), Friday jobs are entirely overtime
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "date": "2026-03-06",
        "existing_entries": [
            manual("te_1", "2026-03-02", "10"),
            manual("te_2", "2026-03-03", "10"),
            manual("te_3", "2026-03-04", "10"),
            manual("te_4", "2026-03-05", "10")
        ],
        "job_entries": [
            job("te_a", "job_1", "2026-03-06", "3"),
            job("te_b", "job_2", "2026-03-06", "1")
        ]
    });

    let (status, result) = post(router, "/days/allocate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["day"]["regular_hours"], "0");
    assert_decimal(&result["day"]["overtime_hours"], "4");

    let allocations = result["allocations"].as_array().unwrap();
    assert_decimal(&allocations[0]["hours"]["overtime_hours"], "3");
    assert_decimal(&allocations[1]["hours"]["overtime_hours"], "1");
    // 3 x 48.75
    assert_decimal(&allocations[0]["estimated_pay"], "146.25");
}

#[tokio::test]
async fn test_allocate_seventh_day_jobs() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "date": "2026-03-08",
        "existing_entries": [
            manual("te_1", "2026-03-02", "8"),
            manual("te_2", "2026-03-03", "8"),
            manual("te_3", "2026-03-04", "8"),
            manual("te_4", "2026-03-05", "8"),
            manual("te_5", "2026-03-06", "8"),
            manual("te_6", "2026-03-07", "2")
        ],
        "job_entries": [
            job("te_a", "job_1", "2026-03-08", "5"),
            job("te_b", "job_2", "2026-03-08", "5")
        ]
    });

    let (status, result) = post(router, "/days/allocate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["day"]["is_seventh_day"], true);
    assert_decimal(&result["day"]["overtime_hours"], "8");
    assert_decimal(&result["day"]["double_time_hours"], "2");

    for allocation in result["allocations"].as_array().unwrap() {
        assert_decimal(&allocation["hours"]["overtime_hours"], "4");
        assert_decimal(&allocation["hours"]["double_time_hours"], "1");
        assert_eq!(allocation["hours"]["consecutive_day"], 7);
    }
}

#[tokio::test]
async fn test_allocate_zero_hour_jobs() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "date": "2026-03-02",
        "job_entries": [
            job("te_a", "job_1", "2026-03-02", "0"),
            job("te_b", "job_2", "2026-03-02", "0")
        ]
    });

    let (status, result) = post(router, "/days/allocate", request).await;

    assert_eq!(status, StatusCode::OK);
    for allocation in result["allocations"].as_array().unwrap() {
        assert_decimal(&allocation["hours"]["total_hours"], "0");
        assert_decimal(&allocation["estimated_pay"], "0");
    }
}

#[tokio::test]
async fn test_allocate_without_job_entries_is_rejected() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "date": "2026-03-03",
        "existing_entries": [manual("te_1", "2026-03-02", "8")],
        "job_entries": []
    });

    let (status, error) = post(router, "/days/allocate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ENTRY");
    assert!(error.get("day").is_none());
}

#[tokio::test]
async fn test_allocate_three_equal_jobs_conserve_day() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "date": "2026-03-02",
        "job_entries": [
            job("te_a", "job_1", "2026-03-02", "4"),
            job("te_b", "job_2", "2026-03-02", "4"),
            job("te_c", "job_3", "2026-03-02", "5")
        ]
    });

    let (status, result) = post(router, "/days/allocate", request).await;

    assert_eq!(status, StatusCode::OK);

    let sum = |field: &str| -> Decimal {
        result["allocations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| decimal(a["hours"][field].as_str().unwrap()))
            .sum()
    };
    let tolerance = decimal("0.000001");
    assert!((sum("regular_hours") - decimal("8")).abs() <= tolerance);
    assert!((sum("overtime_hours") - decimal("4")).abs() <= tolerance);
    assert!((sum("double_time_hours") - decimal("1")).abs() <= tolerance);
}

// =============================================================================
// SECTION 3: Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/weeks/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_worker_returns_validation_error() {
    let router = create_router_for_test();
    let request = json!({ "week_of": "2026-03-02", "entries": [] });

    let (status, error) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_negative_hours_returns_422() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "week_of": "2026-03-02",
        "entries": [manual("te_1", "2026-03-02", "-2")]
    });

    let (status, error) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "NEGATIVE_HOURS");
}

#[tokio::test]
async fn test_day_over_24_hours_returns_422() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "date": "2026-03-02",
        "job_entries": [
            job("te_a", "job_1", "2026-03-02", "16"),
            job("te_b", "job_2", "2026-03-02", "9")
        ]
    });

    let (status, error) = post(router, "/days/allocate", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "DAILY_HOURS_EXCEEDED");
}

#[tokio::test]
async fn test_job_split_mismatch_returns_422() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "date": "2026-03-02",
        "job_entries": [
            job("te_a", "job_1", "2026-03-02", "6"),
            job("te_b", "job_2", "2026-03-02", "3.5")
        ],
        "day_total": "10"
    });

    let (status, error) = post(router, "/days/allocate", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "ALLOCATION_MISMATCH");
}

#[tokio::test]
async fn test_entry_without_hours_returns_invalid_entry() {
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "week_of": "2026-03-02",
        "entries": [{ "id": "te_1", "date": "2026-03-02" }]
    });

    let (status, error) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ENTRY");
    assert!(error["message"].as_str().unwrap().contains("te_1"));
}

#[tokio::test]
async fn test_no_effective_rates_returns_rate_not_found() {
    // The earliest rate file is effective from 2026-01-01
    let router = create_router_for_test();
    let request = json!({
        "worker": { "id": "wkr_001" },
        "week_of": "2025-12-10",
        "entries": [manual("te_1", "2025-12-10", "8")]
    });

    let (status, error) = post(router, "/weeks/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "RATE_NOT_FOUND");
}
