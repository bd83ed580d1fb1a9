//! Contract tests for the Regional Dashboard API
//!
//! Validates GET /reports/regional-dashboard: the `columns` / `result`
//! payload the report viewer consumes, filter handling and error envelopes.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{test, web, App};
use rust_decimal_macros::dec;
use serde_json::Value;

use helpers::*;
use regional_dashboard::middleware::json_error_handler;
use regional_dashboard::reports::controllers::configure;
use regional_dashboard::reports::models::GoalCategories;
use regional_dashboard::reports::ReportService;

fn ledger() -> FixtureLedger {
    FixtureLedger::new()
        .with_sales_person("Bea", true)
        .with_sales_person("Al", true)
        .with_sales_person("Gone", false)
        .with_item("SCALPEL", "Products")
        .with_item("SIL-KIT", "SIL")
        .with_target("Al", "Products", Some(dec!(7000)))
        .with_target("Al", "SIL", Some(dec!(400)))
        .with_invoice(
            "SINV-1",
            date(2025, 1, 15),
            SUBMITTED,
            &["Al"],
            &[("SCALPEL", dec!(2700)), ("SIL-KIT", dec!(300))],
        )
        .with_invoice("SINV-2", date(2025, 2, 15), SUBMITTED, &["Bea"], &[("SCALPEL", dec!(50))])
}

async fn get_json(uri: &str, ledger: FixtureLedger) -> (u16, Value) {
    let service = ReportService::new(Arc::new(ledger), GoalCategories::default());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(web::QueryConfig::default().error_handler(json_error_handler))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// Test: column schema matches the viewer contract
#[actix_web::test]
async fn test_column_schema() {
    let (status, body) = get_json("/reports/regional-dashboard", ledger()).await;
    assert_eq!(status, 200);

    let columns = body["columns"].as_array().unwrap();
    let expected = [
        ("sales_person", "REP", "Link", 180),
        ("total_sales", "Current Account Rev", "Currency", 150),
        ("sales_goal", "Account Goal", "Currency", 130),
        ("current_sil", "Current SIL", "Currency", 130),
        ("sil_goal", "Goal SIL", "Currency", 130),
        ("sales_goal_percent", "REV Goal", "Data", 120),
        ("sil_goal_percent", "SIL Goal", "Data", 120),
    ];
    assert_eq!(columns.len(), expected.len());

    for (column, (fieldname, label, fieldtype, width)) in columns.iter().zip(expected) {
        assert_eq!(column["fieldname"], fieldname);
        assert_eq!(column["label"], label);
        assert_eq!(column["fieldtype"], fieldtype);
        assert_eq!(column["width"], width);
    }
    assert_eq!(columns[0]["options"], "Sales Person");
}

/// Test: rows carry formatted figures, in sales person order
#[actix_web::test]
async fn test_rows() {
    let (status, body) = get_json("/reports/regional-dashboard", ledger()).await;
    assert_eq!(status, 200);

    let rows = body["result"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["sales_person"], "Al");
    assert_eq!(rows[1]["sales_person"], "Bea");

    let al = &rows[0];
    assert_eq!(al["total_sales"], "3000");
    assert_eq!(al["sales_goal"], "7000");
    assert_eq!(al["current_sil"], "300");
    assert_eq!(al["sil_goal"], "400");
    assert_eq!(al["sales_goal_percent"], "42.86%");
    assert_eq!(al["sil_goal_percent"], "75%");
    assert_eq!(al["sales_goal_indicator"], "below");
    assert_eq!(al["sil_goal_indicator"], "near");

    let bea = &rows[1];
    assert_eq!(bea["sales_goal"], "0");
    assert_eq!(bea["sales_goal_percent"], "0%");
    assert_eq!(bea["sales_goal_indicator"], "idle");
}

/// Test: date filters narrow the window; unknown filters are ignored
#[actix_web::test]
async fn test_date_filters() {
    let (status, body) = get_json(
        "/reports/regional-dashboard?from_date=2025-02-01&to_date=2025-02-28&company=SurgiCo&fiscal_year=2025",
        ledger(),
    )
    .await;
    assert_eq!(status, 200);

    let rows = body["result"].as_array().unwrap();
    assert_eq!(rows[0]["sales_person"], "Al");
    assert_eq!(rows[0]["total_sales"], "0");
    assert_eq!(rows[1]["total_sales"], "50");
}

/// Test: blank dates mean all time
#[actix_web::test]
async fn test_blank_dates() {
    let (status, body) =
        get_json("/reports/regional-dashboard?from_date=&to_date=", ledger()).await;
    assert_eq!(status, 200);
    assert_eq!(body["result"][0]["total_sales"], "3000");
}

/// Test: no enabled sales persons is an empty result, not an error
#[actix_web::test]
async fn test_empty_result() {
    let (status, body) = get_json("/reports/regional-dashboard", FixtureLedger::new()).await;
    assert_eq!(status, 200);
    assert_eq!(body["columns"].as_array().unwrap().len(), 7);
    assert!(body["result"].as_array().unwrap().is_empty());
}

/// Test: malformed dates are rejected with the error envelope
#[actix_web::test]
async fn test_invalid_date_rejected() {
    let (status, body) =
        get_json("/reports/regional-dashboard?from_date=15/01/2025", ledger()).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("from_date"));
}

/// Test: reversed window is rejected
#[actix_web::test]
async fn test_reversed_window_rejected() {
    let (status, body) = get_json(
        "/reports/regional-dashboard?from_date=2025-03-01&to_date=2025-01-01",
        ledger(),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"]["message"].as_str().is_some());
}

/// Test: query failures surface as server errors
#[actix_web::test]
async fn test_query_failure_is_server_error() {
    let (status, body) =
        get_json("/reports/regional-dashboard", ledger().failing_for("Bea")).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"]["code"], 500);
}
