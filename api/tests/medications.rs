mod common;

use axum::http::StatusCode;
use common::OfflineApp;
use serde_json::{Value, json};
use test_context::test_context;
use uuid::Uuid;

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_create_medication_rejects_times_per_day_out_of_range(ctx: &mut OfflineApp) {
    for times_per_day in [0, 25] {
        let response = ctx
            .server
            .post("/medications")
            .json(&json!({ "name": "Metformin", "timesPerDay": times_per_day }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "timesPerDay must be between 1 and 24" }));
    }
}

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_create_medication_requires_name(ctx: &mut OfflineApp) {
    let response = ctx.server.post("/medications").json(&json!({ "name": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Name is required" }));
}

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_create_medication_blank_name_is_rejected_before_storage(ctx: &mut OfflineApp) {
    let response = ctx
        .server
        .post("/medications")
        .json(&json!({ "name": "   ", "timesPerDay": 2 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Name is required" }));
}

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_create_medication_rejects_bad_date(ctx: &mut OfflineApp) {
    ctx.server
        .post("/medications")
        .json(&json!({ "name": "Metformin", "expiryDate": "soon" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_create_medication_accepts_loose_optional_fields(ctx: &mut OfflineApp) {
    for body in [
        json!({ "name": "A", "doseTimes": null }),
        json!({ "name": "A", "timesPerDay": "3" }),
        json!({ "name": "A", "timesPerDay": "", "doseTimes": "" }),
    ] {
        // Past validation, the request only fails on the unreachable database.
        ctx.server
            .post("/medications")
            .json(&body)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_storage_failures_are_server_errors(ctx: &mut OfflineApp) {
    ctx.server
        .get("/medications")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    ctx.server
        .get("/medications/adherence")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    ctx.server
        .post("/medications")
        .json(&json!({ "name": "Metformin", "timesPerDay": 2, "doseTimes": ["08:00", "20:00"] }))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    ctx.server
        .delete("/medications")
        .json(&json!({ "id": Uuid::new_v4() }))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_delete_medication_requires_id(ctx: &mut OfflineApp) {
    let response = ctx.server.delete("/medications").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing id" }));
}

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_mark_dose_requires_med_id(ctx: &mut OfflineApp) {
    let response = ctx.server.post("/medications/mark").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing medId" }));
}

#[test_context(OfflineApp)]
#[tokio::test]
async fn test_mark_dose_rejects_invalid_med_id(ctx: &mut OfflineApp) {
    let response = ctx
        .server
        .post("/medications/mark")
        .json(&json!({ "medId": "not-a-uuid" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_routes_honor_root_path() {
    let app = OfflineApp::with_args(&["--server-root-path", "/api"]).await;

    let response = app.server.post("/api/medications/mark").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    app.server
        .post("/medications/mark")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
