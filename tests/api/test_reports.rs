//! Report lifecycle tests.

use actix_web::test;
use ois_reports_lib::db::reports as report_queries;
use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_create_report_appears_in_listing() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, report) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok"), (f.y, "leak")]) }),
    )
    .await;
    assert_eq!(status, 201, "{}", report);
    assert_eq!(report["completed"], false);
    assert_eq!(report["customer_id"], f.customer_id);
    assert_eq!(report["filter_plant_id"], f.plant_id);

    let (status, list) = get(&app, "/reports").await;
    assert_eq!(status, 200);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], report["id"]);
    assert_eq!(list[0]["completed"], false);
    assert_eq!(list[0]["customer_name"], "Acme");
    assert_eq!(list[0]["filter_plant_description"], "Acme plant");
}

#[actix_rt::test]
async fn test_create_trims_descriptions_and_keeps_order() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (_, report) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.y, "  leak  "), (f.x, "ok")]) }),
    )
    .await;

    let (status, detail) = get(&app, &format!("/reports/{}", report["id"])).await;
    assert_eq!(status, 200);
    let items = detail["components"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["component_id"], f.y);
    assert_eq!(items[0]["component_name"], "Valve");
    assert_eq!(items[0]["description"], "leak");
    assert_eq!(items[1]["component_id"], f.x);
    assert_eq!(items[1]["component_name"], "Pump");
}

#[actix_rt::test]
async fn test_create_with_foreign_component_persists_nothing() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;
    let other = create_plant_fixture(&app, "Globex").await;

    let (status, body) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok"), (other.x, "wrong plant")]) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
    assert_eq!(body["message"], "Invalid input: Invalid component selection");

    let (_, list) = get(&app, "/reports").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_create_with_unknown_component_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, body) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(9999, "ghost")]) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_create_with_duplicate_component_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, body) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok"), (f.x, "again")]) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid input: Invalid component selection");
}

#[actix_rt::test]
async fn test_create_with_empty_descriptions_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, body) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": [] }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
    assert_eq!(
        body["message"],
        "Invalid input: Component descriptions are required"
    );
}

#[actix_rt::test]
async fn test_create_with_blank_description_persists_nothing() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, body) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok"), (f.y, "   ")]) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid input: Description is required");

    let (_, list) = get(&app, "/reports").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_create_selection_checked_before_descriptions() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, body) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, " "), (9999, "ghost")]) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid input: Invalid component selection");
}

#[actix_rt::test]
async fn test_create_for_unknown_customer_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, body) = post(
        &app,
        &format!("/customers/9999/filter-plants/{}/reports", f.plant_id),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok")]) }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Customer not found");
}

#[actix_rt::test]
async fn test_create_for_plant_of_other_customer_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;
    let other = create_plant_fixture(&app, "Globex").await;

    let (status, body) = post(
        &app,
        &format!(
            "/customers/{}/filter-plants/{}/reports",
            f.customer_id, other.plant_id
        ),
        json!({ "component_descriptions": descriptions(&[(other.x, "ok")]) }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Filter plant not found");
}

#[actix_rt::test]
async fn test_create_with_malformed_body_is_invalid_input() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, body) = post(&app, &reports_uri(&f), json!({ "component_descriptions": "x" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_update_replaces_line_items() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (_, report) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok"), (f.y, "leak")]) }),
    )
    .await;
    let uri = format!("/reports/{}", report["id"]);

    let (status, detail) = patch(
        &app,
        &uri,
        json!({ "completed": false, "component_descriptions": descriptions(&[(f.y, "sealed")]) }),
    )
    .await;
    assert_eq!(status, 200, "{}", detail);
    assert_eq!(detail["completed"], false);
    let items = detail["components"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["component_id"], f.y);
    assert_eq!(items[0]["description"], "sealed");

    // The open report can still be edited.
    let (status, detail) = patch(
        &app,
        &uri,
        json!({ "completed": false, "component_descriptions": descriptions(&[(f.x, "a"), (f.y, "b")]) }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(detail["components"].as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_update_rejects_component_outside_report_plant() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;
    let other = create_plant_fixture(&app, "Globex").await;

    let (_, report) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok")]) }),
    )
    .await;
    let uri = format!("/reports/{}", report["id"]);

    let (status, body) = patch(
        &app,
        &uri,
        json!({ "completed": true, "component_descriptions": descriptions(&[(other.x, "x")]) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");

    // Nothing changed, the report is still open.
    let (_, detail) = get(&app, &uri).await;
    assert_eq!(detail["completed"], false);
    assert_eq!(detail["components"][0]["description"], "ok");
}

#[actix_rt::test]
async fn test_update_of_completed_report_is_invalid_state() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (_, report) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok")]) }),
    )
    .await;
    let uri = format!("/reports/{}", report["id"]);

    let (status, _) = patch(
        &app,
        &uri,
        json!({ "completed": true, "component_descriptions": descriptions(&[(f.x, "fixed")]) }),
    )
    .await;
    assert_eq!(status, 200);

    // Even an otherwise invalid payload reports the state error first.
    let (status, body) = patch(
        &app,
        &uri,
        json!({ "completed": false, "component_descriptions": [] }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_STATE");
    assert_eq!(body["message"], "Invalid state: Report is already completed");

    let (_, detail) = get(&app, &uri).await;
    assert_eq!(detail["completed"], true);
    let items = detail["components"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["description"], "fixed");
}

#[actix_rt::test]
async fn test_completion_write_only_applies_to_open_reports() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (_, report) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok")]) }),
    )
    .await;
    let id = report["id"].as_i64().unwrap() as i32;

    assert!(
        report_queries::set_completion_if_open(pool.connection(), id, true)
            .await
            .unwrap()
    );
    // A second writer loses the race.
    assert!(
        !report_queries::set_completion_if_open(pool.connection(), id, true)
            .await
            .unwrap()
    );

    let (status, body) = patch(
        &app,
        &format!("/reports/{}", id),
        json!({ "completed": true, "component_descriptions": descriptions(&[(f.x, "late")]) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_STATE");
}

#[actix_rt::test]
async fn test_unknown_report_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, "/reports/42").await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Report not found");

    let (status, _) = patch(
        &app,
        "/reports/42",
        json!({ "completed": true, "component_descriptions": [] }),
    )
    .await;
    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_listings_newest_first_and_scoped_by_customer() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let acme = create_plant_fixture(&app, "Acme").await;
    let globex = create_plant_fixture(&app, "Globex").await;

    let body = |id| json!({ "component_descriptions": descriptions(&[(id, "ok")]) });
    let first = create(&app, &reports_uri(&acme), body(acme.x)).await;
    let second = create(&app, &reports_uri(&globex), body(globex.x)).await;
    let third = create(&app, &reports_uri(&acme), body(acme.y)).await;

    let (_, all) = get(&app, "/reports").await;
    let ids: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, second, first]);

    let (status, scoped) = get(&app, &format!("/customers/{}/reports", acme.customer_id)).await;
    assert_eq!(status, 200);
    let ids: Vec<i64> = scoped
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, first]);
    assert!(
        scoped
            .as_array()
            .unwrap()
            .iter()
            .all(|r| r["customer_name"] == "Acme")
    );

    let (status, none) = get(&app, "/customers/9999/reports").await;
    assert_eq!(status, 200);
    assert!(none.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_inspection_round_trip() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (status, report) = post(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok"), (f.y, "leak")]) }),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(report["completed"], false);
    let uri = format!("/reports/{}", report["id"]);

    let (_, detail) = get(&app, &uri).await;
    assert_eq!(detail["components"].as_array().unwrap().len(), 2);

    let (status, detail) = patch(
        &app,
        &uri,
        json!({ "completed": true, "component_descriptions": descriptions(&[(f.x, "fixed")]) }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(detail["completed"], true);
    assert_eq!(detail["components"].as_array().unwrap().len(), 1);
    assert_eq!(detail["components"][0]["description"], "fixed");

    let (status, body) = patch(
        &app,
        &uri,
        json!({ "completed": true, "component_descriptions": descriptions(&[(f.x, "again")]) }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_STATE");
}

#[actix_rt::test]
async fn test_report_summary_fields_serialized() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let id = create(
        &app,
        &reports_uri(&f),
        json!({ "component_descriptions": descriptions(&[(f.x, "ok")]) }),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/reports/{}", id))
        .to_request();
    let detail: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    for field in [
        "id",
        "customer_id",
        "customer_name",
        "filter_plant_id",
        "filter_plant_description",
        "created_at",
        "completed",
        "components",
    ] {
        assert!(detail.get(field).is_some(), "missing field {}", field);
    }
}
