//! Client, customer, manufacturer, filter plant and component endpoints.

use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_client_crud() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, client) = post(&app, "/clients", json!({ "name": "  Stadtwerke  " })).await;
    assert_eq!(status, 201);
    assert_eq!(client["name"], "Stadtwerke");
    let uri = format!("/clients/{}", client["id"]);

    let (status, renamed) = patch(&app, &uri, json!({ "name": "Wasserverband" })).await;
    assert_eq!(status, 200);
    assert_eq!(renamed["name"], "Wasserverband");

    let (_, list) = get(&app, "/clients").await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, 204);
    assert!(body.is_null());

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Client not found");
}

#[actix_rt::test]
async fn test_blank_and_overlong_names_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post(&app, "/clients", json!({ "name": "   " })).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid input: Name is required");

    let (status, _) = post(&app, "/clients", json!({ "name": "x".repeat(256) })).await;
    assert_eq!(status, 400);

    let (status, body) = post(&app, "/manufacturers", json!({ "name": "m".repeat(101) })).await;
    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        "Invalid input: Name must be at most 100 characters"
    );
}

#[actix_rt::test]
async fn test_customer_requires_existing_client() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post(
        &app,
        "/customers",
        json!({ "client_id": 9999, "name": "Acme" }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Client not found");

    let (status, body) = post(&app, "/customers", json!({ "name": "Acme" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_customers_listed_per_client() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let a = create(&app, "/clients", json!({ "name": "A" })).await;
    let b = create(&app, "/clients", json!({ "name": "B" })).await;
    create(&app, "/customers", json!({ "client_id": a, "name": "A1" })).await;
    create(&app, "/customers", json!({ "client_id": a, "name": "A2" })).await;
    let b1 = create(&app, "/customers", json!({ "client_id": b, "name": "B1" })).await;

    let (status, list) = get(&app, &format!("/clients/{}/customers", a)).await;
    assert_eq!(status, 200);
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A1", "A2"]);

    let (_, all) = get(&app, "/customers").await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, renamed) = patch(
        &app,
        &format!("/customers/{}", b1),
        json!({ "name": "B-one" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(renamed["client_id"], b);

    let (status, _) = get(&app, "/clients/9999/customers").await;
    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_filter_plant_validation() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;
    let uri = format!("/customers/{}/filter-plants", f.customer_id);

    let (status, body) = post(
        &app,
        &uri,
        json!({ "description": "Old", "year_built": 1799, "manufacturer_id": f.manufacturer_id }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        "Invalid input: Year built must be between 1800 and 2100"
    );

    let (status, body) = post(
        &app,
        &uri,
        json!({ "description": "New", "year_built": 2001, "manufacturer_id": 9999 }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Manufacturer not found");

    let (status, body) = post(
        &app,
        "/customers/9999/filter-plants",
        json!({ "description": "New", "year_built": 2001, "manufacturer_id": f.manufacturer_id }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Customer not found");

    let (_, plants) = get(&app, &uri).await;
    assert_eq!(plants.as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_filter_plant_update_keeps_customer() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;
    let other_maker = create(&app, "/manufacturers", json!({ "name": "Aquafil" })).await;

    let (status, plant) = patch(
        &app,
        &format!("/filter-plants/{}", f.plant_id),
        json!({ "description": " Renovated ", "year_built": 2010, "manufacturer_id": other_maker }),
    )
    .await;
    assert_eq!(status, 200, "{}", plant);
    assert_eq!(plant["description"], "Renovated");
    assert_eq!(plant["year_built"], 2010);
    assert_eq!(plant["manufacturer_id"], other_maker);
    assert_eq!(plant["customer_id"], f.customer_id);

    let (_, by_new) = get(&app, &format!("/manufacturers/{}/filter-plants", other_maker)).await;
    assert_eq!(by_new.as_array().unwrap().len(), 1);
    let (_, by_old) = get(
        &app,
        &format!("/manufacturers/{}/filter-plants", f.manufacturer_id),
    )
    .await;
    assert!(by_old.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_component_crud() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let f = create_plant_fixture(&app, "Acme").await;

    let (_, list) = get(&app, &format!("/filter-plants/{}/components", f.plant_id)).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Pump", "Valve"]);

    let (status, component) = patch(
        &app,
        &format!("/components/{}", f.x),
        json!({ "name": "Main pump" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(component["name"], "Main pump");
    assert_eq!(component["filter_plant_id"], f.plant_id);

    let (status, _) = get(&app, "/filter-plants/9999/components").await;
    assert_eq!(status, 404);
    let (status, _) = post(
        &app,
        "/filter-plants/9999/components",
        json!({ "name": "Pump" }),
    )
    .await;
    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_manufacturer_lookup() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let id = create(&app, "/manufacturers", json!({ "name": "Hydrotec" })).await;
    let (status, body) = get(&app, &format!("/manufacturers/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Hydrotec");

    let (status, _) = get(&app, "/manufacturers/9999").await;
    assert_eq!(status, 404);
    let (status, _) = get(&app, "/manufacturers/9999/filter-plants").await;
    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_seed_initial_data_runs_once() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    assert!(pool.seed_initial_data().await.unwrap());
    assert!(!pool.seed_initial_data().await.unwrap());

    let (_, customers) = get(&app, "/customers").await;
    let customers = customers.as_array().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["name"], "Initial Customer");

    let (_, clients) = get(&app, "/clients").await;
    assert_eq!(clients[0]["name"], "Initial Client");
}
