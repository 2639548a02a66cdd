//! Shared test helpers for API tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use ois_reports_lib::api;
use ois_reports_lib::config::DatabaseSettings;
use ois_reports_lib::db::DbPool;
use serde_json::{Value, json};

/// Create a pool on a fresh in-memory database with the schema applied.
pub async fn create_test_pool() -> DbPool {
    let pool = DbPool::connect(&DatabaseSettings::in_memory())
        .await
        .expect("Failed to open in-memory database");
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    pool
}

/// Create the application with every route registered.
pub async fn create_test_app(
    pool: &DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(api::json_config())
            .configure(api::configure_routes),
    )
    .await
}

/// Send a request and return the status with the parsed body (`Null` when empty).
pub async fn send<S>(app: &S, method: &str, uri: &str, body: Option<Value>) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = match method {
        "GET" => test::TestRequest::get(),
        "POST" => test::TestRequest::post(),
        "PATCH" => test::TestRequest::patch(),
        "DELETE" => test::TestRequest::delete(),
        other => panic!("unsupported method {other}"),
    }
    .uri(uri);

    let req = match body {
        Some(body) => req.set_json(body),
        None => req,
    }
    .to_request();

    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let bytes = test::read_body(resp).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, body)
}

pub async fn get<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, "GET", uri, None).await
}

pub async fn post<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, "POST", uri, Some(body)).await
}

pub async fn patch<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, "PATCH", uri, Some(body)).await
}

pub async fn delete<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, "DELETE", uri, None).await
}

/// POST and return the new row's id, asserting 201.
pub async fn create<S>(app: &S, uri: &str, body: Value) -> i64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, body) = post(app, uri, body).await;
    assert_eq!(status, 201, "POST {} failed: {}", uri, body);
    body["id"].as_i64().expect("Created row has no id")
}

/// A customer with one filter plant holding components X and Y.
pub struct PlantFixture {
    pub client_id: i64,
    pub customer_id: i64,
    pub manufacturer_id: i64,
    pub plant_id: i64,
    pub x: i64,
    pub y: i64,
}

pub async fn create_plant_fixture<S>(app: &S, customer_name: &str) -> PlantFixture
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let client_id = create(app, "/clients", json!({ "name": "Stadtwerke" })).await;
    let customer_id = create(
        app,
        "/customers",
        json!({ "client_id": client_id, "name": customer_name }),
    )
    .await;
    let manufacturer_id = create(app, "/manufacturers", json!({ "name": "Hydrotec" })).await;
    let plant_id = create(
        app,
        &format!("/customers/{}/filter-plants", customer_id),
        json!({
            "description": format!("{} plant", customer_name),
            "year_built": 1998,
            "manufacturer_id": manufacturer_id,
        }),
    )
    .await;
    let x = create(
        app,
        &format!("/filter-plants/{}/components", plant_id),
        json!({ "name": "Pump" }),
    )
    .await;
    let y = create(
        app,
        &format!("/filter-plants/{}/components", plant_id),
        json!({ "name": "Valve" }),
    )
    .await;

    PlantFixture {
        client_id,
        customer_id,
        manufacturer_id,
        plant_id,
        x,
        y,
    }
}

/// Report creation URI for a fixture.
pub fn reports_uri(f: &PlantFixture) -> String {
    format!(
        "/customers/{}/filter-plants/{}/reports",
        f.customer_id, f.plant_id
    )
}

/// Build a `component_descriptions` array.
pub fn descriptions(items: &[(i64, &str)]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|(id, text)| json!({ "component_id": id, "description": text }))
            .collect(),
    )
}
