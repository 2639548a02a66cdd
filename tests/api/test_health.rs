//! Index and health endpoints.

use super::test_helpers::*;

#[actix_rt::test]
async fn test_health() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}

#[actix_rt::test]
async fn test_db_health_reports_reachable() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, "/db-health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "reachable");
}

#[actix_rt::test]
async fn test_index_points_at_docs() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, 200);
    assert_eq!(body["docs"], "/docs/");
}
