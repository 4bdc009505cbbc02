use poem::{http::StatusCode, test::TestClient};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    core::test_utils::{generate_test_app_state, generate_test_config, TEST_ADMIN_CODE},
    factory::about::AboutFactory,
    init_openapi_route,
    schema::about::AboutDetail,
};

#[sqlx::test]
async fn test_get_about_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When empty
    let resp = cli
        .get("/api/admin/about/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect empty
    resp.assert_status(StatusCode::NOT_FOUND);

    // When
    let mut factory = AboutFactory::new();
    let about = factory.generate_one(&app_state.db, ()).await?;
    let resp = cli
        .get("/api/admin/about/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    resp.assert_json(&json!(AboutDetail::from(about))).await;
    Ok(())
}

#[sqlx::test]
async fn test_create_about_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);
    let payload = json!({
        "bio": "Designer working across brand and motion.",
        "skills": ["Branding", "Illustration"],
        "experience": [{
            "company": "Studio North",
            "role": "Senior Designer",
            "start": "2019"
        }],
        "hero": { "headline": "Design with intent" }
    });

    // When
    let resp = cli
        .post("/api/admin/about/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&payload)
        .send()
        .await;
    let second = cli
        .post("/api/admin/about/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&payload)
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::CREATED);
    let json = resp.json().await;
    let body = json.value().object();
    body.get("bio")
        .assert_string("Designer working across brand and motion.");
    body.get("hero")
        .object()
        .get("headline")
        .assert_string("Design with intent");
    second.assert_status(StatusCode::BAD_REQUEST);
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.about")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(count.0, 1);
    Ok(())
}

#[sqlx::test]
async fn test_create_about_api_validation(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .post("/api/admin/about/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "bio": "   " }))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test]
async fn test_update_about_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = AboutFactory::new();
    let about = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .put(format!("/api/admin/about/{}", about.id))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "skills": ["Type design"], "hero": null }))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let json = resp.json().await;
    let body = json.value().object();
    body.get("bio").assert_string(&about.bio);
    body.get("skills").assert_string_array(&["Type design"]);
    body.get("hero").assert_null();
    Ok(())
}

#[sqlx::test]
async fn test_update_and_delete_about_api_not_found(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let update = cli
        .put("/api/admin/about/not-a-uuid")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "bio": "x" }))
        .send()
        .await;
    let delete = cli
        .delete("/api/admin/about/0190f5d2-0000-7000-8000-000000000000")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect
    update.assert_status(StatusCode::NOT_FOUND);
    delete.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test]
async fn test_delete_about_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = AboutFactory::new();
    let about = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let unauthorized = cli
        .delete(format!("/api/admin/about/{}", about.id))
        .header("X-Admin-Code", "9999")
        .send()
        .await;
    let resp = cli
        .delete(format!("/api/admin/about/{}", about.id))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect
    unauthorized.assert_status(StatusCode::UNAUTHORIZED);
    resp.assert_status(StatusCode::NO_CONTENT);
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.about")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(count.0, 0);
    Ok(())
}
