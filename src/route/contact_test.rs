use poem::{http::StatusCode, test::TestClient};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    core::test_utils::{generate_test_app_state, generate_test_config, TEST_ADMIN_CODE},
    factory::contact::ContactFactory,
    init_openapi_route,
    schema::contact::ContactDetail,
};

#[sqlx::test]
async fn test_get_contact_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = ContactFactory::new();
    let contact = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .get("/api/admin/contact/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    resp.assert_json(&json!(ContactDetail::from(contact))).await;
    Ok(())
}

#[sqlx::test]
async fn test_create_contact_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let invalid = cli
        .post("/api/admin/contact/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "email": "not-an-email" }))
        .send()
        .await;
    let resp = cli
        .post("/api/admin/contact/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({
            "email": "hello@studio.dev",
            "socials": [{ "type": "behance", "url": "https://behance.net/studio" }]
        }))
        .send()
        .await;
    let second = cli
        .post("/api/admin/contact/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "email": "other@studio.dev" }))
        .send()
        .await;

    // Expect
    invalid.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_status(StatusCode::CREATED);
    let json = resp.json().await;
    let body = json.value().object();
    body.get("email").assert_string("hello@studio.dev");
    body.get("socials")
        .array()
        .get(0)
        .object()
        .get("type")
        .assert_string("behance");
    second.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test]
async fn test_update_contact_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = ContactFactory::new();
    let contact = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .put(format!("/api/admin/contact/{}", contact.id))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "phone": null, "address": "Lisbon" }))
        .send()
        .await;
    let invalid = cli
        .put(format!("/api/admin/contact/{}", contact.id))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "email": "" }))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    invalid.assert_status(StatusCode::BAD_REQUEST);
    let row: (String, Option<String>, Option<String>) =
        sqlx::query_as("SELECT email, phone, address FROM public.contact WHERE id = $1")
            .bind(contact.id)
            .fetch_one(&app_state.db)
            .await?;
    assert_eq!(row.0, contact.email);
    assert_eq!(row.1, None);
    assert_eq!(row.2, Some("Lisbon".to_string()));
    Ok(())
}

#[sqlx::test]
async fn test_delete_contact_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = ContactFactory::new();
    let contact = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .delete(format!("/api/admin/contact/{}", contact.id))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::NO_CONTENT);
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.contact")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(count.0, 0);
    Ok(())
}
