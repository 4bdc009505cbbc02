use chrono::{Duration, Local, Timelike};
use poem::{http::StatusCode, test::TestClient};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::{
    core::test_utils::{generate_test_app_state, generate_test_config, TEST_ADMIN_CODE},
    factory::project::ProjectFactory,
    init_openapi_route,
    model::project::Project,
    schema::project::ProjectDetail,
};

fn create_payload(slug: &str) -> Value {
    json!({
        "title": "Evergreen Brand Identity",
        "slug": slug,
        "category": "branding",
        "tags": ["logo", "identity"],
        "thumbnail": {
            "src": "https://cdn.example.com/evergreen/thumb.jpg",
            "alt": "Evergreen logo on kraft paper",
            "width": 1200,
            "height": 900
        },
        "images": [{
            "src": "https://cdn.example.com/evergreen/1.jpg",
            "alt": "Stationery set",
            "width": 1600,
            "height": 1200
        }],
        "client": "Evergreen Co",
        "year": 2024,
        "description": "A calm identity for a forest school.",
        "featured": true
    })
}

#[sqlx::test]
async fn test_list_project_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = ProjectFactory::<()>::new();
    factory.modified_many(|data, idx, _| Project {
        created_at: Local::now().fixed_offset().with_nanosecond(0).unwrap()
            - Duration::days(idx as i64),
        ..data.clone()
    });
    let projects = factory.generate_many(&app_state.db, 4, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .get("/api/admin/projects/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    // newest first, the factory ages each row by a day
    let expected: Vec<ProjectDetail> = projects.into_iter().map(Into::into).collect();
    resp.assert_json(&json!(expected)).await;
    Ok(())
}

#[sqlx::test]
async fn test_admin_routes_reject_wrong_code(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let list = cli
        .get("/api/admin/projects/")
        .header("X-Admin-Code", "0000")
        .send()
        .await;
    let create = cli
        .post("/api/admin/projects/")
        .header("X-Admin-Code", "12345")
        .body_json(&create_payload("evergreen"))
        .send()
        .await;

    // Expect
    list.assert_status(StatusCode::UNAUTHORIZED);
    create.assert_status(StatusCode::UNAUTHORIZED);
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.projects")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(count.0, 0);
    Ok(())
}

#[sqlx::test]
async fn test_create_project_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .post("/api/admin/projects/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&create_payload("evergreen-brand-identity"))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::CREATED);
    let json = resp.json().await;
    let body = json.value().object();
    body.get("slug").assert_string("evergreen-brand-identity");
    body.get("category_label").assert_string("Branding");
    body.get("featured").assert_bool(true);
    let row: (String, i32, bool) =
        sqlx::query_as("SELECT title, year, featured FROM public.projects WHERE slug = $1")
            .bind("evergreen-brand-identity")
            .fetch_one(&app_state.db)
            .await?;
    assert_eq!(row.0, "Evergreen Brand Identity");
    assert_eq!(row.1, 2024);
    assert!(row.2);
    Ok(())
}

#[sqlx::test]
async fn test_create_project_api_validation(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);
    let mut empty_alt = create_payload("empty-alt");
    empty_alt["thumbnail"]["alt"] = json!("");
    let mut zero_width = create_payload("zero-width");
    zero_width["images"][0]["width"] = json!(0);
    let mut no_images = create_payload("no-images");
    no_images["images"] = json!([]);
    let mut bad_category = create_payload("bad-category");
    bad_category["category"] = json!("sculpture");
    let bad_slug = create_payload("Not A Slug");

    for payload in [empty_alt, zero_width, no_images, bad_category, bad_slug] {
        // When
        let resp = cli
            .post("/api/admin/projects/")
            .header("X-Admin-Code", TEST_ADMIN_CODE)
            .body_json(&payload)
            .send()
            .await;

        // Expect
        resp.assert_status(StatusCode::BAD_REQUEST);
    }
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.projects")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(count.0, 0);
    Ok(())
}

#[sqlx::test]
async fn test_create_project_api_duplicate_slug(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);
    cli.post("/api/admin/projects/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&create_payload("evergreen"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    // When
    let resp = cli
        .post("/api/admin/projects/")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&create_payload("evergreen"))
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[sqlx::test]
async fn test_get_project_api_by_slug_or_id(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = ProjectFactory::new();
    let project = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let by_id = cli
        .get(format!("/api/admin/projects/{}", project.id))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;
    let by_slug = cli
        .get(format!("/api/admin/projects/{}", project.slug))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;
    let missing = cli
        .get("/api/admin/projects/does-not-exist")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect
    let expected = ProjectDetail::from(project);
    by_id.assert_status_is_ok();
    by_id.assert_json(&json!(expected)).await;
    by_slug.assert_status_is_ok();
    by_slug.assert_json(&json!(expected)).await;
    missing.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test]
async fn test_update_project_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = ProjectFactory::new();
    let project = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .put(format!("/api/admin/projects/{}", project.id))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({
            "title": "Renamed",
            "client": null,
            "challenge": "Tight deadline"
        }))
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    let row: (String, Option<String>, Option<String>, String, Option<i32>) = sqlx::query_as(
        "SELECT title, client, challenge, slug, year FROM public.projects WHERE id = $1",
    )
    .bind(project.id)
    .fetch_one(&app_state.db)
    .await?;
    assert_eq!(row.0, "Renamed");
    assert_eq!(row.1, None);
    assert_eq!(row.2, Some("Tight deadline".to_string()));
    assert_eq!(row.3, project.slug);
    assert_eq!(row.4, project.year);
    Ok(())
}

#[sqlx::test]
async fn test_update_project_api_invalid_and_missing(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = ProjectFactory::new();
    let project = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let invalid = cli
        .put(format!("/api/admin/projects/{}", project.id))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "images": [] }))
        .send()
        .await;
    let missing = cli
        .put("/api/admin/projects/0190f5d2-0000-7000-8000-000000000000")
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .body_json(&json!({ "title": "x" }))
        .send()
        .await;

    // Expect
    invalid.assert_status(StatusCode::BAD_REQUEST);
    missing.assert_status(StatusCode::NOT_FOUND);
    let images: (sqlx::types::Json<Vec<Value>>,) =
        sqlx::query_as("SELECT images FROM public.projects WHERE id = $1")
            .bind(project.id)
            .fetch_one(&app_state.db)
            .await?;
    assert_eq!(images.0.len(), project.images.len());
    Ok(())
}

#[sqlx::test]
async fn test_delete_project_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let mut factory = ProjectFactory::new();
    let project = factory.generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .delete(format!("/api/admin/projects/{}", project.slug))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;
    let again = cli
        .delete(format!("/api/admin/projects/{}", project.slug))
        .header("X-Admin-Code", TEST_ADMIN_CODE)
        .send()
        .await;

    // Expect
    resp.assert_status(StatusCode::NO_CONTENT);
    again.assert_status(StatusCode::NOT_FOUND);
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.projects")
        .fetch_one(&app_state.db)
        .await?;
    assert_eq!(count.0, 0);
    Ok(())
}
