use chrono::{Duration, Local, Timelike};
use poem::{http::StatusCode, test::TestClient};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    core::test_utils::{generate_test_app_state, generate_test_config},
    factory::{about::AboutFactory, contact::ContactFactory, project::ProjectFactory},
    init_openapi_route,
    model::project::Project,
    schema::{
        about::AboutDetail,
        contact::ContactDetail,
        page::category_options,
        project::ProjectDetail,
    },
};

#[derive(Clone)]
struct Layout {
    categories: [&'static str; 6],
    featured: [bool; 6],
}

const LAYOUT: Layout = Layout {
    categories: ["branding", "branding", "print", "branding", "motion", "print"],
    featured: [true, false, true, true, true, false],
};

/// Six projects, index 0 newest.
async fn seed_projects(pool: &PgPool) -> anyhow::Result<Vec<Project>> {
    let mut factory = ProjectFactory::<Layout>::new();
    factory.modified_many(|data, idx, ext| Project {
        category: ext.categories[idx].to_string(),
        featured: ext.featured[idx],
        created_at: Local::now().fixed_offset().with_nanosecond(0).unwrap()
            - Duration::hours(idx as i64),
        ..data.clone()
    });
    factory.generate_many(pool, 6, LAYOUT).await
}

#[sqlx::test]
async fn test_home_page_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let projects = seed_projects(&app_state.db).await?;
    let about = AboutFactory::new().generate_one(&app_state.db, ()).await?;
    let contact = ContactFactory::new().generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/pages/home").send().await;

    // Expect
    resp.assert_status_is_ok();
    let about = AboutDetail::from(about);
    // featured, newest first, three at most
    let featured: Vec<ProjectDetail> = [0, 2, 3]
        .into_iter()
        .map(|idx| projects[idx].clone().into())
        .collect();
    resp.assert_json(&json!({
        "hero": about.hero,
        "bio": about.bio,
        "skills": about.skills,
        "featured_projects": featured,
        "contact": ContactDetail::from(contact),
    }))
    .await;
    Ok(())
}

#[sqlx::test]
async fn test_home_page_api_empty(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/pages/home").send().await;

    // Expect
    resp.assert_status_is_ok();
    resp.assert_json(&json!({
        "hero": null,
        "bio": null,
        "skills": [],
        "featured_projects": [],
        "contact": null,
    }))
    .await;
    Ok(())
}

#[sqlx::test]
async fn test_about_and_contact_page_api_unavailable(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let about = cli.get("/api/pages/about").send().await;
    let contact = cli.get("/api/pages/contact").send().await;

    // Expect
    about.assert_status_is_ok();
    about
        .assert_json(&json!({ "available": false, "about": null }))
        .await;
    contact.assert_status_is_ok();
    contact
        .assert_json(&json!({ "available": false, "contact": null }))
        .await;
    Ok(())
}

#[sqlx::test]
async fn test_about_page_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let about = AboutFactory::new().generate_one(&app_state.db, ()).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli.get("/api/pages/about").send().await;

    // Expect
    resp.assert_status_is_ok();
    resp.assert_json(&json!({
        "available": true,
        "about": AboutDetail::from(about),
    }))
    .await;
    Ok(())
}

#[sqlx::test]
async fn test_projects_page_api_filters(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let projects = seed_projects(&app_state.db).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let all = cli.get("/api/pages/projects").send().await;
    let print = cli
        .get("/api/pages/projects")
        .query("category", &"print")
        .send()
        .await;
    let limited = cli
        .get("/api/pages/projects")
        .query("category", &"all")
        .query("featured", &true)
        .query("limit", &2)
        .send()
        .await;
    let unknown = cli
        .get("/api/pages/projects")
        .query("category", &"sculpture")
        .send()
        .await;

    // Expect
    let pick = |idx: &[usize]| -> Vec<ProjectDetail> {
        idx.iter().map(|i| projects[*i].clone().into()).collect()
    };
    all.assert_status_is_ok();
    all.assert_json(&json!({
        "category": "all",
        "categories": category_options(),
        "projects": pick(&[0, 1, 2, 3, 4, 5]),
    }))
    .await;
    print.assert_status_is_ok();
    print
        .assert_json(&json!({
            "category": "print",
            "categories": category_options(),
            "projects": pick(&[2, 5]),
        }))
        .await;
    limited.assert_status_is_ok();
    limited
        .assert_json(&json!({
            "category": "all",
            "categories": category_options(),
            "projects": pick(&[0, 2]),
        }))
        .await;
    unknown.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test]
async fn test_project_page_api_related(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = generate_test_config();
    let app_state = generate_test_app_state(pool)?;
    let projects = seed_projects(&app_state.db).await?;
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let branding = cli
        .get(format!("/api/pages/projects/{}", projects[1].slug))
        .send()
        .await;
    let motion = cli
        .get(format!("/api/pages/projects/{}", projects[4].slug))
        .send()
        .await;
    let missing = cli.get("/api/pages/projects/no-such-project").send().await;

    // Expect
    // same category first, the current project never appears
    let expected: Vec<ProjectDetail> = [0, 3, 2]
        .into_iter()
        .map(|idx| projects[idx].clone().into())
        .collect();
    branding.assert_status_is_ok();
    branding
        .assert_json(&json!({
            "project": ProjectDetail::from(projects[1].clone()),
            "related": expected,
        }))
        .await;
    // no other motion project, topped up with the newest others
    let expected: Vec<ProjectDetail> = [0, 1, 2]
        .into_iter()
        .map(|idx| projects[idx].clone().into())
        .collect();
    motion.assert_status_is_ok();
    motion
        .assert_json(&json!({
            "project": ProjectDetail::from(projects[4].clone()),
            "related": expected,
        }))
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
