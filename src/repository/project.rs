use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    core::sqlx_utils::{binds_query_as, query_builder, Filters, SqlxBinds},
    model::project::{Project, TABLE_NAME},
};

/// Projects newest first. `category = "all"` is the same as no filter.
pub async fn get_all_project(
    tx: &mut Transaction<'_, Postgres>,
    category: Option<String>,
    featured: Option<bool>,
    limit: Option<u32>,
) -> anyhow::Result<Vec<Project>> {
    let mut filters = Filters::new();
    if let Some(category) = category.filter(|x| x != "all") {
        filters.push("category", "=", SqlxBinds::String(category));
    }
    if let Some(featured) = featured {
        filters.push("featured", "=", SqlxBinds::Bool(featured));
    }
    let stmt = query_builder(
        None,
        TABLE_NAME,
        &filters.clauses,
        &["created_at DESC", "id DESC"],
        limit,
    );
    let data = binds_query_as::<Project>(&stmt, filters.binds)
        .fetch_all(&mut **tx)
        .await?;
    Ok(data)
}

pub async fn get_project_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: &Uuid,
) -> anyhow::Result<Option<Project>> {
    Ok(
        sqlx::query_as(format!("SELECT * FROM {} WHERE id = $1", TABLE_NAME).as_str())
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?,
    )
}

pub async fn get_project_by_slug(
    tx: &mut Transaction<'_, Postgres>,
    slug: &str,
) -> anyhow::Result<Option<Project>> {
    Ok(
        sqlx::query_as(format!("SELECT * FROM {} WHERE slug = $1", TABLE_NAME).as_str())
            .bind(slug)
            .fetch_optional(&mut **tx)
            .await?,
    )
}

/// Admin lookups accept either the uuid or the public slug.
pub async fn get_project_by_slug_or_id(
    tx: &mut Transaction<'_, Postgres>,
    key: &str,
) -> anyhow::Result<Option<Project>> {
    if let Ok(id) = Uuid::parse_str(key) {
        if let Some(project) = get_project_by_id(tx, &id).await? {
            return Ok(Some(project));
        }
    }
    get_project_by_slug(tx, key).await
}

/// Same-category projects first, topped up with other categories.
pub async fn get_related_project(
    tx: &mut Transaction<'_, Postgres>,
    project: &Project,
    limit: u32,
) -> anyhow::Result<Vec<Project>> {
    let mut same = Filters::new();
    same.push("category", "=", SqlxBinds::String(project.category.clone()));
    same.push("id", "<>", SqlxBinds::Uuid(project.id));
    let stmt = query_builder(
        None,
        TABLE_NAME,
        &same.clauses,
        &["created_at DESC", "id DESC"],
        Some(limit),
    );
    let mut data = binds_query_as::<Project>(&stmt, same.binds)
        .fetch_all(&mut **tx)
        .await?;
    if data.len() as u32 >= limit {
        return Ok(data);
    }

    let mut other = Filters::new();
    other.push("category", "<>", SqlxBinds::String(project.category.clone()));
    other.push("id", "<>", SqlxBinds::Uuid(project.id));
    let stmt = query_builder(
        None,
        TABLE_NAME,
        &other.clauses,
        &["created_at DESC", "id DESC"],
        Some(limit - data.len() as u32),
    );
    let others = binds_query_as::<Project>(&stmt, other.binds)
        .fetch_all(&mut **tx)
        .await?;
    data.extend(others);
    Ok(data)
}

pub async fn create_project(
    tx: &mut Transaction<'_, Postgres>,
    project: &Project,
) -> anyhow::Result<Project> {
    let row = sqlx::query_as(
        format!(
            "INSERT INTO {} (id, title, slug, category, tags, thumbnail, images, client, year,
        description, challenge, solution, featured, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING *",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(project.id)
    .bind(&project.title)
    .bind(&project.slug)
    .bind(&project.category)
    .bind(&project.tags)
    .bind(&project.thumbnail)
    .bind(&project.images)
    .bind(&project.client)
    .bind(project.year)
    .bind(&project.description)
    .bind(&project.challenge)
    .bind(&project.solution)
    .bind(project.featured)
    .bind(project.created_at)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row)
}

pub async fn update_project(
    tx: &mut Transaction<'_, Postgres>,
    project: &Project,
) -> anyhow::Result<Project> {
    let row = sqlx::query_as(
        format!(
            "UPDATE {}
        SET title = $1, slug = $2, category = $3, tags = $4, thumbnail = $5, images = $6,
        client = $7, year = $8, description = $9, challenge = $10, solution = $11, featured = $12
        WHERE id = $13
        RETURNING *",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&project.title)
    .bind(&project.slug)
    .bind(&project.category)
    .bind(&project.tags)
    .bind(&project.thumbnail)
    .bind(&project.images)
    .bind(&project.client)
    .bind(project.year)
    .bind(&project.description)
    .bind(&project.challenge)
    .bind(&project.solution)
    .bind(project.featured)
    .bind(project.id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row)
}

pub async fn delete_project(
    tx: &mut Transaction<'_, Postgres>,
    project: &Project,
) -> anyhow::Result<()> {
    sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(project.id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
