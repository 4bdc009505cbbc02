use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::about::{About, TABLE_NAME};

/// The single about row, oldest first if the table was ever seeded twice.
pub async fn get_about(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<Option<About>> {
    Ok(sqlx::query_as(
        format!(
            "SELECT * FROM {} ORDER BY created_at ASC, id ASC LIMIT 1",
            TABLE_NAME
        )
        .as_str(),
    )
    .fetch_optional(&mut **tx)
    .await?)
}

pub async fn get_about_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: &Uuid,
) -> anyhow::Result<Option<About>> {
    Ok(
        sqlx::query_as(format!("SELECT * FROM {} WHERE id = $1", TABLE_NAME).as_str())
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?,
    )
}

pub async fn create_about(
    tx: &mut Transaction<'_, Postgres>,
    about: &About,
) -> anyhow::Result<About> {
    let row = sqlx::query_as(
        format!(
            "INSERT INTO {} (id, bio, skills, experience, hero, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(about.id)
    .bind(&about.bio)
    .bind(&about.skills)
    .bind(&about.experience)
    .bind(&about.hero)
    .bind(about.created_at)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row)
}

pub async fn update_about(
    tx: &mut Transaction<'_, Postgres>,
    about: &About,
) -> anyhow::Result<About> {
    let row = sqlx::query_as(
        format!(
            "UPDATE {} SET bio = $1, skills = $2, experience = $3, hero = $4
        WHERE id = $5
        RETURNING *",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&about.bio)
    .bind(&about.skills)
    .bind(&about.experience)
    .bind(&about.hero)
    .bind(about.id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row)
}

pub async fn delete_about(tx: &mut Transaction<'_, Postgres>, about: &About) -> anyhow::Result<()> {
    sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(about.id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
