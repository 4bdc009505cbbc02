use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::model::contact::{Contact, TABLE_NAME};

pub async fn get_contact(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<Option<Contact>> {
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

pub async fn get_contact_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: &Uuid,
) -> anyhow::Result<Option<Contact>> {
    Ok(
        sqlx::query_as(format!("SELECT * FROM {} WHERE id = $1", TABLE_NAME).as_str())
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?,
    )
}

pub async fn create_contact(
    tx: &mut Transaction<'_, Postgres>,
    contact: &Contact,
) -> anyhow::Result<Contact> {
    let row = sqlx::query_as(
        format!(
            "INSERT INTO {} (id, email, phone, socials, address, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(contact.id)
    .bind(&contact.email)
    .bind(&contact.phone)
    .bind(&contact.socials)
    .bind(&contact.address)
    .bind(contact.created_at)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row)
}

pub async fn update_contact(
    tx: &mut Transaction<'_, Postgres>,
    contact: &Contact,
) -> anyhow::Result<Contact> {
    let row = sqlx::query_as(
        format!(
            "UPDATE {} SET email = $1, phone = $2, socials = $3, address = $4
        WHERE id = $5
        RETURNING *",
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&contact.email)
    .bind(&contact.phone)
    .bind(&contact.socials)
    .bind(&contact.address)
    .bind(contact.id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row)
}

pub async fn delete_contact(
    tx: &mut Transaction<'_, Postgres>,
    contact: &Contact,
) -> anyhow::Result<()> {
    sqlx::query(format!("DELETE FROM {} WHERE id = $1", TABLE_NAME).as_str())
        .bind(contact.id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
