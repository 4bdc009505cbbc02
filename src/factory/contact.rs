use chrono::{DateTime, FixedOffset, Timelike};
use fake::{
    faker::{address::en::CityName, internet::en::SafeEmail, phone_number::en::PhoneNumber},
    Dummy, Fake, Faker,
};
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::model::contact::{Contact, SocialLink, TABLE_NAME};

/// Contact is a single record, so there is no `generate_many`.
pub struct ContactFactory<T: Clone> {
    modifier_one: fn(x: &Contact, ext: T) -> Contact,
}

impl<T: Clone> Default for ContactFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ContactFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Contact, ext: T) -> Contact) {
        self.modifier_one = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Contact> {
        let data = Faker.fake::<ContactDummy>().into_contact();
        let data = (self.modifier_one)(&data, ext);
        sqlx::query(
            format!(
                "INSERT INTO {} (id, email, phone, socials, address, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)",
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(data.id)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.socials)
        .bind(&data.address)
        .bind(data.created_at)
        .execute(db)
        .await?;
        Ok(data)
    }
}

#[derive(Debug, Dummy, Clone)]
struct ContactDummy {
    pub id: Uuid,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    #[dummy(faker = "PhoneNumber()")]
    pub phone: String,
    #[dummy(faker = "CityName()")]
    pub address: String,
    pub created_at: DateTime<FixedOffset>,
}

impl ContactDummy {
    fn into_contact(self) -> Contact {
        Contact {
            id: self.id,
            email: self.email,
            phone: Some(self.phone),
            socials: Some(Json(vec![SocialLink {
                kind: "dribbble".to_string(),
                url: format!("https://dribbble.com/{}", self.id.simple()),
            }])),
            address: Some(self.address),
            // postgres keeps microseconds, so drop sub-second noise
            created_at: self.created_at.with_nanosecond(0).unwrap_or(self.created_at),
        }
    }
}
