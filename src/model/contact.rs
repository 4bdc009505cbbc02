use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use uuid::Uuid;

pub const TABLE_NAME: &str = "public.contact";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub email: String,
    pub phone: Option<String>,
    pub socials: Option<Json<Vec<SocialLink>>>,
    pub address: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

impl Contact {
    pub fn validate(&self) -> Result<(), String> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(format!("email '{}' is not valid", self.email));
        }
        if let Some(socials) = &self.socials {
            for (idx, item) in socials.iter().enumerate() {
                if item.kind.trim().is_empty() || item.url.trim().is_empty() {
                    return Err(format!("socials[{}]: type and url are required", idx));
                }
            }
        }
        Ok(())
    }
}
