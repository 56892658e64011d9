use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

/// Publication state. Deleted rows stay in the table (soft delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum StreetcodeStatus {
    Draft = 0,
    Published = 1,
    Deleted = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum StreetcodeType {
    Person = 0,
    Event = 1,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Streetcode {
    pub id: i32,
    pub index: i32,
    pub teaser: Option<String>,
    pub date_string: String,
    pub alias: Option<String>,
    pub title: String,
    pub transliteration_url: String,
    pub status: StreetcodeStatus,
    pub streetcode_type: StreetcodeType,
    pub event_start_or_person_birth_date: DateTime<Utc>,
    pub event_end_or_person_death_date: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub view_count: i32,
    pub audio_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Streetcode {
    const TABLE: &'static str = "streetcodes";
    const NAME: &'static str = "Streetcode";

    fn id(&self) -> i32 {
        self.id
    }
}
