use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Streetcode, StreetcodeStatus, StreetcodeType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetcodeDto {
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
}

impl From<Streetcode> for StreetcodeDto {
    fn from(s: Streetcode) -> Self {
        Self {
            id: s.id,
            index: s.index,
            teaser: s.teaser,
            date_string: s.date_string,
            alias: s.alias,
            title: s.title,
            transliteration_url: s.transliteration_url,
            status: s.status,
            streetcode_type: s.streetcode_type,
            event_start_or_person_birth_date: s.event_start_or_person_birth_date,
            event_end_or_person_death_date: s.event_end_or_person_death_date,
            first_name: s.first_name,
            last_name: s.last_name,
            view_count: s.view_count,
            audio_id: s.audio_id,
        }
    }
}

/// Trimmed projection for list views and admin pickers.
#[derive(Debug, Clone, Serialize)]
pub struct StreetcodeShortDto {
    pub id: i32,
    pub index: i32,
    pub title: String,
    pub transliteration_url: String,
}

impl From<Streetcode> for StreetcodeShortDto {
    fn from(s: Streetcode) -> Self {
        Self {
            id: s.id,
            index: s.index,
            title: s.title,
            transliteration_url: s.transliteration_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StreetcodeMainPageDto {
    pub id: i32,
    pub title: String,
    pub teaser: Option<String>,
    pub alias: Option<String>,
    pub transliteration_url: String,
}

impl From<Streetcode> for StreetcodeMainPageDto {
    fn from(s: Streetcode) -> Self {
        Self {
            id: s.id,
            title: s.title,
            teaser: s.teaser,
            alias: s.alias,
            transliteration_url: s.transliteration_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStreetcodeRequest {
    pub index: i32,
    pub teaser: Option<String>,
    pub date_string: String,
    pub alias: Option<String>,
    pub title: String,
    pub transliteration_url: String,
    pub streetcode_type: StreetcodeType,
    pub event_start_or_person_birth_date: DateTime<Utc>,
    pub event_end_or_person_death_date: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub audio_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStreetcodeRequest {
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
    pub audio_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetAllStreetcodesQuery {
    pub page: Option<i64>,
    pub amount: Option<i64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogQuery {
    pub page: i64,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainPageQuery {
    pub count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Streetcode {
        Streetcode {
            id: 3,
            index: 12,
            teaser: Some("teaser".into()),
            date_string: "1891 - 1934".into(),
            alias: None,
            title: "Mykola Khvylovy".into(),
            transliteration_url: "mykola-khvylovy".into(),
            status: StreetcodeStatus::Published,
            streetcode_type: StreetcodeType::Person,
            event_start_or_person_birth_date: Utc::now(),
            event_end_or_person_death_date: None,
            first_name: Some("Mykola".into()),
            last_name: Some("Khvylovy".into()),
            view_count: 42,
            audio_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn short_projection_keeps_identity_fields() {
        let dto = StreetcodeShortDto::from(sample());
        assert_eq!(dto.id, 3);
        assert_eq!(dto.index, 12);
        assert_eq!(dto.transliteration_url, "mykola-khvylovy");
    }

    #[test]
    fn full_dto_round_trips_status_as_snake_case() {
        let dto = StreetcodeDto::from(sample());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["status"], "published");
        assert_eq!(json["streetcode_type"], "person");
    }
}
