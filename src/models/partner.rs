use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Partner {
    pub id: i32,
    pub title: String,
    pub logo_id: i32,
    pub is_key_partner: bool,
    pub is_visible_everywhere: bool,
    pub target_url: Option<String>,
    pub url_title: Option<String>,
    pub description: Option<String>,
}

impl Entity for Partner {
    const TABLE: &'static str = "partners";
    const NAME: &'static str = "Partner";

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum LogoType {
    Twitter = 0,
    Instagram = 1,
    Facebook = 2,
    YouTube = 3,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PartnerSourceLink {
    pub id: i32,
    pub logo_type: LogoType,
    pub target_url: String,
    pub partner_id: i32,
}
