use serde::{Deserialize, Serialize};

use crate::models::{LogoType, Partner, PartnerSourceLink};

#[derive(Debug, Clone, Serialize)]
pub struct PartnerSourceLinkDto {
    pub id: i32,
    pub logo_type: LogoType,
    pub target_url: String,
}

impl From<PartnerSourceLink> for PartnerSourceLinkDto {
    fn from(l: PartnerSourceLink) -> Self {
        Self {
            id: l.id,
            logo_type: l.logo_type,
            target_url: l.target_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PartnerDto {
    pub id: i32,
    pub title: String,
    pub logo_id: i32,
    pub is_key_partner: bool,
    pub is_visible_everywhere: bool,
    pub target_url: Option<String>,
    pub url_title: Option<String>,
    pub description: Option<String>,
    pub source_links: Vec<PartnerSourceLinkDto>,
    pub streetcode_ids: Vec<i32>,
}

impl PartnerDto {
    pub fn from_entity(
        partner: Partner,
        links: Vec<PartnerSourceLink>,
        streetcode_ids: Vec<i32>,
    ) -> Self {
        Self {
            id: partner.id,
            title: partner.title,
            logo_id: partner.logo_id,
            is_key_partner: partner.is_key_partner,
            is_visible_everywhere: partner.is_visible_everywhere,
            target_url: partner.target_url,
            url_title: partner.url_title,
            description: partner.description,
            source_links: links.into_iter().map(Into::into).collect(),
            streetcode_ids,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartnerSourceLink {
    pub logo_type: LogoType,
    pub target_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartnerRequest {
    pub title: String,
    pub logo_id: i32,
    #[serde(default)]
    pub is_key_partner: bool,
    #[serde(default)]
    pub is_visible_everywhere: bool,
    pub target_url: Option<String>,
    pub url_title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub source_links: Vec<CreatePartnerSourceLink>,
    #[serde(default)]
    pub streetcode_ids: Vec<i32>,
}

pub type UpdatePartnerRequest = CreatePartnerRequest;
