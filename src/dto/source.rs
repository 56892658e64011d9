use serde::{Deserialize, Serialize};

use crate::models::{SourceLinkCategory, StreetcodeCategoryContent};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceLinkCategoryDto {
    pub id: i32,
    pub title: String,
    pub image_id: i32,
}

impl From<SourceLinkCategory> for SourceLinkCategoryDto {
    fn from(c: SourceLinkCategory) -> Self {
        Self {
            id: c.id,
            title: c.title,
            image_id: c.image_id,
        }
    }
}

/// Name-only projection for filter dropdowns.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryNameDto {
    pub id: i32,
    pub title: String,
}

impl From<SourceLinkCategory> for CategoryNameDto {
    fn from(c: SourceLinkCategory) -> Self {
        Self {
            id: c.id,
            title: c.title,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub title: String,
    pub image_id: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryContentDto {
    pub source_link_category_id: i32,
    pub streetcode_id: i32,
    pub text: String,
}

impl From<StreetcodeCategoryContent> for CategoryContentDto {
    fn from(c: StreetcodeCategoryContent) -> Self {
        Self {
            source_link_category_id: c.source_link_category_id,
            streetcode_id: c.streetcode_id,
            text: c.text,
        }
    }
}

/// Upserts the text for one (category, streetcode) pair.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryContentRequest {
    pub source_link_category_id: i32,
    pub streetcode_id: i32,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentQuery {
    pub streetcode_id: i32,
    pub category_id: i32,
}
