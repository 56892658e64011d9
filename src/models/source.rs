use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SourceLinkCategory {
    pub id: i32,
    pub title: String,
    pub image_id: i32,
}

impl Entity for SourceLinkCategory {
    const TABLE: &'static str = "source_link_categories";
    const NAME: &'static str = "SourceLinkCategory";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Per-streetcode text body of a source-link category. Keyed by the
/// (category, streetcode) pair, not a surrogate id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StreetcodeCategoryContent {
    pub source_link_category_id: i32,
    pub streetcode_id: i32,
    pub text: String,
}
