use serde::{Deserialize, Serialize};

use crate::models::Fact;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactDto {
    pub id: i32,
    pub title: String,
    pub fact_content: String,
    pub index: i32,
    pub image_id: Option<i32>,
    pub streetcode_id: i32,
}

impl From<Fact> for FactDto {
    fn from(f: Fact) -> Self {
        Self {
            id: f.id,
            title: f.title,
            fact_content: f.fact_content,
            index: f.index,
            image_id: f.image_id,
            streetcode_id: f.streetcode_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFactRequest {
    pub title: String,
    pub fact_content: String,
    pub image_id: i32,
    pub streetcode_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFactRequest {
    pub title: String,
    pub fact_content: String,
    pub image_id: i32,
    pub streetcode_id: i32,
}

/// New ordering for all facts of one streetcode; `ordered_ids` lists every
/// fact id in its desired position.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderFactsRequest {
    pub streetcode_id: i32,
    pub ordered_ids: Vec<i32>,
}
