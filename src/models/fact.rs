use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

/// A short numbered fact attached to a streetcode. `index` orders facts
/// within their streetcode and is rewritten wholesale by the reorder
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fact {
    pub id: i32,
    pub title: String,
    pub fact_content: String,
    pub index: i32,
    pub image_id: Option<i32>,
    pub streetcode_id: i32,
}

impl Entity for Fact {
    const TABLE: &'static str = "facts";
    const NAME: &'static str = "Fact";

    fn id(&self) -> i32 {
        self.id
    }
}
