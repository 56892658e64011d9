use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Toponym {
    pub id: i32,
    pub oblast: String,
    pub admin_region_old: Option<String>,
    pub admin_region_new: Option<String>,
    pub gromada: Option<String>,
    pub community: Option<String>,
    pub street_name: String,
    pub street_type: String,
}

impl Entity for Toponym {
    const TABLE: &'static str = "toponyms";
    const NAME: &'static str = "Toponym";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Link row between a streetcode and a toponym (composite key).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StreetcodeToponym {
    pub streetcode_id: i32,
    pub toponym_id: i32,
}
