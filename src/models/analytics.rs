use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

/// One physical QR plaque. `count` accumulates scans.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatisticRecord {
    pub id: i32,
    pub qr_id: i32,
    pub count: i32,
    pub address: String,
    pub streetcode_id: i32,
}

impl Entity for StatisticRecord {
    const TABLE: &'static str = "statistic_records";
    const NAME: &'static str = "StatisticRecord";

    fn id(&self) -> i32 {
        self.id
    }
}
