use serde::{Deserialize, Serialize};

use crate::models::StatisticRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticRecordDto {
    pub id: i32,
    pub qr_id: i32,
    pub count: i32,
    pub address: String,
    pub streetcode_id: i32,
}

impl From<StatisticRecord> for StatisticRecordDto {
    fn from(r: StatisticRecord) -> Self {
        Self {
            id: r.id,
            qr_id: r.qr_id,
            count: r.count,
            address: r.address,
            streetcode_id: r.streetcode_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatisticRecordRequest {
    pub qr_id: i32,
    pub address: String,
    pub streetcode_id: i32,
}
