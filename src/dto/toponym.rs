use serde::{Deserialize, Serialize};

use crate::models::Toponym;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToponymDto {
    pub id: i32,
    pub oblast: String,
    pub admin_region_old: Option<String>,
    pub admin_region_new: Option<String>,
    pub gromada: Option<String>,
    pub community: Option<String>,
    pub street_name: String,
    pub street_type: String,
}

impl From<Toponym> for ToponymDto {
    fn from(t: Toponym) -> Self {
        Self {
            id: t.id,
            oblast: t.oblast,
            admin_region_old: t.admin_region_old,
            admin_region_new: t.admin_region_new,
            gromada: t.gromada,
            community: t.community,
            street_name: t.street_name,
            street_type: t.street_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToponymQuery {
    pub page: Option<i64>,
    pub amount: Option<i64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStreetcodeToponymRequest {
    pub streetcode_id: i32,
    pub toponym_id: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateStreetcodeToponymResponse {
    pub streetcode_id: i32,
    pub toponym_id: i32,
    /// 12-digit plaque code: both ids zero-padded to six digits.
    pub physical_streetcode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteStreetcodeToponymRequest {
    pub streetcode_id: i32,
    pub toponym_id: i32,
}
