use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::dto::analytics::{CreateStatisticRecordRequest, StatisticRecordDto};
use crate::error::ApiError;
use crate::extract::Exists;
use crate::models::{StatisticRecord, Streetcode};
use crate::repo;
use crate::response::{ApiResponse, ApiResult};
use crate::validation;

use super::{delete_entity, ensure_exists};

/// POST /api/statistic-records - register a new QR plaque
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateStatisticRecordRequest>,
) -> ApiResult<StatisticRecordDto> {
    validation::statistic_record(&req)?;
    ensure_exists::<Streetcode>(&state.pool, req.streetcode_id).await?;

    // Duplicate qr_id surfaces as 409 through the unique index.
    let record = repo::analytics::insert(&state.pool, &req).await?;
    Ok(ApiResponse::created(record.into()))
}

/// GET /api/statistic-records
pub async fn get_all(State(state): State<AppState>) -> ApiResult<Vec<StatisticRecordDto>> {
    let records = repo::analytics::list(&state.pool).await?;
    Ok(ApiResponse::success(records.into_iter().map(Into::into).collect()))
}

/// GET /api/statistic-records/by-qr/:qr_id
pub async fn get_by_qr(
    State(state): State<AppState>,
    Path(qr_id): Path<i32>,
) -> ApiResult<StatisticRecordDto> {
    let Some(record) = repo::analytics::by_qr(&state.pool, qr_id).await? else {
        let message = format!("StatisticRecord with qrId {} not found", qr_id);
        tracing::error!("{}", message);
        return Err(ApiError::not_found(message));
    };
    Ok(ApiResponse::success(record.into()))
}

/// PUT /api/statistic-records/:qr_id/hit - count one scan
pub async fn hit(
    State(state): State<AppState>,
    Path(qr_id): Path<i32>,
) -> ApiResult<StatisticRecordDto> {
    let Some(record) = repo::analytics::hit(&state.pool, qr_id).await? else {
        let message = format!("StatisticRecord with qrId {} not found", qr_id);
        tracing::error!("{}", message);
        return Err(ApiError::not_found(message));
    };
    Ok(ApiResponse::success(record.into()))
}

/// DELETE /api/statistic-records/:id
pub async fn delete(
    State(state): State<AppState>,
    Exists(record): Exists<StatisticRecord>,
) -> ApiResult<()> {
    delete_entity::<StatisticRecord>(&state.pool, record.id).await?;
    Ok(ApiResponse::<()>::no_content())
}
