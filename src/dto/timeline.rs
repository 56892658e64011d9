use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DateViewPattern, HistoricalContext, TimelineItem};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalContextDto {
    pub id: i32,
    pub title: String,
}

impl From<HistoricalContext> for HistoricalContextDto {
    fn from(c: HistoricalContext) -> Self {
        Self {
            id: c.id,
            title: c.title,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineItemDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub date_view_pattern: DateViewPattern,
    pub title: String,
    pub description: Option<String>,
    pub streetcode_id: i32,
    pub historical_contexts: Vec<HistoricalContextDto>,
}

impl TimelineItemDto {
    pub fn from_entity(item: TimelineItem, contexts: Vec<HistoricalContext>) -> Self {
        Self {
            id: item.id,
            date: item.date,
            date_view_pattern: item.date_view_pattern,
            title: item.title,
            description: item.description,
            streetcode_id: item.streetcode_id,
            historical_contexts: contexts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Contexts are passed by title; unknown titles are created, known ones
/// are linked.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTimelineItemRequest {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub date_view_pattern: DateViewPattern,
    #[serde(default)]
    pub historical_contexts: Vec<String>,
    pub streetcode_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTimelineItemRequest {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub date_view_pattern: DateViewPattern,
    #[serde(default)]
    pub historical_contexts: Vec<String>,
}
