use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

/// How the frontend renders the item's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum DateViewPattern {
    Year = 0,
    MonthYear = 1,
    SeasonYear = 2,
    DateMonthYear = 3,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimelineItem {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub date_view_pattern: DateViewPattern,
    pub title: String,
    pub description: Option<String>,
    pub streetcode_id: i32,
}

impl Entity for TimelineItem {
    const TABLE: &'static str = "timeline_items";
    const NAME: &'static str = "TimelineItem";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Shared context tags; titles are unique and reused across timeline items.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HistoricalContext {
    pub id: i32,
    pub title: String,
}

impl Entity for HistoricalContext {
    const TABLE: &'static str = "historical_contexts";
    const NAME: &'static str = "HistoricalContext";

    fn id(&self) -> i32 {
        self.id
    }
}
