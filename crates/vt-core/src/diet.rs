//! Stored diet records and the dashboard summary derived from them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::UserId;

/// One intake row as returned by `GET /diet`.
///
/// Enum-like columns stay strings: the service stores whatever label was
/// submitted and older rows may predate the current option sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietRecord {
    pub id: i64,
    pub user_id: UserId,
    pub age: u32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub activity_level: String,
    pub goal: String,
    pub dietary_preference: String,
    #[serde(default)]
    pub predicted_diet: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

/// Envelope of `GET /diet`.
#[derive(Debug, Clone, Deserialize)]
pub struct DietRecordList {
    #[serde(default)]
    pub diet_data: Vec<DietRecord>,
}

/// Aggregates shown on the Dashboard tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub record_count: usize,
    pub latest_weight_kg: Option<f64>,
    pub latest_predicted_diet: Option<String>,
    pub latest_goal: Option<String>,
}

impl DashboardSummary {
    /// "Latest" is the newest `created_at`; rows without a timestamp fall back
    /// to the highest id.
    pub fn from_records(records: &[DietRecord]) -> Self {
        let latest = records
            .iter()
            .max_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        Self {
            record_count: records.len(),
            latest_weight_kg: latest.map(|r| r.weight),
            latest_predicted_diet: latest.and_then(|r| r.predicted_diet.clone()),
            latest_goal: latest.map(|r| r.goal.clone()),
        }
    }
}

/// Accepts ISO-8601 (`2024-05-01T10:00:00`) and the service's space-separated form.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let parsed = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(serde::de::Error::custom)?;
    Ok(Some(parsed))
}
