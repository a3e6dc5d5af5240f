//! The singleton world record bound to a credential pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::WorldId;

/// The world a credential pair is scoped to.
///
/// Not an element family: there is exactly one per API key, served from the
/// `/world/` endpoint without pagination. `api_key` and `user` are assigned
/// server-side and ignored on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<WorldId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format_equivalents: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format_names: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_basic_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_current: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
