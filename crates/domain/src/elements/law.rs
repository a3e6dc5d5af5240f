//! Law element - codes, edicts, and their enforcement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ConstructId, InstitutionId, LawId, LocationId, TitleId, WorldId, ZoneId};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Law {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<LawId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supertype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world: Option<WorldId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    // Code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_law: Option<Link<LawId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<Vec<Link<ConstructId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Link<InstitutionId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Link<LocationId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<Link<ZoneId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prohibitions: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjudicators: Option<Vec<Link<TitleId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcers: Option<Vec<Link<TitleId>>>,
}
