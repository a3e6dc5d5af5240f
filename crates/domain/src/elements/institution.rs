//! Institution element - organizations with mandates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ConstructId, CreatureId, InstitutionId, ObjectId, WorldId, ZoneId};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<InstitutionId>,
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

    // Foundation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctrine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founding_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_institution: Option<Link<InstitutionId>>,

    // Claims
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<Link<ZoneId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<Link<ObjectId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creatures: Option<Vec<Link<CreatureId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allies: Option<Vec<Link<InstitutionId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adversaries: Option<Vec<Link<InstitutionId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructs: Option<Vec<Link<ConstructId>>>,
}
