//! Phenomenon element - forces, magic, and natural effects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AbilityId, CharacterId, ConstructId, LocationId, ObjectId, PhenomenonId, WorldId};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phenomenon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PhenomenonId>,
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

    // Mechanics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalysts: Option<Vec<Link<ObjectId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empowerments: Option<Vec<Link<AbilityId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mythology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Link<PhenomenonId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wielders: Option<Vec<Link<CharacterId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<Vec<Link<LocationId>>>,
}
