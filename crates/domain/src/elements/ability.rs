//! Ability element - powers, skills, and learned techniques.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AbilityId, ConstructId, LocationId, ObjectId, PhenomenonId, TraitId, WorldId};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AbilityId>,
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
    pub activation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Link<PhenomenonId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talents: Option<Vec<Link<TraitId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requisites: Option<Vec<Link<ConstructId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevalence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tradition: Option<Link<ConstructId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Link<PhenomenonId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locus: Option<Link<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruments: Option<Vec<Link<ObjectId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systems: Option<Vec<Link<ConstructId>>>,
}
