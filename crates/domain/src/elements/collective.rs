//! Collective element - groups acting as one body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{
    AbilityId, CharacterId, CollectiveId, ConstructId, CreatureId, InstitutionId, PhenomenonId,
    SpeciesId, WorldId,
};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collective {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CollectiveId>,
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

    // Formation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Link<InstitutionId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<Link<ConstructId>>>,

    // Dynamics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Link<AbilityId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbolism: Option<Vec<Link<ConstructId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<Link<SpeciesId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<Link<CharacterId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creatures: Option<Vec<Link<CreatureId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phenomena: Option<Vec<Link<PhenomenonId>>>,
}
