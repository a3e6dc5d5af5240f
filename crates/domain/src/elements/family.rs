//! Family element - lineages and houses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{
    AbilityId, CharacterId, ConstructId, CreatureId, FamilyId, InstitutionId, LanguageId,
    LocationId, ObjectId, TraitId, WorldId,
};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Family {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<FamilyId>,
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

    // Identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spirit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traditions: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<Link<TraitId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Link<AbilityId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Link<LanguageId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestors: Option<Vec<Link<CharacterId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estates: Option<Vec<Link<LocationId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub governs: Option<Vec<Link<InstitutionId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heirlooms: Option<Vec<Link<ObjectId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creatures: Option<Vec<Link<CreatureId>>>,
}
