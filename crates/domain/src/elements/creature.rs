//! Creature element - fauna and beasts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{
    AbilityId, CreatureId, LanguageId, LocationId, SpeciesId, TraitId, WorldId, ZoneId,
};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CreatureId>,
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

    // Biology
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<Link<SpeciesId>>>,

    // Behaviour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demeanor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<Link<TraitId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Link<AbilityId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Link<LanguageId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Link<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Link<ZoneId>>,

    // TTRPG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Link<AbilityId>>>,
}
