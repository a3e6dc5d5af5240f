//! Trait element - qualities that shape characters and creatures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AbilityId, TraitId, WorldId};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TraitId>,
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

    // Qualitative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_effects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_effects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functional_effects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_effects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behaviour_effects: Option<String>,

    // Quantitative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charisma: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coercion: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compassion: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creativity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courage: Option<i64>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anti_trait: Option<Link<TraitId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empowered_abilities: Option<Vec<Link<AbilityId>>>,
}
