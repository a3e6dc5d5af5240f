//! Narrative element - stories woven through a world.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{
    AbilityId, CharacterId, CollectiveId, ConstructId, CreatureId, EventId, FamilyId,
    InstitutionId, LanguageId, LawId, LocationId, NarrativeId, ObjectId, PhenomenonId, RelationId,
    SpeciesId, TitleId, TraitId, WorldId, ZoneId,
};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NarrativeId>,
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

    // Context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consequences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_narrative: Option<Link<NarrativeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protagonist: Option<Link<CharacterId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antagonist: Option<Link<CharacterId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrator: Option<Link<CharacterId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conservator: Option<Link<InstitutionId>>,

    // Involves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Link<EventId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<Link<CharacterId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<Link<ObjectId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Link<LocationId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<Link<SpeciesId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creatures: Option<Vec<Link<CreatureId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institutions: Option<Vec<Link<InstitutionId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<Link<TraitId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collectives: Option<Vec<Link<CollectiveId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<Link<ZoneId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Link<AbilityId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phenomena: Option<Vec<Link<PhenomenonId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Link<LanguageId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub families: Option<Vec<Link<FamilyId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Link<RelationId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<Link<TitleId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructs: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laws: Option<Vec<Link<LawId>>>,
}
