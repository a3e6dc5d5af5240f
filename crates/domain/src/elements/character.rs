//! Character element - the people of a world.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{
    AbilityId, CharacterId, FamilyId, InstitutionId, LanguageId, LocationId, ObjectId, SpeciesId,
    TraitId, WorldId,
};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CharacterId>,
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

    // Constitution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physicality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<Link<SpeciesId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<Link<TraitId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Link<AbilityId>>>,

    // Origins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<Link<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Link<LanguageId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Link<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<Link<ObjectId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institutions: Option<Vec<Link<InstitutionId>>>,

    // Personality
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

    // Social
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<Vec<Link<FamilyId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<Link<CharacterId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rivals: Option<Vec<Link<CharacterId>>>,

    // TTRPG stats, uppercase on the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_points: Option<i64>,
    #[serde(rename = "STR", skip_serializing_if = "Option::is_none")]
    pub str: Option<i64>,
    #[serde(rename = "DEX", skip_serializing_if = "Option::is_none")]
    pub dex: Option<i64>,
    #[serde(rename = "CON", skip_serializing_if = "Option::is_none")]
    pub con: Option<i64>,
    #[serde(rename = "INT", skip_serializing_if = "Option::is_none")]
    pub int: Option<i64>,
    #[serde(rename = "WIS", skip_serializing_if = "Option::is_none")]
    pub wis: Option<i64>,
    #[serde(rename = "CHA", skip_serializing_if = "Option::is_none")]
    pub cha: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_relation_ids() {
        let json = r#"{
            "id": "char-1",
            "name": "Aldric",
            "birthplace": "loc-9",
            "species": ["sp-1", "sp-2"],
            "STR": 14
        }"#;
        let character: Character = serde_json::from_str(json).expect("deserialize");
        assert_eq!(character.name.as_deref(), Some("Aldric"));
        let birthplace = character.birthplace.expect("birthplace present");
        assert_eq!(birthplace.id().as_str(), "loc-9");
        let species = character.species.expect("species present");
        assert_eq!(species.len(), 2);
        assert_eq!(species[1].id().as_str(), "sp-2");
        assert_eq!(character.str, Some(14));
    }

    #[test]
    fn test_partial_input_serializes_only_present_fields() {
        let input = Character {
            name: Some("Mira".to_string()),
            level: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).expect("serialize");
        assert_eq!(json, serde_json::json!({"name": "Mira", "level": 3}));
    }
}
