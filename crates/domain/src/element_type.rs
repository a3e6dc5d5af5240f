//! The closed set of element families stored by the service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the element families the service stores.
///
/// The set is fixed by the service schema; clients never define new families.
/// The serialized form is the lowercase singular name used in API paths
/// (`/character/`, `/location/`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Ability,
    Character,
    Collective,
    Construct,
    Creature,
    Event,
    Family,
    Institution,
    Language,
    Law,
    Location,
    Map,
    Marker,
    Narrative,
    Object,
    Phenomenon,
    Pin,
    Relation,
    Species,
    Title,
    Trait,
    Zone,
}

/// Raised when a string does not name a known element family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type: {0}")]
pub struct UnknownElementType(pub String);

impl ElementType {
    /// Every element family, in schema order.
    pub const ALL: [ElementType; 22] = [
        ElementType::Ability,
        ElementType::Character,
        ElementType::Collective,
        ElementType::Construct,
        ElementType::Creature,
        ElementType::Event,
        ElementType::Family,
        ElementType::Institution,
        ElementType::Language,
        ElementType::Law,
        ElementType::Location,
        ElementType::Map,
        ElementType::Marker,
        ElementType::Narrative,
        ElementType::Object,
        ElementType::Phenomenon,
        ElementType::Pin,
        ElementType::Relation,
        ElementType::Species,
        ElementType::Title,
        ElementType::Trait,
        ElementType::Zone,
    ];

    /// The lowercase singular wire name, as used in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Ability => "ability",
            ElementType::Character => "character",
            ElementType::Collective => "collective",
            ElementType::Construct => "construct",
            ElementType::Creature => "creature",
            ElementType::Event => "event",
            ElementType::Family => "family",
            ElementType::Institution => "institution",
            ElementType::Language => "language",
            ElementType::Law => "law",
            ElementType::Location => "location",
            ElementType::Map => "map",
            ElementType::Marker => "marker",
            ElementType::Narrative => "narrative",
            ElementType::Object => "object",
            ElementType::Phenomenon => "phenomenon",
            ElementType::Pin => "pin",
            ElementType::Relation => "relation",
            ElementType::Species => "species",
            ElementType::Title => "title",
            ElementType::Trait => "trait",
            ElementType::Zone => "zone",
        }
    }

    /// Plural display label, handling the irregular plurals
    /// (phenomena, species).
    pub fn label(&self) -> &'static str {
        match self {
            ElementType::Ability => "Abilities",
            ElementType::Character => "Characters",
            ElementType::Collective => "Collectives",
            ElementType::Construct => "Constructs",
            ElementType::Creature => "Creatures",
            ElementType::Event => "Events",
            ElementType::Family => "Families",
            ElementType::Institution => "Institutions",
            ElementType::Language => "Languages",
            ElementType::Law => "Laws",
            ElementType::Location => "Locations",
            ElementType::Map => "Maps",
            ElementType::Marker => "Markers",
            ElementType::Narrative => "Narratives",
            ElementType::Object => "Objects",
            ElementType::Phenomenon => "Phenomena",
            ElementType::Pin => "Pins",
            ElementType::Relation => "Relations",
            ElementType::Species => "Species",
            ElementType::Title => "Titles",
            ElementType::Trait => "Traits",
            ElementType::Zone => "Zones",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .iter()
            .find(|element| element.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownElementType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_round_trips_for_every_family() {
        for element in ElementType::ALL {
            let parsed: ElementType = element.as_str().parse().expect("known name");
            assert_eq!(parsed, element);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "dragon".parse::<ElementType>().expect_err("must be rejected");
        assert_eq!(err.to_string(), "unknown element type: dragon");
    }

    #[test]
    fn test_serde_uses_lowercase_wire_name() {
        let json = serde_json::to_string(&ElementType::Phenomenon).expect("serialize");
        assert_eq!(json, "\"phenomenon\"");

        let back: ElementType = serde_json::from_str("\"zone\"").expect("deserialize");
        assert_eq!(back, ElementType::Zone);
    }

    #[test]
    fn test_irregular_plural_labels() {
        assert_eq!(ElementType::Phenomenon.label(), "Phenomena");
        assert_eq!(ElementType::Species.label(), "Species");
        assert_eq!(ElementType::Family.label(), "Families");
    }
}
