//! Typed identifiers for every element family.
//!
//! The service assigns identifiers; the client never mints them. They are
//! opaque strings scoped to one element family, so each family gets its own
//! newtype to keep a `CharacterId` from being handed to a location endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// The singleton world bound to a credential pair
define_id!(WorldId);

// Element family IDs
define_id!(AbilityId);
define_id!(CharacterId);
define_id!(CollectiveId);
define_id!(ConstructId);
define_id!(CreatureId);
define_id!(EventId);
define_id!(FamilyId);
define_id!(InstitutionId);
define_id!(LanguageId);
define_id!(LawId);
define_id!(LocationId);
define_id!(MapId);
define_id!(MarkerId);
define_id!(NarrativeId);
define_id!(ObjectId);
define_id!(PhenomenonId);
define_id!(PinId);
define_id!(RelationId);
define_id!(SpeciesId);
define_id!(TitleId);
define_id!(TraitId);
define_id!(ZoneId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_through_string() {
        let id = CharacterId::new("9b2f6c1e");
        assert_eq!(id.as_str(), "9b2f6c1e");
        assert_eq!(String::from(id.clone()), "9b2f6c1e");
        assert_eq!(id.to_string(), "9b2f6c1e");
    }

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = LocationId::from("loc-1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"loc-1\"");

        let back: LocationId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
