//! OnlyWorlds domain types.
//!
//! Element records, typed identifiers, relation link values, and the static
//! field schema for every element family the service stores. Everything here
//! is plain data: no I/O, no state, no caching. The client crate drives its
//! request pipeline off the [`schema`] registry.

pub mod element_type;
pub mod elements;
pub mod ids;
pub mod link;
pub mod schema;

pub use element_type::{ElementType, UnknownElementType};
pub use elements::{
    Ability, Character, Collective, Construct, Creature, Event, Family, Institution, Language,
    Law, Location, Map, Marker, Narrative, Object, Phenomenon, Pin, Relation, Species, Title,
    Trait, World, Zone,
};
pub use ids::{
    AbilityId, CharacterId, CollectiveId, ConstructId, CreatureId, EventId, FamilyId,
    InstitutionId, LanguageId, LawId, LocationId, MapId, MarkerId, NarrativeId, ObjectId,
    PhenomenonId, PinId, RelationId, SpeciesId, TitleId, TraitId, WorldId, ZoneId,
};
pub use link::{ElementRef, Link, Nested};
pub use schema::{FieldDescriptor, FieldKind, LinkTarget};
