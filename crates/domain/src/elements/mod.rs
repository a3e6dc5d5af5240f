//! Element record structs, one per family, plus the singleton world.
//!
//! These are data-carrying structs with no invariants to protect: every
//! field is optional because the same shape serves as a full record read
//! from the service and as a partial input for create/update (only present
//! fields are serialized). Relation fields use [`crate::Link`] so callers
//! can supply either bare identifiers or nested objects.

mod ability;
mod character;
mod collective;
mod construct;
mod creature;
mod event;
mod family;
mod institution;
mod language;
mod law;
mod location;
mod map;
mod narrative;
mod object;
mod phenomenon;
mod relation;
mod species;
mod title;
mod trait_;
mod world;
mod zone;

pub use ability::Ability;
pub use character::Character;
pub use collective::Collective;
pub use construct::Construct;
pub use creature::Creature;
pub use event::Event;
pub use family::Family;
pub use institution::Institution;
pub use language::Language;
pub use law::Law;
pub use location::Location;
pub use map::{Map, Marker, Pin};
pub use narrative::Narrative;
pub use object::Object;
pub use phenomenon::Phenomenon;
pub use relation::Relation;
pub use species::Species;
pub use title::Title;
pub use trait_::Trait;
pub use world::World;
pub use zone::Zone;
