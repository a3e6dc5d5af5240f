//! Static field schema for every element family.
//!
//! This is data, not logic: a read-only table mapping each element family to
//! its ordered field list, each field's kind, and the target family of link
//! fields. The request pipeline consults it to decide which fields are
//! relations and how to rewrite them; nothing ever writes to it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::element_type::ElementType;

/// The family a link field points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A specific element family.
    Element(ElementType),
    /// Any element family. Used only by the pin family's polymorphic
    /// `element_id` reference.
    Any,
}

/// The kind of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Integral number (the service rejects fractional values).
    Number,
    /// Reference to one element.
    SingleLink(LinkTarget),
    /// Reference to many elements.
    MultiLink(LinkTarget),
}

impl FieldKind {
    pub fn is_link(&self) -> bool {
        matches!(self, FieldKind::SingleLink(_) | FieldKind::MultiLink(_))
    }
}

/// One (field name, kind) entry of an element family's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn text(name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind: FieldKind::Text,
    }
}

const fn number(name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind: FieldKind::Number,
    }
}

const fn single(name: &'static str, target: ElementType) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind: FieldKind::SingleLink(LinkTarget::Element(target)),
    }
}

const fn multi(name: &'static str, target: ElementType) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind: FieldKind::MultiLink(LinkTarget::Element(target)),
    }
}

const fn single_any(name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind: FieldKind::SingleLink(LinkTarget::Any),
    }
}

use ElementType::{
    Ability, Character, Collective, Construct, Creature, Event, Family, Institution, Language,
    Law, Location, Map, Narrative, Object, Phenomenon, Relation, Species, Title, Trait, Zone,
};

const ABILITY: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Mechanics
    text("activation"),
    number("duration"),
    number("potency"),
    number("range"),
    multi("effects", Phenomenon),
    text("challenges"),
    multi("talents", Trait),
    multi("requisites", Construct),
    // World
    text("prevalence"),
    single("tradition", Construct),
    single("source", Phenomenon),
    single("locus", Location),
    multi("instruments", Object),
    multi("systems", Construct),
];

const CHARACTER: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Constitution
    text("physicality"),
    text("mentality"),
    number("height"),
    number("weight"),
    multi("species", Species),
    multi("traits", Trait),
    multi("abilities", Ability),
    // Origins
    text("background"),
    text("motivations"),
    number("birth_date"),
    single("birthplace", Location),
    multi("languages", Language),
    // World
    text("reputation"),
    single("location", Location),
    multi("objects", Object),
    multi("institutions", Institution),
    // Personality
    number("charisma"),
    number("coercion"),
    number("competence"),
    number("compassion"),
    number("creativity"),
    number("courage"),
    // Social
    multi("family", Family),
    multi("friends", Character),
    multi("rivals", Character),
    // TTRPG
    number("level"),
    number("hit_points"),
    number("STR"),
    number("DEX"),
    number("CON"),
    number("INT"),
    number("WIS"),
    number("CHA"),
];

const COLLECTIVE: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Formation
    text("composition"),
    number("count"),
    number("formation_date"),
    single("operator", Institution),
    multi("equipment", Construct),
    // Dynamics
    text("activity"),
    text("disposition"),
    text("state"),
    multi("abilities", Ability),
    multi("symbolism", Construct),
    // World
    multi("species", Species),
    multi("characters", Character),
    multi("creatures", Creature),
    multi("phenomena", Phenomenon),
];

const CONSTRUCT: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Nature
    text("rationale"),
    text("history"),
    text("status"),
    text("reach"),
    number("start_date"),
    number("end_date"),
    single("founder", Character),
    single("custodian", Institution),
    // Involves
    multi("characters", Character),
    multi("objects", Object),
    multi("locations", Location),
    multi("species", Species),
    multi("creatures", Creature),
    multi("institutions", Institution),
    multi("traits", Trait),
    multi("collectives", Collective),
    multi("zones", Zone),
    multi("abilities", Ability),
    multi("phenomena", Phenomenon),
    multi("languages", Language),
    multi("families", Family),
    multi("relations", Relation),
    multi("titles", Title),
    multi("constructs", Construct),
    multi("events", Event),
    multi("narratives", Narrative),
];

const CREATURE: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Biology
    text("appearance"),
    number("weight"),
    number("height"),
    multi("species", Species),
    // Behaviour
    text("habits"),
    text("demeanor"),
    multi("traits", Trait),
    multi("abilities", Ability),
    multi("languages", Language),
    // World
    text("status"),
    number("birth_date"),
    single("location", Location),
    single("zone", Zone),
    // TTRPG
    number("challenge_rating"),
    number("hit_points"),
    number("armor_class"),
    number("speed"),
    multi("actions", Ability),
];

const EVENT: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Nature
    text("history"),
    text("challenges"),
    text("consequences"),
    number("start_date"),
    number("end_date"),
    multi("triggers", Event),
    // Involves
    multi("characters", Character),
    multi("objects", Object),
    multi("locations", Location),
    multi("species", Species),
    multi("creatures", Creature),
    multi("institutions", Institution),
    multi("traits", Trait),
    multi("collectives", Collective),
    multi("zones", Zone),
    multi("abilities", Ability),
    multi("phenomena", Phenomenon),
    multi("languages", Language),
    multi("families", Family),
    multi("relations", Relation),
    multi("titles", Title),
    multi("constructs", Construct),
];

const FAMILY: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Identity
    text("spirit"),
    text("history"),
    multi("traditions", Construct),
    multi("traits", Trait),
    multi("abilities", Ability),
    multi("languages", Language),
    multi("ancestors", Character),
    // World
    text("reputation"),
    multi("estates", Location),
    multi("governs", Institution),
    multi("heirlooms", Object),
    multi("creatures", Creature),
];

const INSTITUTION: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Foundation
    text("doctrine"),
    number("founding_date"),
    single("parent_institution", Institution),
    // Claims
    multi("zones", Zone),
    multi("objects", Object),
    multi("creatures", Creature),
    // World
    text("status"),
    multi("allies", Institution),
    multi("adversaries", Institution),
    multi("constructs", Construct),
];

const LANGUAGE: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Structure
    text("phonology"),
    text("grammar"),
    text("lexicon"),
    text("writing"),
    single("classification", Construct),
    // World
    text("status"),
    multi("spread", Location),
    multi("dialects", Language),
];

const LAW: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Code
    text("declaration"),
    text("purpose"),
    number("date"),
    single("parent_law", Law),
    multi("penalties", Construct),
    // World
    single("author", Institution),
    multi("locations", Location),
    multi("zones", Zone),
    multi("prohibitions", Construct),
    multi("adjudicators", Title),
    multi("enforcers", Title),
];

const LOCATION: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Setting
    text("form"),
    text("function"),
    number("founding_date"),
    single("parent_location", Location),
    multi("populations", Collective),
    // Politics
    text("political_climate"),
    single("primary_power", Institution),
    single("governing_title", Title),
    multi("secondary_powers", Institution),
    single("zone", Zone),
    single("rival", Location),
    single("partner", Location),
    // World
    text("customs"),
    multi("founders", Character),
    multi("cults", Construct),
    multi("delicacies", Species),
    // Production
    multi("extraction_methods", Construct),
    multi("extraction_goods", Construct),
    multi("industry_methods", Construct),
    multi("industry_goods", Construct),
    // Commerce
    text("infrastructure"),
    multi("extraction_markets", Location),
    multi("industry_markets", Location),
    multi("currencies", Construct),
    // Construction
    text("architecture"),
    multi("buildings", Object),
    multi("building_methods", Construct),
    // Defense
    text("defensibility"),
    number("elevation"),
    multi("fighters", Construct),
    multi("defensive_objects", Object),
];

const MAP: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Details
    text("background_color"),
    number("hierarchy"),
    number("width"),
    number("height"),
    number("depth"),
    single("parent_map", Map),
    single("location", Location),
];

const MARKER: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Details
    single("map", Map),
    single("zone", Zone),
    number("x"),
    number("y"),
    number("z"),
    number("order"),
];

const NARRATIVE: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Context
    text("story"),
    text("consequences"),
    number("start_date"),
    number("end_date"),
    number("order"),
    single("parent_narrative", Narrative),
    single("protagonist", Character),
    single("antagonist", Character),
    single("narrator", Character),
    single("conservator", Institution),
    // Involves
    multi("events", Event),
    multi("characters", Character),
    multi("objects", Object),
    multi("locations", Location),
    multi("species", Species),
    multi("creatures", Creature),
    multi("institutions", Institution),
    multi("traits", Trait),
    multi("collectives", Collective),
    multi("zones", Zone),
    multi("abilities", Ability),
    multi("phenomena", Phenomenon),
    multi("languages", Language),
    multi("families", Family),
    multi("relations", Relation),
    multi("titles", Title),
    multi("constructs", Construct),
    multi("laws", Law),
];

const OBJECT: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Form
    text("aesthetics"),
    number("weight"),
    number("amount"),
    single("parent_object", Object),
    multi("materials", Construct),
    multi("technology", Construct),
    // Function
    text("utility"),
    multi("effects", Phenomenon),
    multi("abilities", Ability),
    multi("consumes", Construct),
    // World
    text("origins"),
    single("location", Location),
    single("language", Language),
    multi("affinities", Trait),
];

const PHENOMENON: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Mechanics
    text("expression"),
    text("effects"),
    number("duration"),
    multi("catalysts", Object),
    multi("empowerments", Ability),
    // World
    text("mythology"),
    single("system", Phenomenon),
    multi("triggers", Construct),
    multi("wielders", Character),
    multi("environments", Location),
];

const PIN: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Details
    single("map", Map),
    text("element_type"),
    single_any("element_id"),
    number("x"),
    number("y"),
    number("z"),
];

const RELATION: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Nature
    text("background"),
    number("start_date"),
    number("end_date"),
    number("intensity"),
    single("actor", Character),
    multi("events", Event),
    // Involves
    multi("characters", Character),
    multi("objects", Object),
    multi("locations", Location),
    multi("species", Species),
    multi("creatures", Creature),
    multi("institutions", Institution),
    multi("traits", Trait),
    multi("collectives", Collective),
    multi("zones", Zone),
    multi("abilities", Ability),
    multi("phenomena", Phenomenon),
    multi("languages", Language),
    multi("families", Family),
    multi("titles", Title),
    multi("constructs", Construct),
    multi("narratives", Narrative),
];

const SPECIES: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Biology
    text("appearance"),
    number("life_span"),
    number("weight"),
    multi("nourishment", Species),
    multi("reproduction", Construct),
    multi("adaptations", Ability),
    // Psychology
    text("instincts"),
    text("sociality"),
    text("temperament"),
    text("communication"),
    number("aggression"),
    multi("traits", Trait),
    // World
    text("role"),
    single("parent_species", Species),
    multi("locations", Location),
    multi("zones", Zone),
    multi("affinities", Phenomenon),
];

const TITLE: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Mandate
    text("authority"),
    text("eligibility"),
    number("grant_date"),
    number("revoke_date"),
    single("issuer", Institution),
    single("body", Institution),
    single("superior_title", Title),
    multi("holders", Character),
    multi("symbols", Object),
    // World
    text("status"),
    text("history"),
    multi("characters", Character),
    multi("institutions", Institution),
    multi("families", Family),
    multi("zones", Zone),
    multi("locations", Location),
    multi("objects", Object),
    multi("constructs", Construct),
    multi("laws", Law),
    multi("collectives", Collective),
    multi("creatures", Creature),
    multi("phenomena", Phenomenon),
    multi("species", Species),
    multi("languages", Language),
];

const TRAIT: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Qualitative
    text("social_effects"),
    text("physical_effects"),
    text("functional_effects"),
    text("personality_effects"),
    text("behaviour_effects"),
    // Quantitative
    number("charisma"),
    number("coercion"),
    number("competence"),
    number("compassion"),
    number("creativity"),
    number("courage"),
    // World
    text("significance"),
    single("anti_trait", Trait),
    multi("empowered_abilities", Ability),
];

const ZONE: &[FieldDescriptor] = &[
    // Base
    text("name"),
    text("description"),
    text("supertype"),
    text("subtype"),
    text("image_url"),
    // Scope
    text("role"),
    number("start_date"),
    number("end_date"),
    multi("phenomena", Phenomenon),
    multi("linked_zones", Zone),
    // World
    text("context"),
    multi("populations", Collective),
    multi("titles", Title),
    multi("principles", Construct),
];

/// The ordered field list of one element family.
pub fn fields(element: ElementType) -> &'static [FieldDescriptor] {
    match element {
        ElementType::Ability => ABILITY,
        ElementType::Character => CHARACTER,
        ElementType::Collective => COLLECTIVE,
        ElementType::Construct => CONSTRUCT,
        ElementType::Creature => CREATURE,
        ElementType::Event => EVENT,
        ElementType::Family => FAMILY,
        ElementType::Institution => INSTITUTION,
        ElementType::Language => LANGUAGE,
        ElementType::Law => LAW,
        ElementType::Location => LOCATION,
        ElementType::Map => MAP,
        ElementType::Marker => MARKER,
        ElementType::Narrative => NARRATIVE,
        ElementType::Object => OBJECT,
        ElementType::Phenomenon => PHENOMENON,
        ElementType::Pin => PIN,
        ElementType::Relation => RELATION,
        ElementType::Species => SPECIES,
        ElementType::Title => TITLE,
        ElementType::Trait => TRAIT,
        ElementType::Zone => ZONE,
    }
}

static FIELD_INDEX: Lazy<HashMap<(ElementType, &'static str), FieldKind>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for element in ElementType::ALL {
        for descriptor in fields(element) {
            index.insert((element, descriptor.name), descriptor.kind);
        }
    }
    index
});

/// The kind of one field of one element family, if the field exists.
pub fn field_kind(element: ElementType, field: &str) -> Option<FieldKind> {
    FIELD_INDEX.get(&(element, field)).copied()
}

/// The full descriptor of one field of one element family.
pub fn descriptor(element: ElementType, field: &str) -> Option<&'static FieldDescriptor> {
    fields(element).iter().find(|d| d.name == field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_carries_the_base_fields() {
        for element in ElementType::ALL {
            let names: Vec<&str> = fields(element).iter().map(|d| d.name).collect();
            for base in ["name", "description", "supertype", "subtype", "image_url"] {
                assert!(names.contains(&base), "{element} is missing {base}");
            }
        }
    }

    #[test]
    fn test_field_names_are_unique_per_family() {
        for element in ElementType::ALL {
            let mut names: Vec<&str> = fields(element).iter().map(|d| d.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "{element} has duplicate fields");
        }
    }

    #[test]
    fn test_character_social_links() {
        assert_eq!(
            field_kind(ElementType::Character, "friends"),
            Some(FieldKind::MultiLink(LinkTarget::Element(
                ElementType::Character
            )))
        );
        assert_eq!(
            field_kind(ElementType::Character, "birthplace"),
            Some(FieldKind::SingleLink(LinkTarget::Element(
                ElementType::Location
            )))
        );
        assert_eq!(
            field_kind(ElementType::Character, "physicality"),
            Some(FieldKind::Text)
        );
        assert_eq!(field_kind(ElementType::Character, "nonexistent"), None);
    }

    #[test]
    fn test_pin_carries_the_only_wildcard_target() {
        assert_eq!(
            field_kind(ElementType::Pin, "element_id"),
            Some(FieldKind::SingleLink(LinkTarget::Any))
        );

        for element in ElementType::ALL {
            for descriptor in fields(element) {
                let is_any = matches!(
                    descriptor.kind,
                    FieldKind::SingleLink(LinkTarget::Any) | FieldKind::MultiLink(LinkTarget::Any)
                );
                if is_any {
                    assert_eq!(element, ElementType::Pin);
                    assert_eq!(descriptor.name, "element_id");
                }
            }
        }
    }

    #[test]
    fn test_descriptor_lookup_matches_index() {
        let descriptor =
            descriptor(ElementType::Ability, "tradition").expect("tradition is in the schema");
        assert_eq!(
            descriptor.kind,
            FieldKind::SingleLink(LinkTarget::Element(ElementType::Construct))
        );
        assert!(descriptor.kind.is_link());
    }
}
