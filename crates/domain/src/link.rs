//! Relation values as they appear in element records and inputs.
//!
//! The wire returns relation fields as bare identifiers. On input the client
//! also accepts the convenience shape of a nested object carrying an `id`,
//! which the request pipeline rewrites to the `_id`/`_ids` foreign-key form
//! before submission.

use serde::{Deserialize, Serialize};

use crate::element_type::ElementType;

/// A reference to another element, either as a bare identifier or as a
/// nested object carrying one.
///
/// Records read from the service deserialize as [`Link::Id`]. Inputs built
/// from previously fetched elements can embed the object form; either way
/// [`Link::id`] yields the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link<I> {
    /// The bare-identifier wire shape.
    Id(I),
    /// A nested object carrying the identifier. Extra keys are ignored.
    Object(Nested<I>),
}

/// The nested-object relation shape: `{ "id": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nested<I> {
    pub id: I,
}

impl<I> Link<I> {
    /// The referenced identifier, regardless of shape.
    pub fn id(&self) -> &I {
        match self {
            Link::Id(id) => id,
            Link::Object(nested) => &nested.id,
        }
    }

    /// Unwrap into the identifier.
    pub fn into_id(self) -> I {
        match self {
            Link::Id(id) => id,
            Link::Object(nested) => nested.id,
        }
    }
}

impl<I> From<I> for Link<I> {
    fn from(id: I) -> Self {
        Link::Id(id)
    }
}

/// A reference that may point at any element family.
///
/// Only the pin family carries one of these: a pin marks an arbitrary
/// element on a map. On the wire the reference is split across the
/// `element_type` and `element_id` fields; this type is the assembled view,
/// keeping the target family a member of the closed [`ElementType`] set
/// instead of a free-form string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub element_type: ElementType,
    pub id: String,
}

impl ElementRef {
    pub fn new(element_type: ElementType, id: impl Into<String>) -> Self {
        Self {
            element_type,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CharacterId;

    #[test]
    fn test_link_deserializes_bare_identifier() {
        let link: Link<CharacterId> = serde_json::from_str("\"char-1\"").expect("deserialize");
        assert_eq!(link.id().as_str(), "char-1");
    }

    #[test]
    fn test_link_deserializes_nested_object() {
        let link: Link<CharacterId> =
            serde_json::from_str(r#"{"id":"char-2","name":"Aldric"}"#).expect("deserialize");
        assert_eq!(link.id().as_str(), "char-2");
    }

    #[test]
    fn test_bare_link_serializes_as_string() {
        let link = Link::from(CharacterId::new("char-3"));
        let json = serde_json::to_string(&link).expect("serialize");
        assert_eq!(json, "\"char-3\"");
    }

    #[test]
    fn test_nested_link_serializes_as_object() {
        let link = Link::Object(Nested {
            id: CharacterId::new("char-4"),
        });
        let json = serde_json::to_string(&link).expect("serialize");
        assert_eq!(json, r#"{"id":"char-4"}"#);
    }
}
