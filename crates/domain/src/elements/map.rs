//! Map family - maps, their markers, and element pins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::element_type::ElementType;
use crate::ids::{LocationId, MapId, MarkerId, PinId, WorldId, ZoneId};
use crate::link::{ElementRef, Link};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Map {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MapId>,
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

    // Details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_map: Option<Link<MapId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Link<LocationId>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MarkerId>,
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

    // Details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<Link<MapId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Link<ZoneId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// A pin marks an arbitrary element at a position on a map.
///
/// Coordinates are `f64` so callers can feed raw values from mouse events or
/// interpolation; the service only accepts whole numbers, and the request
/// pipeline rounds present axes half-away-from-zero before submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PinId>,
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

    // Details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<Link<MapId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Pin {
    /// The pinned element as a typed reference, when both halves are set.
    pub fn element_ref(&self) -> Option<ElementRef> {
        match (self.element_type, self.element_id.as_ref()) {
            (Some(element_type), Some(id)) => Some(ElementRef::new(element_type, id.clone())),
            _ => None,
        }
    }

    /// Point the pin at an element.
    pub fn set_element_ref(&mut self, reference: ElementRef) {
        self.element_type = Some(reference.element_type);
        self.element_id = Some(reference.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_assembles_wildcard_reference() {
        let mut pin = Pin::default();
        assert!(pin.element_ref().is_none());

        pin.set_element_ref(ElementRef::new(ElementType::Location, "loc-3"));
        let reference = pin.element_ref().expect("reference set");
        assert_eq!(reference.element_type, ElementType::Location);
        assert_eq!(reference.id, "loc-3");
    }

    #[test]
    fn test_pin_wire_shape_keeps_split_fields() {
        let pin = Pin {
            element_type: Some(ElementType::Character),
            element_id: Some("char-7".to_string()),
            x: Some(3.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&pin).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"element_type": "character", "element_id": "char-7", "x": 3.0})
        );
    }
}
