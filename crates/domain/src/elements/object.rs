//! Object element - physical things that can be owned or used.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{
    AbilityId, ConstructId, LanguageId, LocationId, ObjectId, PhenomenonId, TraitId, WorldId,
};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Object {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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

    // Form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aesthetics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_object: Option<Link<ObjectId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<Vec<Link<ConstructId>>>,

    // Function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Link<PhenomenonId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Link<AbilityId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<Link<ConstructId>>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origins: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Link<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Link<LanguageId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinities: Option<Vec<Link<TraitId>>>,
}
