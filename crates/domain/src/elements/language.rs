//! Language element - tongues and scripts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ConstructId, LanguageId, LocationId, WorldId};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<LanguageId>,
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

    // Structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Link<ConstructId>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<Vec<Link<LocationId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialects: Option<Vec<Link<LanguageId>>>,
}
