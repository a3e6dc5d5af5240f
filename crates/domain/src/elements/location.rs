//! Location element - places, from rooms to realms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{
    CharacterId, CollectiveId, ConstructId, InstitutionId, LocationId, ObjectId, SpeciesId,
    TitleId, WorldId, ZoneId,
};
use crate::link::Link;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<LocationId>,
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

    // Setting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founding_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_location: Option<Link<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub populations: Option<Vec<Link<CollectiveId>>>,

    // Politics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub political_climate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_power: Option<Link<InstitutionId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub governing_title: Option<Link<TitleId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_powers: Option<Vec<Link<InstitutionId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Link<ZoneId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rival: Option<Link<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<Link<LocationId>>,

    // World
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founders: Option<Vec<Link<CharacterId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cults: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delicacies: Option<Vec<Link<SpeciesId>>>,

    // Production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_methods: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_goods: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_methods: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_goods: Option<Vec<Link<ConstructId>>>,

    // Commerce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_markets: Option<Vec<Link<LocationId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_markets: Option<Vec<Link<LocationId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies: Option<Vec<Link<ConstructId>>>,

    // Construction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings: Option<Vec<Link<ObjectId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_methods: Option<Vec<Link<ConstructId>>>,

    // Defense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defensibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fighters: Option<Vec<Link<ConstructId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defensive_objects: Option<Vec<Link<ObjectId>>>,
}
