//! Singleton world resource.
//!
//! API keys are world-scoped, so `/world/` addresses exactly one world and
//! returns it directly rather than as a paged collection.

use onlyworlds_domain::World;
use reqwest::Method;

use crate::error::Error;
use crate::transport::{expect_json, Transport};

/// Access to the single world behind the configured credentials.
pub struct WorldResource {
    transport: Transport,
}

impl WorldResource {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the world associated with the current API key.
    pub async fn get(&self) -> Result<World, Error> {
        let value = self.transport.request(Method::GET, "/world/", &[], None).await?;
        expect_json(value)
    }

    /// Apply a partial update to the current world.
    pub async fn update(&self, input: &World) -> Result<World, Error> {
        let body = serde_json::to_value(input).map_err(|e| Error::Encode(e.to_string()))?;
        let value = self
            .transport
            .request(Method::PATCH, "/world/", &[], Some(&body))
            .await?;
        expect_json(value)
    }
}
