//! Typed async client for the OnlyWorlds world-building service.
//!
//! The client gives schema-aware CRUD access to the twenty-two element
//! families, the world singleton, and the token rating endpoints. Request
//! bodies get relation normalization and pin coordinate coercion applied
//! automatically; list responses are normalized to a single paged shape.
//!
//! ```no_run
//! use onlyworlds_client::{Client, Config, ListOptions};
//!
//! # async fn run() -> Result<(), onlyworlds_client::Error> {
//! let client = Client::new(Config::new("my-api-key", "my-pin"));
//!
//! let world = client.world().get().await?;
//! println!("world: {:?}", world.name);
//!
//! let page = client
//!     .characters()
//!     .list(&ListOptions::new().limit(10).ordering("name"))
//!     .await?;
//! for character in page {
//!     println!("{:?}", character.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod page;
mod prepare;
pub mod resource;
pub mod tokens;
pub mod transport;
pub mod world;

pub use client::Client;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::Error;
pub use page::Page;
pub use resource::{ListOptions, Resource};
pub use tokens::{
    AccessKeyResponse, EncryptionInfo, GameTier, RevokeAllSessionsResponse, RevokeSessionResponse,
    TokenConsumeParams, TokenConsumeResponse, TokenResource, TokenStatus,
};
pub use world::WorldResource;

pub use onlyworlds_domain as domain;
