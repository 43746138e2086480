use crate::domain::model::Pokemon;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Read-only access to the creature catalog.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn list(&self, limit: usize) -> Result<Vec<Pokemon>>;
    async fn by_id(&self, pokedex_id: u32) -> Result<Pokemon>;
    async fn by_name(&self, name: &str) -> Result<Pokemon>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn list_limit(&self) -> usize;
    fn request_timeout(&self) -> Duration;
    fn artwork_base_url(&self) -> &str;
}
