use crate::domain::model::Pokemon;
use crate::domain::ports::{ConfigProvider, PokemonSource};
use crate::utils::error::{PokedexError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// `PokemonSource` backed by the Pokébuild REST API.
#[derive(Debug, Clone)]
pub struct PokebuildClient {
    client: Client,
    base_url: Url,
}

impl PokebuildClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        validate_url("api.base_url", config.api_base_url())?;
        let base_url = Url::parse(config.api_base_url()).map_err(|e| PokedexError::ConfigError {
            message: format!("invalid api.base_url: {}", e),
        })?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PokedexError::ConfigError {
                message: format!("api.base_url cannot be a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFoundError {
                query: query.to_string(),
            });
        }
        if !status.is_success() {
            return Err(PokedexError::StatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl PokemonSource for PokebuildClient {
    async fn list(&self, limit: usize) -> Result<Vec<Pokemon>> {
        let limit = limit.to_string();
        let url = self.endpoint(&["pokemon", "limit", &limit])?;
        let pokemons: Vec<Pokemon> = self.get_json(url, &limit).await?;
        tracing::info!("Fetched {} Pokémon", pokemons.len());
        Ok(pokemons)
    }

    async fn by_id(&self, pokedex_id: u32) -> Result<Pokemon> {
        let id = pokedex_id.to_string();
        let url = self.endpoint(&["pokemon", &id])?;
        self.get_json(url, &id).await
    }

    async fn by_name(&self, name: &str) -> Result<Pokemon> {
        // url drops dot segments, which would turn the lookup into `GET {base}/pokemon`
        if name == "." || name == ".." {
            return Err(PokedexError::NotFoundError {
                query: name.to_string(),
            });
        }
        let url = self.endpoint(&["pokemon", name])?;
        self.get_json(url, name).await
    }
}
