use serde::{Deserialize, Serialize};

/// A single creature record as served by the Pokébuild API.
///
/// Only the fields the viewer displays are kept; the rest of the payload
/// (stats, resistances, generation, ...) is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    #[serde(rename = "pokedexId")]
    pub pokedex_id: u32,
    pub name: String,
    pub image: String,
    #[serde(rename = "apiTypes", default)]
    pub types: Vec<PokemonType>,
    /// Present on get-by-id / get-by-name responses, may be missing on list entries.
    #[serde(
        rename = "apiEvolutions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub evolutions: Option<Vec<EvolutionStub>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub name: String,
    pub image: String,
}

/// Partial reference to the next evolutionary stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStub {
    #[serde(rename = "pokedexId")]
    pub pokedex_id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub const PLACEHOLDER_NAME: &str = "Loading...";

impl Pokemon {
    /// Entity shown before the first list response arrives. Id 0 never exists upstream.
    pub fn placeholder() -> Self {
        Self {
            pokedex_id: 0,
            name: PLACEHOLDER_NAME.to_string(),
            image: String::new(),
            types: Vec::new(),
            evolutions: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.pokedex_id == 0
    }
}

pub fn artwork_url(base: &str, pokedex_id: u32) -> String {
    format!("{}/{}.png", base.trim_end_matches('/'), pokedex_id)
}
