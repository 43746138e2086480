use crate::core::search::normalize_query;
use crate::domain::model::{EvolutionStub, Pokemon};

/// A request the viewer wants performed against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchList { limit: usize },
    FetchEvolutions { pokedex_id: u32 },
    Search { term: String },
}

/// Result of an [`Effect`], fed back through [`ViewerState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ListLoaded(Vec<Pokemon>),
    ListFailed,
    EvolutionsLoaded {
        pokedex_id: u32,
        evolutions: Vec<EvolutionStub>,
    },
    EvolutionsFailed {
        pokedex_id: u32,
    },
    SearchResolved(Pokemon),
    SearchFailed {
        term: String,
    },
}

/// Top-level viewer state: the loaded list, the entity in the detail view,
/// and the evolution chain of that entity.
///
/// Every operation is synchronous. Operations that need data return an
/// [`Effect`]; the caller performs it and hands the [`Outcome`] back.
#[derive(Debug, Clone)]
pub struct ViewerState {
    pokemons: Vec<Pokemon>,
    current: Pokemon,
    evolutions: Vec<EvolutionStub>,
    search_input: String,
    list_limit: usize,
}

impl ViewerState {
    pub fn new(list_limit: usize) -> Self {
        Self {
            pokemons: Vec::new(),
            current: Pokemon::placeholder(),
            evolutions: Vec::new(),
            search_input: String::new(),
            list_limit,
        }
    }

    pub fn pokemons(&self) -> &[Pokemon] {
        &self.pokemons
    }

    pub fn current(&self) -> &Pokemon {
        &self.current
    }

    pub fn evolutions(&self) -> &[EvolutionStub] {
        &self.evolutions
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn mount(&self) -> Effect {
        Effect::FetchList {
            limit: self.list_limit,
        }
    }

    /// Replaces the detail entity. The evolution chain is refetched only when
    /// the identifier actually changes.
    pub fn select(&mut self, pokemon: Pokemon) -> Option<Effect> {
        let changed = pokemon.pokedex_id != self.current.pokedex_id;
        self.current = pokemon;

        if changed && !self.current.is_placeholder() {
            Some(Effect::FetchEvolutions {
                pokedex_id: self.current.pokedex_id,
            })
        } else {
            None
        }
    }

    pub fn select_index(&mut self, index: usize) -> Option<Effect> {
        let pokemon = self.pokemons.get(index)?.clone();
        self.select(pokemon)
    }

    /// Evolution cards resolve against the loaded list only.
    pub fn select_evolution(&mut self, pokedex_id: u32) -> Option<Effect> {
        match self.pokemons.iter().find(|p| p.pokedex_id == pokedex_id) {
            Some(pokemon) => {
                let pokemon = pokemon.clone();
                self.select(pokemon)
            }
            None => {
                tracing::debug!("Evolution #{} is not in the loaded list", pokedex_id);
                None
            }
        }
    }

    pub fn update_search(&mut self, input: &str) -> Option<Effect> {
        self.search_input = input.to_string();
        normalize_query(input).map(|term| Effect::Search { term })
    }

    pub fn apply(&mut self, outcome: Outcome) -> Option<Effect> {
        match outcome {
            Outcome::ListLoaded(pokemons) => {
                self.pokemons = pokemons;
                let first = self.pokemons.first()?.clone();
                self.select(first)
            }
            Outcome::EvolutionsLoaded {
                pokedex_id,
                evolutions,
            } => {
                if pokedex_id == self.current.pokedex_id {
                    self.evolutions = evolutions;
                } else {
                    tracing::debug!(
                        "Dropping evolutions of #{}, #{} is selected",
                        pokedex_id,
                        self.current.pokedex_id
                    );
                }
                None
            }
            Outcome::EvolutionsFailed { pokedex_id } => {
                if pokedex_id == self.current.pokedex_id {
                    self.evolutions.clear();
                }
                None
            }
            Outcome::SearchResolved(pokemon) => self.select(pokemon),
            Outcome::ListFailed | Outcome::SearchFailed { .. } => None,
        }
    }
}
