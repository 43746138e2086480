use crate::app::report::{format_detail, format_evolutions, format_list};
use crate::core::{execute, Effect, Outcome, PokemonSource, ViewerState};

/// Runs effects one after another until the state asks for nothing more.
async fn drive<S: PokemonSource + ?Sized>(source: &S, state: &mut ViewerState, effect: Effect) {
    let mut next = Some(effect);
    while let Some(effect) = next {
        let outcome = execute(source, effect).await;
        next = state.apply(outcome);
    }
}

fn render_selection(state: &ViewerState, artwork_base_url: &str) -> String {
    let mut text = format_detail(state.current());
    if let Some(evolutions) = format_evolutions(state.evolutions(), artwork_base_url) {
        text.push_str("\n\n");
        text.push_str(&evolutions);
    }
    text
}

/// Fetches the list view. `None` when the list could not be loaded.
pub async fn run_list<S: PokemonSource + ?Sized>(source: &S, limit: usize) -> Option<String> {
    let mut state = ViewerState::new(limit);
    let outcome = execute(source, state.mount()).await;
    state.apply(outcome);

    if state.pokemons().is_empty() {
        None
    } else {
        Some(format_list(state.pokemons()))
    }
}

pub async fn run_show<S: PokemonSource + ?Sized>(
    source: &S,
    pokedex_id: u32,
    artwork_base_url: &str,
) -> Option<String> {
    let pokemon = match source.by_id(pokedex_id).await {
        Ok(pokemon) => pokemon,
        Err(e) => {
            tracing::error!("Error fetching #{}: {}", pokedex_id, e);
            return None;
        }
    };

    let mut state = ViewerState::new(0);
    let evolutions = pokemon.evolutions.clone().unwrap_or_default();
    // The detail payload already carries the chain, so the requested refetch is
    // answered from it instead of a second request.
    if let Some(Effect::FetchEvolutions { pokedex_id: selected }) = state.select(pokemon) {
        if selected != pokedex_id {
            tracing::debug!("Requested #{} but the API returned #{}", pokedex_id, selected);
        }
    }
    state.apply(Outcome::EvolutionsLoaded {
        pokedex_id: state.current().pokedex_id,
        evolutions,
    });

    Some(render_selection(&state, artwork_base_url))
}

/// `None` for blank input (no request made) or when the lookup failed.
pub async fn run_search<S: PokemonSource + ?Sized>(
    source: &S,
    query: &str,
    artwork_base_url: &str,
) -> Option<String> {
    let mut state = ViewerState::new(0);
    let Some(effect) = state.update_search(query) else {
        tracing::debug!("Blank search, nothing to do");
        return None;
    };

    drive(source, &mut state, effect).await;

    if state.current().is_placeholder() {
        None
    } else {
        Some(render_selection(&state, artwork_base_url))
    }
}
