use crate::core::state::{Effect, Outcome};
use crate::domain::ports::PokemonSource;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Performs one effect. Failures are logged and reported as the matching
/// `*Failed` outcome, never propagated.
pub async fn execute<S: PokemonSource + ?Sized>(source: &S, effect: Effect) -> Outcome {
    match effect {
        Effect::FetchList { limit } => match source.list(limit).await {
            Ok(pokemons) => Outcome::ListLoaded(pokemons),
            Err(e) => {
                tracing::error!("Error fetching initial list: {}", e);
                Outcome::ListFailed
            }
        },
        Effect::FetchEvolutions { pokedex_id } => match source.by_id(pokedex_id).await {
            Ok(pokemon) => Outcome::EvolutionsLoaded {
                pokedex_id,
                evolutions: pokemon.evolutions.unwrap_or_default(),
            },
            Err(e) => {
                tracing::error!("Error fetching evolutions of #{}: {}", pokedex_id, e);
                Outcome::EvolutionsFailed { pokedex_id }
            }
        },
        Effect::Search { term } => match source.by_name(&term).await {
            Ok(pokemon) => Outcome::SearchResolved(pokemon),
            Err(e) => {
                tracing::error!("Search for '{}' failed: {}", term, e);
                Outcome::SearchFailed { term }
            }
        },
    }
}

/// Fire-and-forget executor: each effect runs on its own task and its outcome
/// is posted to the channel in completion order.
pub struct Dispatcher<S: PokemonSource + 'static> {
    source: Arc<S>,
    outcomes: UnboundedSender<Outcome>,
    handle: Handle,
}

impl<S: PokemonSource + 'static> Dispatcher<S> {
    /// Must be called from within a tokio runtime.
    pub fn new(source: S) -> (Self, UnboundedReceiver<Outcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            source: Arc::new(source),
            outcomes: tx,
            handle: Handle::current(),
        };
        (dispatcher, rx)
    }

    pub fn dispatch(&self, effect: Effect) -> JoinHandle<()> {
        tracing::debug!("Dispatching {:?}", effect);
        let source = Arc::clone(&self.source);
        let outcomes = self.outcomes.clone();

        self.handle.spawn(async move {
            let outcome = execute(source.as_ref(), effect).await;
            if outcomes.send(outcome).is_err() {
                tracing::debug!("Viewer closed before outcome arrived");
            }
        })
    }
}
