pub mod dispatcher;
pub mod search;
pub mod state;

pub use crate::domain::model::{EvolutionStub, Pokemon, PokemonType};
pub use crate::domain::ports::{ConfigProvider, PokemonSource};
pub use crate::utils::error::Result;
pub use dispatcher::{execute, Dispatcher};
pub use state::{Effect, Outcome, ViewerState};
