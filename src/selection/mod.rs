pub mod selection_strategy;
pub mod tournament;

pub use selection_strategy::SelectionStrategy;
pub use tournament::{TournamentSelection, DEFAULT_TOURNAMENT_SIZE};
