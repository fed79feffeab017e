mod collector;
mod game_table;

pub use collector::{Collector, Credentials};
pub use game_table::GameTable;
