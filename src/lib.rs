pub mod cli;
pub mod efficiency;
pub mod error;
pub mod loader;
pub mod qualifier;
pub mod shot_record;

pub use efficiency::{true_shooting_percentage, FREE_THROW_WEIGHT};
pub use error::{Error, Result};
pub use qualifier::{aggregate_qualifiers, find_qualified_games, GameAggregate};
pub use shot_record::{parse_game_date, ShotRecord};
