pub mod catalog;
pub mod error;
pub mod flush;
pub mod model;
pub mod sim;

pub use catalog::Catalog;
pub use error::SimulationError;
pub use model::{
    ActionOutcome, Command, Condition, Country, Earth, Effect, Policy, PolicyCategory, Rating,
    SUB_TICKS_PER_YEAR, World,
};
