pub mod command;
pub mod condition;
pub mod country;
pub mod earth;
pub mod effect;
pub mod policy;
pub mod rating;
pub mod world;

pub use command::Command;
pub use condition::Condition;
pub use country::{ActionOutcome, Country};
pub use earth::Earth;
pub use effect::{Effect, SUB_TICKS_PER_YEAR};
pub use policy::{Policy, PolicyCategory};
pub use rating::Rating;
pub use world::World;
