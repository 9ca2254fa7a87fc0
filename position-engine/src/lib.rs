pub mod engine;
pub mod models;
pub mod sample;

pub use engine::Engine;
pub use models::{Action, Position, Side, Trade, Transaction};
