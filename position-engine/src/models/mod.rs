pub mod position;
pub mod trade;
pub mod transaction;

pub use position::*;
pub use trade::*;
pub use transaction::*;

#[cfg(test)]
mod tests;
