pub mod breakdown;
pub use breakdown::*;

pub mod evaluator;
pub use evaluator::*;
