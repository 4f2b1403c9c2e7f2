//! Policy comparison, extra-payment sweeps and saved strategies

mod planner;
mod saved;

pub use planner::{compare, StrategyComparison, StrategyPlanner};
pub use saved::{load_strategy, SavedStrategy};
