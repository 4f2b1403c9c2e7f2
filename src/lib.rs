//! Debt Payoff Planner - month-by-month amortization for snowball and avalanche plans
//!
//! This library provides:
//! - Debt records with CSV/JSON loading and input validation
//! - A payoff simulation engine with a fixed per-run target order
//! - Side-by-side policy comparison and parallel extra-payment sweeps
//! - Saved strategy records for a persistence layer

pub mod error;
pub mod debt;
pub mod simulation;
pub mod strategy;

// Re-export commonly used types
pub use error::{PayoffError, Result};
pub use debt::{Debt, PayoffPolicy};
pub use simulation::{simulate, PayoffEngine, SimulationConfig, SimulationResult, TimelinePoint};
pub use strategy::{compare, SavedStrategy, StrategyComparison, StrategyPlanner};
