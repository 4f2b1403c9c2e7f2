//! Month-by-month payoff simulation for a set of debts

mod state;
mod engine;
mod timeline;
pub mod month;

pub use engine::{
    simulate, NoopObserver, PaymentKind, PaymentObserver, PayoffEngine, SimulationConfig,
    MAX_SIMULATION_MONTHS,
};
pub use timeline::{DebtPayoff, PayoffStatus, SimulationResult, SimulationSummary, TimelinePoint};
