//! Debt data structures matching the account export format

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PayoffError;

/// A single debt as loaded from the user's accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Opaque identifier, unique within one input set
    pub id: String,

    /// Display label (not used in any calculation)
    #[serde(default)]
    pub name: String,

    /// Principal currently owed
    #[serde(alias = "current_balance")]
    pub balance: f64,

    /// Nominal annual rate as a percentage (19.99 = 19.99%)
    #[serde(alias = "interest_rate")]
    pub annual_rate_percent: f64,

    /// Minimum required monthly payment
    #[serde(alias = "min_payment")]
    pub minimum_payment: f64,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        annual_rate_percent: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            annual_rate_percent,
            minimum_payment,
        }
    }
}

/// Ordering policy deciding which debt receives the extra payment first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffPolicy {
    /// Smallest balance first
    Snowball,
    /// Highest interest rate first
    Avalanche,
}

impl PayoffPolicy {
    pub const ALL: [PayoffPolicy; 2] = [PayoffPolicy::Snowball, PayoffPolicy::Avalanche];

    /// Human-readable label used in results and reports
    pub fn label(&self) -> &'static str {
        match self {
            PayoffPolicy::Snowball => "Snowball",
            PayoffPolicy::Avalanche => "Avalanche",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffPolicy::Snowball => "snowball",
            PayoffPolicy::Avalanche => "avalanche",
        }
    }

    /// Target order for a run. The sort is stable, so ties keep input order.
    pub fn order<'a>(&self, debts: &'a [Debt]) -> Vec<&'a Debt> {
        let mut ordered: Vec<&Debt> = debts.iter().collect();
        match self {
            PayoffPolicy::Snowball => ordered.sort_by(|a, b| a.balance.total_cmp(&b.balance)),
            PayoffPolicy::Avalanche => {
                ordered.sort_by(|a, b| b.annual_rate_percent.total_cmp(&a.annual_rate_percent))
            }
        }
        ordered
    }

    /// Ids in target order
    pub fn order_ids(&self, debts: &[Debt]) -> Vec<String> {
        self.order(debts).into_iter().map(|d| d.id.clone()).collect()
    }
}

impl fmt::Display for PayoffPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PayoffPolicy {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(PayoffPolicy::Snowball),
            "avalanche" => Ok(PayoffPolicy::Avalanche),
            other => Err(PayoffError::UnknownPolicy(other.to_string())),
        }
    }
}
