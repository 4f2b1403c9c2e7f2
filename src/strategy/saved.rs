//! Named strategy records a persistence layer can store and reload

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::debt::PayoffPolicy;
use crate::error::Result;
use crate::simulation::SimulationResult;

/// A chosen plan: policy, extra payment and the debt order it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedStrategy {
    pub name: String,
    pub policy: PayoffPolicy,
    pub extra_payment: f64,

    /// Debt ids in target order
    pub debt_order: Vec<String>,

    pub monthly_payment: f64,
    pub payoff_date: NaiveDate,
    pub total_interest_paid: f64,
    pub created_at: DateTime<Utc>,
}

impl SavedStrategy {
    pub fn from_result(name: impl Into<String>, result: &SimulationResult) -> Self {
        Self {
            name: name.into(),
            policy: result.policy,
            extra_payment: result.extra_payment,
            debt_order: result.payoff_order.clone(),
            monthly_payment: result.monthly_payment,
            payoff_date: result.payoff_date,
            total_interest_paid: result.total_interest_paid,
            created_at: Utc::now(),
        }
    }

    /// Write as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

pub fn load_strategy<P: AsRef<Path>>(path: P) -> Result<SavedStrategy> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::Debt;
    use crate::error::PayoffError;
    use crate::strategy::StrategyPlanner;

    #[test]
    fn test_save_and_reload() {
        let debts = vec![
            Debt::new("card", "Card", 900.0, 21.0, 30.0),
            Debt::new("loan", "Loan", 4_000.0, 7.0, 120.0),
        ];
        let planner = StrategyPlanner::starting(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        let result = planner.run(&debts, 80.0, PayoffPolicy::Avalanche);
        let strategy = SavedStrategy::from_result("Spring plan", &result);

        assert_eq!(strategy.debt_order, vec!["card", "loan"]);
        assert_eq!(strategy.monthly_payment, 230.0);
        assert_eq!(strategy.payoff_date, result.payoff_date);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        strategy.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"policy\": \"avalanche\""));

        let reloaded = load_strategy(&path).unwrap();
        assert_eq!(reloaded, strategy);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_strategy(&path), Err(PayoffError::Json(_))));
    }
}
