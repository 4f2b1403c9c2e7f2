//! Load debts from CSV or JSON exports

use super::Debt;
use crate::error::Result;
use csv::{Reader, Trim};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default location of the debt export used by the CLI
pub const DEFAULT_DEBTS_PATH: &str = "data/debts.csv";

/// Raw CSV row matching the account export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(alias = "current_balance")]
    balance: f64,
    #[serde(alias = "annual_rate_percent")]
    interest_rate: f64,
    #[serde(alias = "min_payment")]
    minimum_payment: f64,
}

impl CsvRow {
    fn into_debt(self) -> Debt {
        let name = if self.name.is_empty() {
            self.id.clone()
        } else {
            self.name
        };
        Debt::new(self.id, name, self.balance, self.interest_rate, self.minimum_payment)
    }
}

/// Load all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let path = path.as_ref();
    let debts = load_debts_from_reader(File::open(path)?)?;
    debug!("loaded {} debts from {}", debts.len(), path.display());
    Ok(debts)
}

/// Load debts from any reader (e.g., string buffer, stdin)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<Debt>> {
    let mut debts = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.into_debt());
    }
    Ok(debts)
}

/// Load debts from a JSON array of debt objects
pub fn load_debts_json<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let debts: Vec<Debt> = serde_json::from_reader(reader)?;
    debug!("loaded {} debts from {}", debts.len(), path.display());
    Ok(debts)
}

/// Load debts from the default data/debts.csv location
pub fn load_default_debts() -> Result<Vec<Debt>> {
    load_debts(DEFAULT_DEBTS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayoffError;
    use std::io::Write;

    #[test]
    fn test_load_default_debts() {
        let debts = load_default_debts().expect("Failed to load debts");
        assert_eq!(debts.len(), 5);

        let visa = &debts[0];
        assert_eq!(visa.id, "visa");
        assert_eq!(visa.name, "Visa Signature");
        assert_eq!(visa.balance, 4250.0);
        assert_eq!(visa.annual_rate_percent, 22.99);
        assert_eq!(visa.minimum_payment, 127.5);
    }

    #[test]
    fn test_load_with_aliased_headers() {
        let data = "id, current_balance, annual_rate_percent, min_payment\n\
                    loan-1, 1500.50, 7.5, 45\n";
        let debts = load_debts_from_reader(data.as_bytes()).unwrap();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].name, "loan-1");
        assert_eq!(debts[0].balance, 1500.5);
        assert_eq!(debts[0].annual_rate_percent, 7.5);
        assert_eq!(debts[0].minimum_payment, 45.0);
    }

    #[test]
    fn test_load_rejects_non_numeric_balance() {
        let data = "id,name,balance,interest_rate,minimum_payment\nvisa,Visa,lots,19.9,25\n";
        let err = load_debts_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PayoffError::Csv(_)));
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"car","name":"Car","balance":9000,"interest_rate":6.0,"minimum_payment":250}},
                {{"id":"card","balance":300,"annual_rate_percent":21.0,"min_payment":25}}]"#
        )
        .unwrap();

        let debts = load_debts_json(file.path()).unwrap();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].annual_rate_percent, 6.0);
        assert_eq!(debts[1].name, "");
        assert_eq!(debts[1].minimum_payment, 25.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_debts("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, PayoffError::Io(_)));
    }
}
