//! Debt Payoff Planner CLI
//!
//! Loads a debt export, runs snowball/avalanche simulations and prints the result

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use debt_payoff::debt::{self, load_debts, load_debts_json, validate_debts, validate_extra_payment};
use debt_payoff::simulation::{month, PayoffStatus, SimulationSummary, MAX_SIMULATION_MONTHS};
use debt_payoff::{Debt, PayoffPolicy, SavedStrategy, SimulationConfig, SimulationResult, StrategyComparison, StrategyPlanner};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "debt-payoff", version, about = "Snowball and avalanche debt payoff planner")]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Options {
    /// Debt export (.json is read as JSON, anything else as CSV)
    #[arg(long, global = true, default_value = debt::loader::DEFAULT_DEBTS_PATH)]
    debts: PathBuf,

    /// First month of the plan as YYYY-MM (defaults to the current month)
    #[arg(long, global = true)]
    start: Option<String>,

    /// Longest timeline to simulate, opening month included
    #[arg(long, global = true, default_value_t = MAX_SIMULATION_MONTHS)]
    max_months: u32,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single policy
    Simulate {
        /// Extra amount paid each month on top of the minimums
        #[arg(long, default_value_t = 0.0)]
        extra: f64,

        #[arg(long, value_enum, default_value_t = Policy::Avalanche)]
        policy: Policy,

        /// Save the plan as a JSON strategy record
        #[arg(long)]
        save_strategy: Option<PathBuf>,

        /// Name stored with --save-strategy
        #[arg(long, default_value = "My payoff plan")]
        name: String,
    },
    /// Run snowball and avalanche side by side
    Compare {
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
    },
    /// Compare both policies across several extra payments
    Sweep {
        /// Comma-separated extra payments, e.g. 0,100,250
        #[arg(long, value_delimiter = ',', required = true)]
        extra: Vec<f64>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Policy {
    Snowball,
    Avalanche,
}

impl From<Policy> for PayoffPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Snowball => PayoffPolicy::Snowball,
            Policy::Avalanche => PayoffPolicy::Avalanche,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

/// One timeline row of CSV output
#[derive(Serialize)]
struct TimelineRow<'a> {
    policy: &'a str,
    month: u32,
    date: String,
    balance: String,
    interest: String,
    paid: String,
}

/// One sweep row of CSV output
#[derive(Serialize)]
struct SweepRow<'a> {
    extra_payment: f64,
    policy: &'a str,
    months: u32,
    payoff_date: String,
    total_interest: String,
    total_paid: String,
    paid_off: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let opts = &cli.options;

    let debts = read_debts(&opts.debts)?;
    validate_debts(&debts).context("invalid debt data")?;
    info!("loaded {} debts from {}", debts.len(), opts.debts.display());

    let mut config = SimulationConfig {
        max_months: opts.max_months,
        ..Default::default()
    };
    if let Some(start) = &opts.start {
        config.start_month = month::parse_month(start)?;
    }
    let planner = StrategyPlanner::new(config);

    let mut out: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };

    match &cli.command {
        Command::Simulate { extra, policy, save_strategy, name } => {
            validate_extra_payment(*extra)?;
            let result = planner.run(&debts, *extra, (*policy).into());
            write_simulation(&mut out, opts, &result)?;

            if let Some(path) = save_strategy {
                SavedStrategy::from_result(name.as_str(), &result)
                    .save(path)
                    .with_context(|| format!("cannot save strategy to {}", path.display()))?;
                info!("saved strategy '{}' to {}", name, path.display());
            }
        }
        Command::Compare { extra } => {
            validate_extra_payment(*extra)?;
            let comparison = planner.compare(&debts, *extra);
            write_comparison(&mut out, opts, &comparison)?;
        }
        Command::Sweep { extra } => {
            for &e in extra {
                validate_extra_payment(e)?;
            }
            let sweep = planner.sweep(&debts, extra);
            write_sweep(&mut out, opts, &sweep)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn read_debts(path: &Path) -> Result<Vec<Debt>> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let debts = if is_json {
        load_debts_json(path)
    } else {
        load_debts(path)
    };
    debts.with_context(|| format!("cannot load debts from {}", path.display()))
}

fn write_simulation(out: &mut dyn Write, opts: &Options, result: &SimulationResult) -> Result<()> {
    match opts.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            write_timeline(&mut writer, result)?;
            writer.flush()?;
        }
        Format::Table => {
            print_summary(out, &result.summary(), opts.max_months)?;
            writeln!(out)?;
            writeln!(out, "Payoff order:")?;
            for (i, payoff) in result.debt_payoffs.iter().enumerate() {
                writeln!(
                    out,
                    "  {:>2}. {:<24} month {:>4}  ({})",
                    i + 1,
                    payoff.name,
                    payoff.month,
                    payoff.date.format("%b %Y")
                )?;
            }
        }
    }
    Ok(())
}

fn write_comparison(out: &mut dyn Write, opts: &Options, cmp: &StrategyComparison) -> Result<()> {
    match opts.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, cmp)?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            write_timeline(&mut writer, &cmp.snowball)?;
            write_timeline(&mut writer, &cmp.avalanche)?;
            writer.flush()?;
        }
        Format::Table => {
            for policy in PayoffPolicy::ALL {
                print_summary(out, &cmp.result(policy).summary(), opts.max_months)?;
                writeln!(out)?;
            }
            let saved = cmp.interest_saved();
            writeln!(
                out,
                "Avalanche vs snowball: {} ${:.2} interest, {} months",
                if saved >= 0.0 { "saves" } else { "costs" },
                saved.abs(),
                cmp.months_saved()
            )?;
            writeln!(out, "Recommended: {}", cmp.recommended())?;
        }
    }
    Ok(())
}

fn write_sweep(out: &mut dyn Write, opts: &Options, sweep: &[StrategyComparison]) -> Result<()> {
    match opts.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, sweep)?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for cmp in sweep {
                for policy in PayoffPolicy::ALL {
                    let summary = cmp.result(policy).summary();
                    writer.serialize(SweepRow {
                        extra_payment: cmp.extra_payment,
                        policy: policy.as_str(),
                        months: summary.months,
                        payoff_date: summary.payoff_date.format("%Y-%m").to_string(),
                        total_interest: format!("{:.2}", summary.total_interest_paid),
                        total_paid: format!("{:.2}", summary.total_paid),
                        paid_off: cmp.result(policy).is_paid_off(),
                    })?;
                }
            }
            writer.flush()?;
        }
        Format::Table => {
            writeln!(
                out,
                "{:>10} {:>8} {:>14} {:>8} {:>14} {:>12}",
                "Extra", "Snowball", "Interest", "Aval.", "Interest", "Best"
            )?;
            writeln!(out, "{}", "-".repeat(71))?;
            for cmp in sweep {
                writeln!(
                    out,
                    "{:>10.2} {:>8} {:>14.2} {:>8} {:>14.2} {:>12}",
                    cmp.extra_payment,
                    cmp.snowball.months(),
                    cmp.snowball.total_interest_paid,
                    cmp.avalanche.months(),
                    cmp.avalanche.total_interest_paid,
                    cmp.recommended()
                )?;
            }
        }
    }
    Ok(())
}

fn write_timeline<W: Write>(writer: &mut csv::Writer<W>, result: &SimulationResult) -> Result<()> {
    for point in &result.timeline {
        writer.serialize(TimelineRow {
            policy: result.policy.as_str(),
            month: point.month,
            date: point.date.format("%Y-%m").to_string(),
            balance: format!("{:.2}", point.aggregate_balance),
            interest: format!("{:.2}", point.interest_accrued),
            paid: format!("{:.2}", point.amount_paid),
        })?;
    }
    Ok(())
}

fn print_summary(out: &mut dyn Write, summary: &SimulationSummary, max_months: u32) -> Result<()> {
    writeln!(out, "{} plan", summary.policy_name)?;
    writeln!(out, "{}", "=".repeat(summary.policy_name.len() + 5))?;
    writeln!(out, "  Starting balance: ${:.2}", summary.starting_balance)?;
    writeln!(out, "  Monthly payment:  ${:.2}", summary.monthly_payment)?;
    writeln!(out, "  Total interest:   ${:.2}", summary.total_interest_paid)?;
    writeln!(out, "  Total paid:       ${:.2}", summary.total_paid)?;

    if summary.status == PayoffStatus::Unresolved {
        writeln!(
            out,
            "  This payment plan will not pay off your debt within {} (${:.2} still owed)",
            horizon(max_months),
            summary.final_balance
        )?;
    } else {
        writeln!(
            out,
            "  Debt free:        {} ({} months)",
            summary.payoff_date.format("%B %Y"),
            summary.months
        )?;
    }
    Ok(())
}

/// Cap as whole years, or months when it is not a whole number of years
fn horizon(max_months: u32) -> String {
    match (max_months / 12, max_months % 12) {
        (1, 0) => "1 year".to_string(),
        (years, 0) if years > 0 => format!("{years} years"),
        _ if max_months == 1 => "1 month".to_string(),
        _ => format!("{max_months} months"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summary(status: PayoffStatus, final_balance: f64) -> SimulationSummary {
        SimulationSummary {
            policy_name: "Avalanche".to_string(),
            months: 5,
            payoff_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            monthly_payment: 50.0,
            total_interest_paid: 120.0,
            total_paid: 250.0,
            starting_balance: 10_000.0,
            final_balance,
            status,
        }
    }

    fn render(summary: &SimulationSummary, max_months: u32) -> String {
        let mut buf = Vec::new();
        print_summary(&mut buf, summary, max_months).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_horizon() {
        assert_eq!(horizon(1200), "100 years");
        assert_eq!(horizon(12), "1 year");
        assert_eq!(horizon(18), "18 months");
        assert_eq!(horizon(6), "6 months");
        assert_eq!(horizon(1), "1 month");
    }

    #[test]
    fn test_unresolved_summary_uses_status() {
        let text = render(&summary(PayoffStatus::Unresolved, 9_870.0), 6);
        assert!(text.contains("will not pay off your debt within 6 months"), "{text}");
        assert!(!text.contains("Debt free"));
    }

    #[test]
    fn test_paid_off_summary() {
        let text = render(&summary(PayoffStatus::PaidOff, 0.0), MAX_SIMULATION_MONTHS);
        assert!(text.contains("Debt free:        June 2026 (5 months)"), "{text}");
    }
}
