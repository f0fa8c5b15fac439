use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use crate::application::{AppError, PayrollService};
use crate::domain::{EntryType, PayrollConfig, SheetColumns, billing_period, format_date};
use crate::io::{write_row_csv, write_run_json, write_summary};
use crate::source::FileSource;

/// Payrun - Payroll Ledger Entry Calculator
#[derive(Parser)]
#[command(name = "payrun")]
#[command(about = "Computes a contractor's payroll ledger entry from timesheet exports")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the new ledger row and payment summary
    Run {
        /// Timesheet export file (.csv or .json)
        timesheet: PathBuf,

        /// Ledger export file (.csv or .json); omit for an empty history
        #[arg(short, long)]
        ledger: Option<PathBuf>,

        /// Run date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Output format: json, csv, summary
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Sum the unpaid hours on the timesheet
    Hours {
        /// Timesheet export file (.csv or .json)
        timesheet: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Show the billing period for a date
    Period {
        /// Date inside the period (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

/// Sheet columns and row constants, overridable per run. Defaults match the
/// production spreadsheets.
#[derive(Args)]
pub struct ConfigArgs {
    /// Timesheet column holding worked durations
    #[arg(long, default_value = "Total")]
    pub hours_column: String,

    /// Timesheet column holding the paid marker
    #[arg(long, default_value = "Paid? (Pranit to update)")]
    pub paid_column: String,

    /// Ledger column holding the running balance
    #[arg(long, default_value = "Running Balance")]
    pub balance_column: String,

    /// Fiscal year label stamped on the new row
    #[arg(long, default_value = "2024-2025")]
    pub fiscal_year: String,

    /// Hourly rate in dollars
    #[arg(long, default_value_t = 4.0625)]
    pub rate: f64,

    /// Location stamped on the new row
    #[arg(long, default_value = "Remitly")]
    pub location: String,

    /// Entry type: expense or revenue
    #[arg(long = "type", default_value = "expense")]
    pub entry_type: String,

    /// Payment recipient
    #[arg(long, default_value = "Julius")]
    pub recipient: String,

    /// Exact text marking a timesheet row as paid
    #[arg(long, default_value = "Paid")]
    pub paid_marker: String,
}

impl ConfigArgs {
    fn into_config(self) -> Result<PayrollConfig> {
        let entry_type = EntryType::from_str(&self.entry_type)
            .ok_or_else(|| AppError::InvalidEntryType(self.entry_type.clone()))?;

        Ok(PayrollConfig {
            columns: SheetColumns {
                hours: self.hours_column,
                paid: self.paid_column,
                balance: self.balance_column,
            },
            fiscal_year: self.fiscal_year,
            rate: self.rate,
            location: self.location,
            entry_type,
            recipient: self.recipient,
            paid_marker: self.paid_marker,
        })
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run {
                timesheet,
                ledger,
                date,
                format,
                output,
                config,
            } => {
                let config = config.into_config()?;
                let today = resolve_date(date.as_deref())?;

                let source = FileSource::new(timesheet, ledger);
                let service = PayrollService::new(source, config);
                let result = service.run(today)?;

                if self.verbose {
                    eprintln!(
                        "[run] {} unpaid hour(s) (raw {:.4}), {}",
                        result.hours.billable, result.hours.raw, result.entry.description
                    );
                }

                let writer = open_output(output)?;
                match format.as_str() {
                    "json" => write_run_json(writer, &result)?,
                    "csv" => write_row_csv(writer, &result.entry)?,
                    "summary" => write_summary(writer, &result)?,
                    other => {
                        anyhow::bail!("Unknown format '{}'. Use json, csv or summary", other)
                    }
                }
            }

            Commands::Hours { timesheet, config } => {
                let config = config.into_config()?;
                let service = PayrollService::new(FileSource::new(timesheet, None), config);
                let hours = service.unpaid_hours()?;
                println!("Unpaid hours: {} (raw {:.2})", hours.billable, hours.raw);
            }

            Commands::Period { date } => {
                let today = resolve_date(date.as_deref())?;
                let period = billing_period(today);
                println!("{} - {}", format_date(period.start), format_date(period.end));
            }
        }

        Ok(())
    }
}

// Parse a run date or fall back to today's local calendar date.
fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => {
            let parsed = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(s.to_string()))?;
            Ok(parsed)
        }
        None => Ok(Local::now().date_naive()),
    }
}

fn open_output(path: Option<PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Cannot create output file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
