//! ArmCalc Command Line Tool
//!
//! Provides commands for converting between the two linear-referencing
//! systems on the state highway network:
//! - to-srmp: convert an ARM measure to SRMP
//! - to-arm: convert an SRMP measure to ARM
//! - batch: run a JSON file of calculations in one service call

use anyhow::{Context, Result};
use armcalc_core::{AbIndicator, CalcInput};
use armcalc_http::ArmCalcClient;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "armcalc")]
#[command(version)]
#[command(about = "ArmCalc Command Line Tool - Convert between ARM and SRMP measures")]
#[command(long_about = None)]
struct Cli {
    /// Override the service base URL
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an ARM measure to SRMP
    #[command(name = "to-srmp")]
    ToSrmp {
        /// Accumulated Route Mileage to convert
        #[arg(long)]
        arm: f64,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Convert an SRMP measure to ARM
    #[command(name = "to-arm")]
    ToArm {
        /// State Route Milepost to convert
        #[arg(long)]
        srmp: f64,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Run a batch of calculations from a JSON file
    #[command(about = "POST a JSON array of calculation inputs in one request")]
    Batch {
        /// Path to a JSON array of calculation inputs
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Three character state route identifier, e.g. 005
    #[arg(long)]
    sr: String,

    /// Related Route Type
    #[arg(long)]
    rrt: Option<String>,

    /// Related Route Qualifier
    #[arg(long)]
    rrq: Option<String>,

    /// Ahead/back indicator (A or B)
    #[arg(long, value_parser = parse_ab_indicator)]
    ab: Option<AbIndicator>,

    /// Date the measurement was collected (YYYY-MM-DD, default today)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// LRS publication date to resolve against (YYYY-MM-DD, default today)
    #[arg(long)]
    response_date: Option<NaiveDate>,
}

fn parse_ab_indicator(text: &str) -> Result<AbIndicator, String> {
    AbIndicator::from_str(text)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = match &cli.url {
        Some(url) => ArmCalcClient::with_url(url.clone()),
        None => ArmCalcClient::new(),
    };

    match cli.command {
        Commands::ToSrmp { arm, common } => {
            let mut input = common.into_input();
            input.arm = Some(arm);
            let output = client
                .calc_srmp(&input)
                .await
                .context("ARM to SRMP calculation failed")?;
            print_output(&output)
        }
        Commands::ToArm { srmp, common } => {
            let mut input = common.into_input();
            input.srmp = Some(srmp);
            let output = client
                .calc_arm(&input)
                .await
                .context("SRMP to ARM calculation failed")?;
            print_output(&output)
        }
        Commands::Batch { file } => handle_batch(&client, &file).await,
    }
}

impl CommonArgs {
    fn into_input(self) -> CalcInput {
        let today = Utc::now().date_naive();
        CalcInput {
            calc_direction: None,
            sr: self.sr,
            rrt: self.rrt,
            rrq: self.rrq,
            ab_indicator: self.ab,
            reference_date: midnight_utc(self.reference_date.unwrap_or(today)),
            arm: None,
            srmp: None,
            response_date: midnight_utc(self.response_date.unwrap_or(today)),
            trans_id: None,
        }
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

async fn handle_batch(client: &ArmCalcClient, file: &PathBuf) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let inputs: Vec<CalcInput> =
        serde_json::from_str(&json).with_context(|| format!("Invalid input JSON: {}", file.display()))?;

    let outputs = client
        .calc_batch(&inputs)
        .await
        .context("Batch calculation failed")?;

    let failures = outputs.iter().filter(|o| !o.is_success()).count();
    if failures > 0 {
        eprintln!("{failures} of {} calculations reported a failure", outputs.len());
    }

    println!("{}", serde_json::to_string_pretty(&outputs)?);
    Ok(())
}

fn print_output(output: &armcalc_core::CalcOutput) -> Result<()> {
    if !output.is_success() {
        eprintln!(
            "Service reported failure (code {}): {}",
            output.calculation_return_code,
            output
                .calculation_return_message
                .as_deref()
                .unwrap_or("no message")
        );
    }
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}
