mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{AmortizationArgs, LoanAmountArgs};
use commands::payment::PaymentArgs;
use commands::qualification::DtiArgs;

/// Mortgage payment and qualification calculations
#[derive(Parser)]
#[command(
    name = "mtg",
    version,
    about = "Mortgage payment and DTI qualification calculations",
    long_about = "A CLI for mortgage housing-payment and qualification math with \
                  decimal precision. Breaks a purchase down into P&I, taxes, \
                  insurance, HOA, and mortgage insurance under the Conventional, \
                  FHA, VA, USDA, and Jumbo programs, and computes front-end and \
                  back-end DTI ratios."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a purchase down into monthly housing payment components
    Payment(PaymentArgs),
    /// Compute front-end and back-end debt-to-income ratios
    Dti(DtiArgs),
    /// Monthly principal-and-interest payment for a loan
    Amortization(AmortizationArgs),
    /// Loan amount supported by a target monthly payment
    LoanAmount(LoanAmountArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Dti(args) => commands::qualification::run_dti(args),
        Commands::Amortization(args) => commands::amortization::run_amortization(args),
        Commands::LoanAmount(args) => commands::amortization::run_loan_amount(args),
        Commands::Version => {
            println!("mtg {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
