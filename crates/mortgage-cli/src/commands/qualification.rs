use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::qualification::dti::{self, DtiInput};

use crate::input;

/// Arguments for the debt-to-income calculation
#[derive(Args)]
pub struct DtiArgs {
    /// Path to a JSON file holding income and debt figures
    #[arg(long)]
    pub input: Option<String>,

    /// Gross monthly income
    #[arg(long, default_value = "8000")]
    pub income: Decimal,

    /// Total monthly housing payment (see the payment subcommand)
    #[arg(long)]
    pub housing_total: Option<Decimal>,

    /// Other recurring monthly debts
    #[arg(long, default_value = "0")]
    pub other_debts: Decimal,
}

pub fn run_dti(args: DtiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let dti_input: DtiInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let housing_total = args
            .housing_total
            .ok_or("--housing-total (or --input <file.json> / stdin) is required for DTI")?;
        DtiInput {
            total_income: args.income,
            housing_total,
            other_debts: args.other_debts,
        }
    };

    let result = dti::compute_dti(&dti_input)?;
    Ok(serde_json::to_value(result)?)
}
