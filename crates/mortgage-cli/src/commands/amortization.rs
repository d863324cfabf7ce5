use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mortgage_core::amortization;

/// Arguments for the monthly payment calculation
#[derive(Args)]
pub struct AmortizationArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Annual note rate in percent
    #[arg(long, default_value = "6.5")]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long, default_value = "30")]
    pub term: u32,
}

/// Arguments for the supported-loan-amount calculation
#[derive(Args)]
pub struct LoanAmountArgs {
    /// Target monthly principal-and-interest payment
    #[arg(long)]
    pub payment: Decimal,

    /// Annual note rate in percent
    #[arg(long, default_value = "6.5")]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long, default_value = "30")]
    pub term: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct AmortizationOutput {
    principal: Decimal,
    rate_pct: Decimal,
    term_years: u32,
    monthly_payment: Decimal,
    total_paid: Decimal,
    total_interest: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct LoanAmountOutput {
    monthly_payment: Decimal,
    rate_pct: Decimal,
    term_years: u32,
    principal: Decimal,
}

pub fn run_amortization(args: AmortizationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let monthly_payment = amortization::amortization(args.principal, args.rate, args.term)?;
    let months = dec!(12) * Decimal::from(args.term);
    let total_paid = monthly_payment * months;

    let output = AmortizationOutput {
        principal: args.principal,
        rate_pct: args.rate,
        term_years: args.term,
        monthly_payment,
        total_paid,
        total_interest: total_paid - args.principal,
    };
    Ok(serde_json::to_value(output)?)
}

pub fn run_loan_amount(args: LoanAmountArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let principal = amortization::inverse_amortization(args.payment, args.rate, args.term)?;

    let output = LoanAmountOutput {
        monthly_payment: args.payment,
        rate_pct: args.rate,
        term_years: args.term,
        principal,
    };
    Ok(serde_json::to_value(output)?)
}
