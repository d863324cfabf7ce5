use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::payment::housing::{self, Housing, HousingPaymentRequest, LoanProgram};

use crate::input;

/// Arguments for the housing payment breakdown
#[derive(Args)]
pub struct PaymentArgs {
    /// Path to a JSON file holding a {housing, program} request
    #[arg(long)]
    pub input: Option<String>,

    /// Loan program: Conventional, FHA, VA, USDA, Jumbo
    #[arg(long, default_value = "Conventional")]
    pub program: String,

    /// Purchase price
    #[arg(long, default_value = "300000")]
    pub price: Decimal,

    /// Down payment amount
    #[arg(long, default_value = "60000")]
    pub down: Decimal,

    /// Annual note rate in percent
    #[arg(long, default_value = "6.5")]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long, default_value = "30")]
    pub term: u32,

    /// Annual property tax rate in percent of the price
    #[arg(long, default_value = "1.25")]
    pub tax_rate: Decimal,

    /// Annual homeowner's insurance premium
    #[arg(long, default_value = "1800")]
    pub hoi: Decimal,

    /// Monthly HOA dues
    #[arg(long, default_value = "0")]
    pub hoa: Decimal,

    /// Pay the upfront program fee in cash instead of financing it
    #[arg(long)]
    pub cash_upfront: bool,

    /// VA entitlement has been used before (subsequent-use funding fee)
    #[arg(long)]
    pub subsequent_use: bool,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: HousingPaymentRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        HousingPaymentRequest {
            housing: Housing {
                purchase_price: args.price,
                down_payment_amt: args.down,
                rate_pct: args.rate,
                term_years: args.term,
                tax_rate_pct: args.tax_rate,
                hoi_annual: args.hoi,
                hoa_monthly: args.hoa,
                finance_upfront: !args.cash_upfront,
                first_use: !args.subsequent_use,
            },
            program: args.program.parse::<LoanProgram>()?,
        }
    };

    let result = housing::housing_payment(&request.housing, request.program)?;
    Ok(serde_json::to_value(result)?)
}
