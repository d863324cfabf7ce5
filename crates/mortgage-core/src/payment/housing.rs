//! Monthly housing payment breakdown across the five loan programs.
//!
//! Applies program-specific upfront fee and mortgage insurance rules
//! (Conventional, FHA, VA, USDA, Jumbo) on top of the level-payment
//! amortization math. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::amortization;
use crate::error::MortgageError;
use crate::payment::presets;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Loan program selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanProgram {
    Conventional,
    FHA,
    VA,
    USDA,
    Jumbo,
}

impl std::str::FromStr for LoanProgram {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conventional" => Ok(Self::Conventional),
            "FHA" => Ok(Self::FHA),
            "VA" => Ok(Self::VA),
            "USDA" => Ok(Self::USDA),
            "Jumbo" => Ok(Self::Jumbo),
            other => Err(MortgageError::InvalidInput {
                field: "program".into(),
                reason: format!(
                    "Unknown program '{other}'. Use: Conventional, FHA, VA, USDA, Jumbo"
                ),
            }),
        }
    }
}

impl std::fmt::Display for LoanProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Conventional => "Conventional",
            Self::FHA => "FHA",
            Self::VA => "VA",
            Self::USDA => "USDA",
            Self::Jumbo => "Jumbo",
        })
    }
}

fn default_true() -> bool {
    true
}

/// A housing purchase application: the figures needed to price the monthly
/// payment. Immutable value object, built fresh per calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Housing {
    /// Contract purchase price
    pub purchase_price: Money,
    /// Cash down payment amount
    pub down_payment_amt: Money,
    /// Annual note rate in percentage points (6.0 = 6%)
    pub rate_pct: Percent,
    /// Loan term in years
    pub term_years: u32,
    /// Annual property tax rate in percentage points of the purchase price
    pub tax_rate_pct: Percent,
    /// Annual homeowner's insurance premium
    pub hoi_annual: Money,
    /// Monthly HOA dues
    pub hoa_monthly: Money,
    /// Whether the upfront program fee is financed into the loan
    #[serde(default = "default_true")]
    pub finance_upfront: bool,
    /// First use of a VA entitlement (drives the funding fee tier)
    #[serde(default = "default_true")]
    pub first_use: bool,
}

/// Wire-format request pairing a housing record with a program selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousingPaymentRequest {
    pub housing: Housing,
    pub program: LoanProgram,
}

/// Monthly housing payment breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Purchase price less down payment, floored at zero
    pub base_loan: Money,
    /// Base loan plus any financed upfront fee
    pub adjusted_loan: Money,
    /// Loan-to-value as a percentage of the purchase price
    pub ltv: Percent,
    /// Monthly principal and interest
    pub p_i: Money,
    /// Monthly property taxes
    pub taxes: Money,
    /// Monthly homeowner's insurance
    pub hoi: Money,
    /// Monthly HOA dues
    pub hoa: Money,
    /// Monthly mortgage insurance premium
    pub mi: Money,
    /// Total monthly housing payment
    pub housing_total: Money,
    /// One-time program fee charged at origination
    pub upfront_fee: Money,
}

/// Program-dependent charges derived from the base loan.
struct ProgramCharges {
    upfront_fee: Money,
    adjusted_loan: Money,
    mi_monthly: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Break a housing application down into its monthly payment components
/// under the selected loan program.
///
/// Returns a `ComputationOutput<PaymentBreakdown>` whose `housing_total` is
/// the exact sum of P&I, taxes, insurance, HOA, and mortgage insurance. The
/// invalid-term error from the amortization layer propagates unchanged.
pub fn housing_payment(
    housing: &Housing,
    program: LoanProgram,
) -> MortgageResult<ComputationOutput<PaymentBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(housing, &mut warnings)?;

    let base_loan = (housing.purchase_price - housing.down_payment_amt).max(Decimal::ZERO);
    let ltv = if housing.purchase_price.is_zero() {
        Decimal::ZERO
    } else {
        dec!(100) * base_loan / housing.purchase_price
    };

    let charges = program_charges(housing, program, base_loan, ltv);

    let p_i = amortization(charges.adjusted_loan, housing.rate_pct, housing.term_years)?;
    let taxes = housing.purchase_price * housing.tax_rate_pct / dec!(100) / dec!(12);
    let hoi = housing.hoi_annual / dec!(12);
    let hoa = housing.hoa_monthly;
    let housing_total = p_i + taxes + hoi + hoa + charges.mi_monthly;

    let output = PaymentBreakdown {
        base_loan,
        adjusted_loan: charges.adjusted_loan,
        ltv,
        p_i,
        taxes,
        hoi,
        hoa,
        mi: charges.mi_monthly,
        housing_total,
        upfront_fee: charges.upfront_fee,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        &format!("Housing Payment Breakdown ({program})"),
        housing,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(housing: &Housing, warnings: &mut Vec<String>) -> MortgageResult<()> {
    for (field, value) in [
        ("purchase_price", housing.purchase_price),
        ("down_payment_amt", housing.down_payment_amt),
        ("rate_pct", housing.rate_pct),
        ("tax_rate_pct", housing.tax_rate_pct),
        ("hoi_annual", housing.hoi_annual),
        ("hoa_monthly", housing.hoa_monthly),
    ] {
        if value < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: field.into(),
                reason: "Must be non-negative".into(),
            });
        }
    }

    if housing.purchase_price.is_zero() {
        warnings.push("Purchase price is zero — LTV reported as 0".to_string());
    }

    if housing.down_payment_amt > housing.purchase_price {
        warnings.push(
            "Down payment exceeds purchase price — loan amount floored at zero".to_string(),
        );
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Program fee and insurance rules
// ---------------------------------------------------------------------------

fn program_charges(
    housing: &Housing,
    program: LoanProgram,
    base_loan: Money,
    ltv: Percent,
) -> ProgramCharges {
    let mut upfront_fee = Decimal::ZERO;
    let mut adjusted_loan = base_loan;
    let mut mi_monthly = Decimal::ZERO;

    match program {
        LoanProgram::Conventional => {
            mi_monthly = base_loan * conventional_mi_rate(ltv) / dec!(12);
        }
        LoanProgram::FHA => {
            upfront_fee = base_loan * presets::FHA_UFMIP_RATE;
            if housing.finance_upfront {
                adjusted_loan += upfront_fee;
            }
            let key = presets::FhaMipKey {
                ltv_at_or_below_95: ltv <= dec!(95),
                term_at_or_below_15: housing.term_years <= 15,
            };
            mi_monthly = adjusted_loan * presets::fha_annual_mip(key) / dec!(12);
        }
        LoanProgram::VA => {
            // The funding fee stands in for recurring MI on VA loans
            upfront_fee = base_loan * presets::va_funding_fee(housing.first_use);
            if housing.finance_upfront {
                adjusted_loan += upfront_fee;
            }
        }
        LoanProgram::USDA => {
            upfront_fee = base_loan * presets::USDA_GUARANTEE_FEE;
            if housing.finance_upfront {
                adjusted_loan += upfront_fee;
            }
            mi_monthly = adjusted_loan * presets::USDA_ANNUAL_FEE / dec!(12);
        }
        LoanProgram::Jumbo => {}
    }

    ProgramCharges {
        upfront_fee,
        adjusted_loan,
        mi_monthly,
    }
}

fn conventional_mi_rate(ltv: Percent) -> Rate {
    presets::CONVENTIONAL_MI
        .iter()
        .find(|(threshold, _)| ltv >= *threshold)
        .map(|(_, rate)| *rate)
        .unwrap_or(Decimal::ZERO)
}
