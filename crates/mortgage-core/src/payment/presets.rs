//! Program default parameters.
//!
//! Values are decimal fractions, e.g. 0.009 for 0.90%.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Rate;

/// Conventional MI breakpoints as (minimum LTV, annual MI rate). Scanned in
/// descending LTV order; the first breakpoint the LTV meets or exceeds wins.
pub const CONVENTIONAL_MI: [(Decimal, Rate); 5] = [
    (dec!(97), dec!(0.0090)),
    (dec!(95), dec!(0.0062)),
    (dec!(90), dec!(0.0040)),
    (dec!(85), dec!(0.0025)),
    (dec!(0), dec!(0.0)),
];

/// FHA upfront mortgage insurance premium rate (UFMIP).
pub const FHA_UFMIP_RATE: Rate = dec!(0.0175);

/// Key into the FHA annual MIP table. The premium steps on whether the LTV
/// is at or below 95% and whether the term is at or below 15 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FhaMipKey {
    pub ltv_at_or_below_95: bool,
    pub term_at_or_below_15: bool,
}

/// Annual FHA MIP rate for the given LTV/term tier.
pub fn fha_annual_mip(key: FhaMipKey) -> Rate {
    match (key.ltv_at_or_below_95, key.term_at_or_below_15) {
        (true, true) => dec!(0.0045),
        (true, false) => dec!(0.0070),
        (false, true) => dec!(0.0050),
        (false, false) => dec!(0.0080),
    }
}

/// VA funding fee rate, discounted on first use of the entitlement.
pub fn va_funding_fee(first_use: bool) -> Rate {
    if first_use {
        dec!(0.023)
    } else {
        dec!(0.036)
    }
}

/// USDA upfront guarantee fee rate.
pub const USDA_GUARANTEE_FEE: Rate = dec!(0.01);

/// USDA recurring annual fee rate.
pub const USDA_ANNUAL_FEE: Rate = dec!(0.0035);
