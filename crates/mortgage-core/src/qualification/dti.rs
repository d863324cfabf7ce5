//! Debt-to-income qualification ratios.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::MortgageResult;

/// Income and debt figures feeding the DTI ratios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DtiInput {
    /// Gross monthly income
    pub total_income: Money,
    /// Total monthly housing payment (from the payment breakdown)
    pub housing_total: Money,
    /// Other recurring monthly debt obligations
    pub other_debts: Money,
}

/// Front-end and back-end debt-to-income ratios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DtiOutput {
    /// Housing payment over income
    pub front_end: Decimal,
    /// Housing payment plus other debts over income
    pub back_end: Decimal,
}

/// Compute front-end and back-end DTI ratios.
///
/// Non-positive income is not an error: both ratios saturate to
/// `Decimal::MAX`, this crate's stand-in for "undefined/unaffordable",
/// and a warning is attached to the envelope.
pub fn compute_dti(input: &DtiInput) -> MortgageResult<ComputationOutput<DtiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.housing_total < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "housing_total".into(),
            reason: "Must be non-negative".into(),
        });
    }

    if input.other_debts < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "other_debts".into(),
            reason: "Must be non-negative".into(),
        });
    }

    let output = if input.total_income <= Decimal::ZERO {
        warnings.push(
            "Income is zero or negative — ratios reported as Decimal::MAX (unaffordable)"
                .to_string(),
        );
        DtiOutput {
            front_end: Decimal::MAX,
            back_end: Decimal::MAX,
        }
    } else {
        DtiOutput {
            front_end: input.housing_total / input.total_income,
            back_end: (input.housing_total + input.other_debts) / input.total_income,
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Debt-to-Income Qualification Ratios",
        input,
        warnings,
        elapsed,
        output,
    ))
}
