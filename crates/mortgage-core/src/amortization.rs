use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{Money, Percent, Rate};
use crate::MortgageResult;

/// Payments per year on a standard mortgage schedule.
const PAYMENTS_PER_YEAR: i64 = 12;

fn payment_count(term_years: u32) -> MortgageResult<i64> {
    if term_years == 0 {
        return Err(MortgageError::InvalidInput {
            field: "term_years".into(),
            reason: "Loan term must be at least one year".into(),
        });
    }
    Ok(i64::from(term_years) * PAYMENTS_PER_YEAR)
}

fn monthly_rate(rate_pct: Percent) -> Rate {
    rate_pct / dec!(100) / dec!(12)
}

/// Monthly principal-and-interest payment on a fixed-rate level-payment loan.
///
/// `rate_pct` is the annual note rate in percentage points (6.0 = 6%). A zero
/// rate degenerates to straight-line repayment of the principal.
pub fn amortization(principal: Money, rate_pct: Percent, term_years: u32) -> MortgageResult<Money> {
    let n = payment_count(term_years)?;
    let r = monthly_rate(rate_pct);

    if r.is_zero() {
        return Ok(principal / Decimal::from(n));
    }

    let growth = (Decimal::ONE + r).powi(n);
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: format!("level-payment factor over {n} payments"),
        });
    }

    Ok(principal * r * growth / denominator)
}

/// Loan amount that a given monthly payment supports — the algebraic inverse
/// of [`amortization`], with the same zero-rate and term policy.
pub fn inverse_amortization(
    payment: Money,
    rate_pct: Percent,
    term_years: u32,
) -> MortgageResult<Money> {
    let n = payment_count(term_years)?;
    let r = monthly_rate(rate_pct);

    if r.is_zero() {
        return Ok(payment * Decimal::from(n));
    }

    let growth = (Decimal::ONE + r).powi(n);
    let denominator = r * growth;
    if denominator.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: format!("annuity discount factor over {n} payments"),
        });
    }

    Ok(payment * (growth - Decimal::ONE) / denominator)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_payment() {
        // 200k at 6% over 30 years is the canonical ~1199.10 payment
        let payment = amortization(dec!(200000), dec!(6.0), 30).unwrap();
        assert!(
            (payment - dec!(1199.10)).abs() < dec!(0.01),
            "Expected ~1199.10, got {payment}"
        );
    }

    #[test]
    fn test_round_trip_recovers_principal() {
        for (principal, rate, term) in [
            (dec!(200000), dec!(6.0), 30u32),
            (dec!(450000), dec!(3.25), 15),
            (dec!(87500), dec!(8.875), 40),
            (dec!(1000000), dec!(0.125), 10),
        ] {
            let payment = amortization(principal, rate, term).unwrap();
            let recovered = inverse_amortization(payment, rate, term).unwrap();
            let rel = (recovered - principal).abs() / principal;
            assert!(
                rel < dec!(0.0001),
                "Round trip drifted: {principal} -> {payment} -> {recovered}"
            );
        }
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = amortization(dec!(120000), Decimal::ZERO, 10).unwrap();
        assert_eq!(payment, dec!(120000) / dec!(120));

        let principal = inverse_amortization(dec!(1000), Decimal::ZERO, 10).unwrap();
        assert_eq!(principal, dec!(120000));
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = amortization(dec!(200000), dec!(6.0), 0).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));

        let err = inverse_amortization(dec!(1200), dec!(6.0), 0).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }

    #[test]
    fn test_payment_scales_with_principal() {
        let single = amortization(dec!(100000), dec!(5.5), 30).unwrap();
        let double = amortization(dec!(200000), dec!(5.5), 30).unwrap();
        assert!((double - single * dec!(2)).abs() < dec!(0.000001));
    }
}
