use mortgage_core::payment::housing::{
    housing_payment, Housing, HousingPaymentRequest, LoanProgram, PaymentBreakdown,
};
use mortgage_core::MortgageError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_housing(price: Decimal, down: Decimal) -> Housing {
    Housing {
        purchase_price: price,
        down_payment_amt: down,
        rate_pct: dec!(6.0),
        term_years: 30,
        tax_rate_pct: dec!(1.25),
        hoi_annual: dec!(1800),
        hoa_monthly: Decimal::ZERO,
        finance_upfront: true,
        first_use: true,
    }
}

fn assert_total_is_component_sum(out: &PaymentBreakdown) {
    assert_eq!(
        out.housing_total,
        out.p_i + out.taxes + out.hoi + out.hoa + out.mi
    );
}

// ===========================================================================
// Program scenarios
// ===========================================================================

#[test]
fn test_conventional_85_ltv() {
    // 300k price, 45k down: base = 255000, LTV = 85 -> MI tier 0.25%
    let h = sample_housing(dec!(300000), dec!(45000));
    let result = housing_payment(&h, LoanProgram::Conventional).unwrap();
    let out = &result.result;

    // MI = 255000 * 0.0025 / 12 = 53.125
    assert_eq!(out.mi, dec!(53.125));
    assert_eq!(out.ltv, dec!(85));
    assert_eq!(out.upfront_fee, Decimal::ZERO);
    assert_eq!(out.adjusted_loan, out.base_loan);
    assert!(
        (out.p_i - dec!(1528.85)).abs() < dec!(0.01),
        "Expected P&I ~1528.85, got {}",
        out.p_i
    );
    assert!(
        (out.housing_total - dec!(2044.48)).abs() < dec!(0.01),
        "Expected total ~2044.48, got {}",
        out.housing_total
    );
    assert_total_is_component_sum(out);
}

#[test]
fn test_conventional_mi_tiers() {
    // LTV 97 boundary hits the top tier (0.90%)
    let h = sample_housing(dec!(300000), dec!(9000));
    let out = housing_payment(&h, LoanProgram::Conventional).unwrap().result;
    assert_eq!(out.ltv, dec!(97));
    // MI = 291000 * 0.0090 / 12
    assert_eq!(out.mi, dec!(218.25));

    // LTV 96 falls to the 95-97 tier (0.62%)
    let h = sample_housing(dec!(300000), dec!(12000));
    let out = housing_payment(&h, LoanProgram::Conventional).unwrap().result;
    assert_eq!(out.ltv, dec!(96));
    assert_eq!(out.mi, dec!(288000) * dec!(0.0062) / dec!(12));

    // LTV below 85 carries no MI
    let h = sample_housing(dec!(300000), dec!(60000));
    let out = housing_payment(&h, LoanProgram::Conventional).unwrap().result;
    assert_eq!(out.ltv, dec!(80));
    assert_eq!(out.mi, Decimal::ZERO);
}

#[test]
fn test_fha_financed_upfront() {
    // 300k price, 30k down: base = 270000, UFMIP = 4725 financed in
    let h = sample_housing(dec!(300000), dec!(30000));
    let result = housing_payment(&h, LoanProgram::FHA).unwrap();
    let out = &result.result;

    assert_eq!(out.upfront_fee, dec!(4725));
    assert_eq!(out.adjusted_loan, dec!(274725));
    // LTV 90 <= 95 and term 30 > 15 -> annual MIP 0.70%
    // MI = 274725 * 0.0070 / 12 = 160.25625
    assert_eq!(out.mi, dec!(160.25625));
    assert!(
        (out.housing_total - dec!(2269.87)).abs() < dec!(0.01),
        "Expected total ~2269.87, got {}",
        out.housing_total
    );
    assert_total_is_component_sum(out);
}

#[test]
fn test_fha_cash_upfront() {
    // Paying the UFMIP in cash keeps the loan at base and MIP accrues on it
    let mut h = sample_housing(dec!(300000), dec!(30000));
    h.finance_upfront = false;
    let out = housing_payment(&h, LoanProgram::FHA).unwrap().result;

    assert_eq!(out.upfront_fee, dec!(4725));
    assert_eq!(out.adjusted_loan, dec!(270000));
    // MI = 270000 * 0.0070 / 12 = 157.50
    assert_eq!(out.mi, dec!(157.5));
    assert_total_is_component_sum(&out);
}

#[test]
fn test_fha_short_term_mip_tier() {
    // 15-year term at LTV <= 95 drops the annual MIP to 0.45%
    let mut h = sample_housing(dec!(300000), dec!(30000));
    h.term_years = 15;
    let out = housing_payment(&h, LoanProgram::FHA).unwrap().result;
    assert_eq!(out.mi, dec!(274725) * dec!(0.0045) / dec!(12));
}

#[test]
fn test_va_first_use() {
    // Zero down: funding fee 2.3% of 300000 = 6900, no recurring MI
    let h = sample_housing(dec!(300000), Decimal::ZERO);
    let result = housing_payment(&h, LoanProgram::VA).unwrap();
    let out = &result.result;

    assert_eq!(out.upfront_fee, dec!(6900));
    assert_eq!(out.adjusted_loan, dec!(306900));
    assert_eq!(out.mi, Decimal::ZERO);
    assert!(
        (out.housing_total - dec!(2302.52)).abs() < dec!(0.01),
        "Expected total ~2302.52, got {}",
        out.housing_total
    );
    assert_total_is_component_sum(out);
}

#[test]
fn test_va_subsequent_use() {
    // Subsequent use pays the 3.6% tier
    let mut h = sample_housing(dec!(300000), Decimal::ZERO);
    h.first_use = false;
    let out = housing_payment(&h, LoanProgram::VA).unwrap().result;
    assert_eq!(out.upfront_fee, dec!(10800));
    assert_eq!(out.mi, Decimal::ZERO);
}

#[test]
fn test_usda() {
    // 250k, zero down: guarantee fee 1% = 2500, annual fee on adjusted loan
    let h = sample_housing(dec!(250000), Decimal::ZERO);
    let result = housing_payment(&h, LoanProgram::USDA).unwrap();
    let out = &result.result;

    assert_eq!(out.upfront_fee, dec!(2500));
    assert_eq!(out.adjusted_loan, dec!(252500));
    // MI = 252500 * 0.0035 / 12 = 73.6458...
    assert!(
        (out.mi - dec!(73.6458)).abs() < dec!(0.0001),
        "Expected MI ~73.6458, got {}",
        out.mi
    );
    assert!(
        (out.housing_total - dec!(1997.93)).abs() < dec!(0.01),
        "Expected total ~1997.93, got {}",
        out.housing_total
    );
    assert_total_is_component_sum(out);
}

#[test]
fn test_jumbo_no_fee_no_mi() {
    let h = sample_housing(dec!(900000), dec!(200000));
    let out = housing_payment(&h, LoanProgram::Jumbo).unwrap().result;
    assert_eq!(out.upfront_fee, Decimal::ZERO);
    assert_eq!(out.mi, Decimal::ZERO);
    assert_eq!(out.adjusted_loan, out.base_loan);
    assert_total_is_component_sum(&out);
}

// ===========================================================================
// Edge cases and validation
// ===========================================================================

#[test]
fn test_zero_purchase_price() {
    let h = sample_housing(Decimal::ZERO, Decimal::ZERO);
    let result = housing_payment(&h, LoanProgram::Conventional).unwrap();
    assert_eq!(result.result.ltv, Decimal::ZERO);
    assert_eq!(result.result.base_loan, Decimal::ZERO);
    assert_eq!(result.result.p_i, Decimal::ZERO);
    // Taxes scale off the (zero) price; insurance still accrues
    assert_eq!(result.result.housing_total, dec!(150));
    assert!(!result.warnings.is_empty());
}

#[test]
fn test_down_payment_above_price_floors_loan() {
    let h = sample_housing(dec!(200000), dec!(250000));
    let result = housing_payment(&h, LoanProgram::Conventional).unwrap();
    assert_eq!(result.result.base_loan, Decimal::ZERO);
    assert_eq!(result.result.ltv, Decimal::ZERO);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("Down payment exceeds purchase price")));
}

#[test]
fn test_negative_field_rejected() {
    let mut h = sample_housing(dec!(300000), dec!(30000));
    h.hoi_annual = dec!(-1);
    let err = housing_payment(&h, LoanProgram::FHA).unwrap_err();
    assert!(matches!(err, MortgageError::InvalidInput { .. }));
}

#[test]
fn test_invalid_term_propagates() {
    let mut h = sample_housing(dec!(300000), dec!(30000));
    h.term_years = 0;
    let err = housing_payment(&h, LoanProgram::Conventional).unwrap_err();
    match err {
        MortgageError::InvalidInput { field, .. } => assert_eq!(field, "term_years"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_hoa_passthrough() {
    let mut h = sample_housing(dec!(300000), dec!(60000));
    h.hoa_monthly = dec!(325);
    let out = housing_payment(&h, LoanProgram::Jumbo).unwrap().result;
    assert_eq!(out.hoa, dec!(325));
    assert_total_is_component_sum(&out);
}

// ===========================================================================
// Wire format
// ===========================================================================

#[test]
fn test_request_round_trips_through_serde() {
    let request = HousingPaymentRequest {
        housing: sample_housing(dec!(300000), dec!(30000)),
        program: LoanProgram::FHA,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"FHA\""));

    let parsed: HousingPaymentRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.program, LoanProgram::FHA);
    assert_eq!(parsed.housing.purchase_price, dec!(300000));
}

#[test]
fn test_request_defaults_flags_when_omitted() {
    let json = r#"{
        "housing": {
            "purchase_price": "300000",
            "down_payment_amt": "60000",
            "rate_pct": "6.5",
            "term_years": 30,
            "tax_rate_pct": "1.25",
            "hoi_annual": "1800",
            "hoa_monthly": "0"
        },
        "program": "VA"
    }"#;
    let parsed: HousingPaymentRequest = serde_json::from_str(json).unwrap();
    assert!(parsed.housing.finance_upfront);
    assert!(parsed.housing.first_use);
}

#[test]
fn test_unknown_program_rejected() {
    let err = "Convential".parse::<LoanProgram>().unwrap_err();
    match err {
        MortgageError::InvalidInput { reason, .. } => {
            assert!(reason.contains("Conventional, FHA, VA, USDA, Jumbo"))
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}
