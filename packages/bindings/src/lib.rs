use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Housing payment
// ---------------------------------------------------------------------------

#[napi]
pub fn housing_payment(input_json: String) -> NapiResult<String> {
    let request: mortgage_core::payment::housing::HousingPaymentRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::payment::housing::housing_payment(&request.housing, request.program)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Qualification
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_dti(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::qualification::dti::DtiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage_core::qualification::dti::compute_dti(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
