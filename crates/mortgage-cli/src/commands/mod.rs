pub mod amortization;
pub mod payment;
pub mod qualification;
