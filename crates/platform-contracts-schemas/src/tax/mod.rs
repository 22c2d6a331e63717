//! Estimated-tax computation request and response.

pub mod estimate_request;
pub mod estimate_result;

pub use estimate_request::TaxComputeRequest;
pub use estimate_result::{QuarterlyPayment, TaxComputeResponse};
