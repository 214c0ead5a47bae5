//! Calculation endpoint: the one HTTP round trip to the remote calculator.

mod endpoint;
mod error;

pub use endpoint::{CalculationEndpoint, DEFAULT_ENDPOINT, HttpEndpoint, check_status};
pub use error::SubmitError;
