use super::domain::VehicleType;
use serde::{Deserialize, Serialize};

/// Inputs the caller still has to provide before a quote can be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingInput {
    ModelYear,
    ManufactureYear,
    VehiclePrice,
}

/// Reason a request produced no quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteIssue {
    #[error("waiting for input: {missing:?}")]
    IncompleteInput { missing: Vec<MissingInput> },
    #[error("enter valid years (got model {model_year}, manufacture {manufacture_year})")]
    InvalidYear {
        model_year: i32,
        manufacture_year: i32,
    },
    #[error("years cannot be in the future (current year {current_year})")]
    FutureYear { current_year: i32 },
    #[error("years must be {minimum_year} or later")]
    YearTooOld { minimum_year: i32 },
    #[error("model year {model_year} cannot be earlier than manufacture year {manufacture_year}")]
    ModelBeforeManufacture {
        model_year: i32,
        manufacture_year: i32,
    },
    #[error("for a {vehicle_type}, the limit is up to {limit} years (vehicle is {age} years old)")]
    AgeLimitExceeded {
        vehicle_type: VehicleType,
        limit: u32,
        age: u32,
    },
    #[error("minimum down payment is {minimum:.2}")]
    DownPaymentTooLow { minimum: f64, provided: f64 },
    #[error("no lender finances a {age}-year-old {vehicle_type}")]
    NoEligibleLender { vehicle_type: VehicleType, age: u32 },
}

impl QuoteIssue {
    /// `IncompleteInput` only means the form is not filled in yet.
    pub fn is_error(&self) -> bool {
        !matches!(self, QuoteIssue::IncompleteInput { .. })
    }
}
