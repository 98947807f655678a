use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle categories priced by the lenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Light,
    Motorcycle,
    Truck,
}

impl VehicleType {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Light => "light vehicle",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Truck => "truck",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" | "car" => Some(Self::Light),
            "motorcycle" | "moto" => Some(Self::Motorcycle),
            "truck" => Some(Self::Truck),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("term of {0} months is not offered (allowed: 6, 12, 24, 36, 48, 60)")]
pub struct TermError(pub u32);

/// Loan term restricted to the offered month counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TermMonths(u32);

impl TermMonths {
    pub const OFFERED: [u32; 6] = [6, 12, 24, 36, 48, 60];

    pub fn new(months: u32) -> Result<Self, TermError> {
        if Self::OFFERED.contains(&months) {
            Ok(Self(months))
        } else {
            Err(TermError(months))
        }
    }

    pub fn months(&self) -> u32 {
        self.0
    }

    /// Day count used for IOF accrual. Every month counts as 30 days.
    pub fn approximate_days(&self) -> u32 {
        self.0 * 30
    }
}

impl Default for TermMonths {
    fn default() -> Self {
        Self(60)
    }
}

impl TryFrom<u32> for TermMonths {
    type Error = TermError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TermMonths> for u32 {
    fn from(value: TermMonths) -> Self {
        value.0
    }
}

/// Inputs for one quote run. Years stay optional until the caller has both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub model_year: Option<i32>,
    #[serde(default)]
    pub manufacture_year: Option<i32>,
    #[serde(default)]
    pub vehicle_price: f64,
    #[serde(default)]
    pub down_payment: f64,
    #[serde(default, rename = "term_months")]
    pub term: TermMonths,
}

/// A single lender's offer for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub lender_name: String,
    pub monthly_rate: f64,
    pub installment: f64,
    pub total_paid: f64,
}

impl Quote {
    pub fn rate_percent(&self) -> f64 {
        self.monthly_rate * 100.0
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}
