use super::domain::TermMonths;
use serde::{Deserialize, Serialize};

/// Fee, insurance and IOF parameters shared by every quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConstants {
    /// Added to the financed principal; never shown as its own line.
    pub embedded_fee: f64,
    /// Added to every installment.
    pub monthly_insurance: f64,
    pub iof_daily_rate: f64,
    pub iof_additional_rate: f64,
}

impl Default for PricingConstants {
    fn default() -> Self {
        Self {
            embedded_fee: 500.0,
            monthly_insurance: 200.0,
            iof_daily_rate: 0.000082,
            iof_additional_rate: 0.0038,
        }
    }
}

impl PricingConstants {
    /// IOF over `base` for the whole term: flat rate plus daily accrual.
    pub fn iof(&self, base: f64, term: TermMonths) -> f64 {
        base * (self.iof_additional_rate + self.iof_daily_rate * f64::from(term.approximate_days()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalBreakdown {
    pub effective_down_payment: f64,
    pub base_financed: f64,
    pub iof: f64,
    pub embedded_fee: f64,
    pub principal: f64,
}

/// Amount the lenders finance. The down payment is raised to `minimum` when a price is set.
pub fn compose_principal(
    vehicle_price: f64,
    down_payment: f64,
    minimum: f64,
    term: TermMonths,
    constants: &PricingConstants,
) -> PrincipalBreakdown {
    let effective_down_payment = if vehicle_price > 0.0 {
        down_payment.max(minimum)
    } else {
        down_payment.max(0.0)
    };
    let base_financed = (vehicle_price - effective_down_payment).max(0.0);
    let iof = constants.iof(base_financed, term);
    let principal = base_financed + iof + constants.embedded_fee;

    PrincipalBreakdown {
        effective_down_payment,
        base_financed,
        iof,
        embedded_fee: constants.embedded_fee,
        principal: principal.max(0.0),
    }
}
