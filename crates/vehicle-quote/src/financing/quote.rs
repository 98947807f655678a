use super::amortization::installment;
use super::catalog::{LenderOffering, RateCatalog};
use super::domain::{Quote, TermMonths, VehicleType};
use super::principal::PricingConstants;
use tracing::{debug, warn};

/// Monthly rate a lender charges for this vehicle, if it finances it at all.
pub fn lender_rate(lender: &LenderOffering, vehicle_type: VehicleType, age: u32) -> Option<f64> {
    let offering = lender.offering(vehicle_type)?;
    if age > offering.max_age_years {
        debug!(lender = %lender.name, %vehicle_type, age, "vehicle older than lender accepts");
        return None;
    }

    let rate = offering.rate_for_age(age);
    if rate.is_none() {
        warn!(
            lender = %lender.name,
            %vehicle_type,
            age,
            "rate tiers do not cover an accepted age"
        );
    }
    rate
}

/// Quotes every eligible lender and ranks them by installment, cheapest first.
///
/// Ties keep catalog order.
pub fn rank_quotes(
    catalog: &RateCatalog,
    vehicle_type: VehicleType,
    age: u32,
    principal: f64,
    term: TermMonths,
    constants: &PricingConstants,
) -> Vec<Quote> {
    let periods = term.months();
    let mut quotes: Vec<Quote> = catalog
        .lenders_supporting(vehicle_type)
        .filter_map(|lender| {
            let monthly_rate = lender_rate(lender, vehicle_type, age)?;
            let installment =
                installment(monthly_rate, periods, principal) + constants.monthly_insurance;
            Some(Quote {
                lender_name: lender.name.clone(),
                monthly_rate,
                installment,
                total_paid: installment * f64::from(periods),
            })
        })
        .collect();

    quotes.sort_by(|a, b| a.installment.total_cmp(&b.installment));
    quotes
}
