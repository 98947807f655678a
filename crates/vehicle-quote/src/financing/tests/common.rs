use std::collections::BTreeMap;

use crate::financing::{
    LenderOffering, LoanRequest, QuoteEngine, QuoteSettings, RateCatalog, RateTier, TermMonths,
    TypeOffering, VehicleType,
};

pub(super) const CURRENT_YEAR: i32 = 2024;

pub(super) fn term(months: u32) -> TermMonths {
    TermMonths::new(months).expect("offered term")
}

pub(super) fn offering(max_age_years: u32, tiers: &[(u32, f64)]) -> TypeOffering {
    TypeOffering {
        max_age_years,
        tiers: tiers
            .iter()
            .map(|&(max_age_years, monthly_rate)| RateTier {
                max_age_years,
                monthly_rate,
            })
            .collect(),
    }
}

pub(super) fn lender(name: &str, offerings: Vec<(VehicleType, TypeOffering)>) -> LenderOffering {
    LenderOffering {
        name: name.to_string(),
        offerings: offerings.into_iter().collect::<BTreeMap<_, _>>(),
    }
}

pub(super) fn standard_engine() -> QuoteEngine {
    QuoteEngine::default()
}

pub(super) fn engine_with(lenders: Vec<LenderOffering>) -> QuoteEngine {
    let catalog = RateCatalog::new(lenders).expect("valid catalog");
    QuoteEngine::new(catalog, QuoteSettings::default())
}

/// 60k light vehicle, 3 years old, 10% down over 60 months.
pub(super) fn light_request() -> LoanRequest {
    LoanRequest {
        vehicle_type: VehicleType::Light,
        model_year: Some(2021),
        manufacture_year: Some(2021),
        vehicle_price: 60_000.0,
        down_payment: 6_000.0,
        term: term(60),
    }
}

pub(super) fn motorcycle_request() -> LoanRequest {
    LoanRequest {
        vehicle_type: VehicleType::Motorcycle,
        model_year: Some(2022),
        manufacture_year: Some(2021),
        vehicle_price: 18_000.0,
        down_payment: 3_000.0,
        term: term(36),
    }
}

pub(super) fn pmt(rate: f64, periods: u32, principal: f64) -> f64 {
    let growth = (1.0 + rate).powf(f64::from(periods));
    principal * rate * growth / (growth - 1.0)
}
