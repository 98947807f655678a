use super::{LenderOffering, RateCatalog, RateTier, TypeOffering};
use crate::financing::domain::VehicleType;
use std::collections::BTreeMap;

fn offering(max_age_years: u32, tiers: &[(u32, f64)]) -> TypeOffering {
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

fn lender(name: &str, offerings: Vec<(VehicleType, TypeOffering)>) -> LenderOffering {
    LenderOffering {
        name: name.to_string(),
        offerings: offerings.into_iter().collect::<BTreeMap<_, _>>(),
    }
}

impl RateCatalog {
    /// Reference table used when no catalog file is configured.
    pub fn standard() -> Self {
        Self {
            lenders: vec![
                lender(
                    "Santander",
                    vec![
                        (
                            VehicleType::Light,
                            offering(25, &[(5, 0.017), (10, 0.019), (25, 0.022)]),
                        ),
                        (
                            VehicleType::Motorcycle,
                            offering(10, &[(3, 0.024), (10, 0.028)]),
                        ),
                        (VehicleType::Truck, offering(19, &[(8, 0.0185), (19, 0.021)])),
                    ],
                ),
                lender(
                    "BV",
                    vec![
                        (
                            VehicleType::Light,
                            offering(25, &[(5, 0.018), (12, 0.020), (25, 0.023)]),
                        ),
                        (
                            VehicleType::Motorcycle,
                            offering(10, &[(4, 0.026), (10, 0.030)]),
                        ),
                        (VehicleType::Truck, offering(19, &[(10, 0.019), (19, 0.022)])),
                    ],
                ),
                lender(
                    "Itaú",
                    vec![
                        (
                            VehicleType::Light,
                            offering(25, &[(5, 0.0165), (10, 0.0185), (25, 0.021)]),
                        ),
                        (VehicleType::Truck, offering(19, &[(8, 0.018), (19, 0.0205)])),
                    ],
                ),
                lender(
                    "Banco PAN",
                    vec![
                        (VehicleType::Light, offering(25, &[(7, 0.020), (25, 0.0235)])),
                        (
                            VehicleType::Truck,
                            offering(19, &[(10, 0.0205), (19, 0.0225)]),
                        ),
                    ],
                ),
                lender(
                    "Porto",
                    vec![
                        (
                            VehicleType::Light,
                            offering(25, &[(5, 0.0175), (12, 0.0195), (25, 0.022)]),
                        ),
                        (VehicleType::Truck, offering(19, &[(8, 0.0185), (19, 0.0215)])),
                    ],
                ),
            ],
        }
    }
}
