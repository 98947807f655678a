use super::domain::VehicleType;
use super::issue::{MissingInput, QuoteIssue};
use serde::{Deserialize, Serialize};

pub const MINIMUM_YEAR: i32 = 1900;

/// Oldest vehicle accepted per type, regardless of lender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeLimits {
    pub light: u32,
    pub motorcycle: u32,
    pub truck: u32,
}

impl AgeLimits {
    pub fn limit_for(&self, vehicle_type: VehicleType) -> u32 {
        match vehicle_type {
            VehicleType::Light => self.light,
            VehicleType::Motorcycle => self.motorcycle,
            VehicleType::Truck => self.truck,
        }
    }
}

impl Default for AgeLimits {
    fn default() -> Self {
        Self {
            light: 25,
            motorcycle: 10,
            truck: 19,
        }
    }
}

/// Age of a vehicle in whole years relative to `current_year`, never negative.
pub fn age_from(year: i32, current_year: i32) -> u32 {
    current_year.saturating_sub(year).max(0) as u32
}

/// The older of the model-year and manufacture-year ages.
pub fn effective_age(model_year: i32, manufacture_year: i32, current_year: i32) -> u32 {
    age_from(model_year, current_year).max(age_from(manufacture_year, current_year))
}

/// Validates the year pair and returns the effective age used for pricing.
pub fn check_vehicle_age(
    model_year: Option<i32>,
    manufacture_year: Option<i32>,
    vehicle_type: VehicleType,
    current_year: i32,
    limits: &AgeLimits,
) -> Result<u32, QuoteIssue> {
    let (model_year, manufacture_year) = match (model_year, manufacture_year) {
        (Some(model), Some(manufacture)) => (model, manufacture),
        (model, manufacture) => {
            let mut missing = Vec::new();
            if model.is_none() {
                missing.push(MissingInput::ModelYear);
            }
            if manufacture.is_none() {
                missing.push(MissingInput::ManufactureYear);
            }
            return Err(QuoteIssue::IncompleteInput { missing });
        }
    };

    if model_year <= 0 || manufacture_year <= 0 {
        return Err(QuoteIssue::InvalidYear {
            model_year,
            manufacture_year,
        });
    }

    if model_year > current_year || manufacture_year > current_year {
        return Err(QuoteIssue::FutureYear { current_year });
    }

    if model_year < MINIMUM_YEAR || manufacture_year < MINIMUM_YEAR {
        return Err(QuoteIssue::YearTooOld {
            minimum_year: MINIMUM_YEAR,
        });
    }

    if model_year < manufacture_year {
        return Err(QuoteIssue::ModelBeforeManufacture {
            model_year,
            manufacture_year,
        });
    }

    let age = effective_age(model_year, manufacture_year, current_year);
    let limit = limits.limit_for(vehicle_type);
    if age > limit {
        return Err(QuoteIssue::AgeLimitExceeded {
            vehicle_type,
            limit,
            age,
        });
    }

    Ok(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(model: Option<i32>, manufacture: Option<i32>, kind: VehicleType) -> Result<u32, QuoteIssue> {
        check_vehicle_age(model, manufacture, kind, 2024, &AgeLimits::default())
    }

    #[test]
    fn effective_age_takes_the_older_year() {
        assert_eq!(effective_age(2020, 2015, 2024), 9);
        assert_eq!(check(Some(2020), Some(2015), VehicleType::Light), Ok(9));
    }

    #[test]
    fn ages_are_clamped_at_zero() {
        assert_eq!(age_from(2025, 2024), 0);
        assert_eq!(check(Some(2024), Some(2024), VehicleType::Light), Ok(0));
    }

    #[test]
    fn missing_years_are_incomplete_not_invalid() {
        let issue = check(None, Some(2020), VehicleType::Light).expect_err("incomplete");
        assert_eq!(
            issue,
            QuoteIssue::IncompleteInput {
                missing: vec![MissingInput::ModelYear]
            }
        );
        assert!(!issue.is_error());

        let both = check(None, None, VehicleType::Truck).expect_err("incomplete");
        assert_eq!(
            both,
            QuoteIssue::IncompleteInput {
                missing: vec![MissingInput::ModelYear, MissingInput::ManufactureYear]
            }
        );
    }

    #[test]
    fn rules_short_circuit_in_order() {
        assert!(matches!(
            check(Some(0), Some(2030), VehicleType::Light),
            Err(QuoteIssue::InvalidYear { .. })
        ));
        assert_eq!(
            check(Some(2025), Some(1800), VehicleType::Light),
            Err(QuoteIssue::FutureYear { current_year: 2024 })
        );
        assert_eq!(
            check(Some(1899), Some(1899), VehicleType::Light),
            Err(QuoteIssue::YearTooOld { minimum_year: 1900 })
        );
        assert_eq!(
            check(Some(2015), Some(2016), VehicleType::Light),
            Err(QuoteIssue::ModelBeforeManufacture {
                model_year: 2015,
                manufacture_year: 2016
            })
        );
    }

    #[test]
    fn age_exactly_at_limit_is_accepted() {
        assert_eq!(check(Some(2014), Some(2014), VehicleType::Motorcycle), Ok(10));
        assert_eq!(
            check(Some(2014), Some(2013), VehicleType::Motorcycle),
            Err(QuoteIssue::AgeLimitExceeded {
                vehicle_type: VehicleType::Motorcycle,
                limit: 10,
                age: 11
            })
        );
    }

    #[test]
    fn limits_differ_per_vehicle_type() {
        assert_eq!(check(Some(2005), Some(2005), VehicleType::Truck), Ok(19));
        assert!(matches!(
            check(Some(2004), Some(2004), VehicleType::Truck),
            Err(QuoteIssue::AgeLimitExceeded { limit: 19, .. })
        ));
        assert_eq!(check(Some(1999), Some(1999), VehicleType::Light), Ok(25));
    }
}
