//! Lender rate catalog: which vehicle types each lender finances, how old a vehicle may
//! be, and the monthly rate for each age band.

mod loader;
mod standard;

pub use loader::CatalogSource;

use super::domain::VehicleType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Age band inside a lender offering. Applies to vehicles up to `max_age_years` old.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub max_age_years: u32,
    pub monthly_rate: f64,
}

/// Terms a lender applies to one vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOffering {
    pub max_age_years: u32,
    pub tiers: Vec<RateTier>,
}

impl TypeOffering {
    /// Rate for a vehicle of `age` years, or `None` when the lender refuses that age.
    pub fn rate_for_age(&self, age: u32) -> Option<f64> {
        if age > self.max_age_years {
            return None;
        }

        self.tiers
            .iter()
            .find(|tier| age <= tier.max_age_years)
            .map(|tier| tier.monthly_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderOffering {
    pub name: String,
    pub offerings: BTreeMap<VehicleType, TypeOffering>,
}

impl LenderOffering {
    pub fn offering(&self, vehicle_type: VehicleType) -> Option<&TypeOffering> {
        self.offerings.get(&vehicle_type)
    }

    pub fn supports(&self, vehicle_type: VehicleType) -> bool {
        self.offerings.contains_key(&vehicle_type)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("rate catalog has no lenders")]
    Empty,
    #[error("lender name must not be blank")]
    BlankLenderName,
    #[error("lender '{0}' appears more than once")]
    DuplicateLender(String),
    #[error("lender '{lender}' has no rate tiers for {vehicle_type}")]
    MissingTiers {
        lender: String,
        vehicle_type: VehicleType,
    },
    #[error("lender '{lender}' tiers for {vehicle_type} must be strictly ascending by age")]
    UnorderedTiers {
        lender: String,
        vehicle_type: VehicleType,
    },
    #[error("lender '{lender}' has an invalid monthly rate {rate} for {vehicle_type}")]
    InvalidRate {
        lender: String,
        vehicle_type: VehicleType,
        rate: f64,
    },
    #[error(
        "lender '{lender}' tiers for {vehicle_type} stop at {covered} years but the offering allows {max_age_years}"
    )]
    TierGap {
        lender: String,
        vehicle_type: VehicleType,
        covered: u32,
        max_age_years: u32,
    },
    #[error("unknown vehicle type '{0}'")]
    UnknownVehicleType(String),
    #[error("lender '{lender}' declares conflicting max ages for {vehicle_type}")]
    ConflictingMaxAge {
        lender: String,
        vehicle_type: VehicleType,
    },
    #[error("unsupported catalog format for '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
    #[error("failed to read rate catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON rate catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse CSV rate catalog: {0}")]
    Csv(#[from] csv::Error),
}

/// Validated, ordered set of lender offerings. Catalog order is the ranking tie-break.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCatalog {
    lenders: Vec<LenderOffering>,
}

impl RateCatalog {
    pub fn new(lenders: Vec<LenderOffering>) -> Result<Self, CatalogError> {
        if lenders.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for lender in &lenders {
            if lender.name.trim().is_empty() {
                return Err(CatalogError::BlankLenderName);
            }
            if !seen.insert(lender.name.as_str()) {
                return Err(CatalogError::DuplicateLender(lender.name.clone()));
            }
            for (vehicle_type, offering) in &lender.offerings {
                validate_offering(&lender.name, *vehicle_type, offering)?;
            }
        }

        Ok(Self { lenders })
    }

    pub fn lenders(&self) -> &[LenderOffering] {
        &self.lenders
    }

    pub fn lender(&self, name: &str) -> Option<&LenderOffering> {
        self.lenders.iter().find(|lender| lender.name == name)
    }

    pub fn lenders_supporting(
        &self,
        vehicle_type: VehicleType,
    ) -> impl Iterator<Item = &LenderOffering> {
        self.lenders
            .iter()
            .filter(move |lender| lender.supports(vehicle_type))
    }
}

fn validate_offering(
    lender: &str,
    vehicle_type: VehicleType,
    offering: &TypeOffering,
) -> Result<(), CatalogError> {
    let Some(last) = offering.tiers.last() else {
        return Err(CatalogError::MissingTiers {
            lender: lender.to_string(),
            vehicle_type,
        });
    };

    for tier in &offering.tiers {
        if !tier.monthly_rate.is_finite() || tier.monthly_rate < 0.0 {
            return Err(CatalogError::InvalidRate {
                lender: lender.to_string(),
                vehicle_type,
                rate: tier.monthly_rate,
            });
        }
    }

    if offering
        .tiers
        .windows(2)
        .any(|pair| pair[0].max_age_years >= pair[1].max_age_years)
    {
        return Err(CatalogError::UnorderedTiers {
            lender: lender.to_string(),
            vehicle_type,
        });
    }

    if last.max_age_years < offering.max_age_years {
        return Err(CatalogError::TierGap {
            lender: lender.to_string(),
            vehicle_type,
            covered: last.max_age_years,
            max_age_years: offering.max_age_years,
        });
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    lenders: Vec<LenderOffering>,
}
