//! Vehicle financing quotes: eligibility, principal composition, amortization and
//! lender ranking over a configurable rate catalog.

pub mod amortization;
pub mod catalog;
pub mod domain;
pub mod down_payment;
pub mod eligibility;
pub mod issue;
pub mod principal;
pub mod quote;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogSource, LenderOffering, RateCatalog, RateTier, TypeOffering};
pub use domain::{current_year, LoanRequest, Quote, TermError, TermMonths, VehicleType};
pub use eligibility::AgeLimits;
pub use issue::{MissingInput, QuoteIssue};
pub use principal::{PricingConstants, PrincipalBreakdown};
pub use router::{quote_router, QuoteRequestBody};

use down_payment::{check_down_payment, minimum_down_payment};
use eligibility::check_vehicle_age;
use principal::compose_principal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Process-wide quoting parameters besides the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteSettings {
    pub constants: PricingConstants,
    pub age_limits: AgeLimits,
    pub minimum_down_payment_ratio: f64,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            constants: PricingConstants::default(),
            age_limits: AgeLimits::default(),
            minimum_down_payment_ratio: down_payment::DEFAULT_MINIMUM_RATIO,
        }
    }
}

/// Result of a quote run. Disclosure amounts are filled in even when no quote is possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSheet {
    pub vehicle_type: VehicleType,
    #[serde(rename = "term_months")]
    pub term: TermMonths,
    pub minimum_down_payment: f64,
    pub base_financed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<PrincipalBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<QuoteIssue>,
    pub quotes: Vec<Quote>,
}

impl QuoteSheet {
    pub fn best(&self) -> Option<&Quote> {
        self.quotes.first()
    }
}

/// Lender capabilities as listed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderSummary {
    pub name: String,
    pub vehicle_types: Vec<LenderTypeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderTypeSummary {
    pub vehicle_type: VehicleType,
    pub max_age_years: u32,
    pub lowest_rate: f64,
    pub highest_rate: f64,
}

/// Stateless quoting over a loaded catalog. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    catalog: RateCatalog,
    settings: QuoteSettings,
}

impl QuoteEngine {
    pub fn new(catalog: RateCatalog, settings: QuoteSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &RateCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &QuoteSettings {
        &self.settings
    }

    pub fn quote(&self, request: &LoanRequest, current_year: i32) -> QuoteSheet {
        let price = request.vehicle_price.max(0.0);
        let minimum = minimum_down_payment(price, self.settings.minimum_down_payment_ratio);
        let breakdown = compose_principal(
            price,
            request.down_payment,
            minimum,
            request.term,
            &self.settings.constants,
        );

        let mut sheet = QuoteSheet {
            vehicle_type: request.vehicle_type,
            term: request.term,
            minimum_down_payment: minimum,
            base_financed: breakdown.base_financed,
            effective_age: None,
            principal: None,
            issue: None,
            quotes: Vec::new(),
        };

        let age_check = check_vehicle_age(
            request.model_year,
            request.manufacture_year,
            request.vehicle_type,
            current_year,
            &self.settings.age_limits,
        );

        if price <= 0.0 {
            match age_check {
                Err(issue) if issue.is_error() => {
                    debug!(%issue, "vehicle years rejected");
                    sheet.issue = Some(issue);
                    return sheet;
                }
                Ok(age) => sheet.effective_age = Some(age),
                Err(_) => {}
            }

            let mut missing = Vec::new();
            if request.model_year.is_none() {
                missing.push(MissingInput::ModelYear);
            }
            if request.manufacture_year.is_none() {
                missing.push(MissingInput::ManufactureYear);
            }
            missing.push(MissingInput::VehiclePrice);
            sheet.issue = Some(QuoteIssue::IncompleteInput { missing });
            return sheet;
        }

        let age = match age_check {
            Ok(age) => age,
            Err(issue) => {
                debug!(%issue, "vehicle years rejected");
                sheet.issue = Some(issue);
                return sheet;
            }
        };
        sheet.effective_age = Some(age);

        if let Err(issue) =
            check_down_payment(price, request.down_payment, self.settings.minimum_down_payment_ratio)
        {
            debug!(%issue, "down payment rejected");
            sheet.issue = Some(issue);
            return sheet;
        }

        sheet.principal = Some(breakdown);
        sheet.quotes = quote::rank_quotes(
            &self.catalog,
            request.vehicle_type,
            age,
            breakdown.principal,
            request.term,
            &self.settings.constants,
        );

        if sheet.quotes.is_empty() {
            sheet.issue = Some(QuoteIssue::NoEligibleLender {
                vehicle_type: request.vehicle_type,
                age,
            });
        }

        debug!(
            vehicle_type = %request.vehicle_type,
            age,
            term = request.term.months(),
            principal = breakdown.principal,
            quotes = sheet.quotes.len(),
            "quote sheet assembled"
        );
        sheet
    }

    pub fn lender_summaries(&self) -> Vec<LenderSummary> {
        self.catalog
            .lenders()
            .iter()
            .map(|lender| LenderSummary {
                name: lender.name.clone(),
                vehicle_types: lender
                    .offerings
                    .iter()
                    .map(|(vehicle_type, offering)| {
                        let rates = offering.tiers.iter().map(|tier| tier.monthly_rate);
                        LenderTypeSummary {
                            vehicle_type: *vehicle_type,
                            max_age_years: offering.max_age_years,
                            lowest_rate: rates.clone().fold(f64::INFINITY, f64::min),
                            highest_rate: rates.fold(0.0, f64::max),
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(RateCatalog::standard(), QuoteSettings::default())
    }
}
