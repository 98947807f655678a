use super::{CatalogDocument, CatalogError, LenderOffering, RateCatalog, RateTier, TypeOffering};
use crate::financing::domain::VehicleType;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the process reads its rate catalog from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Standard,
    Json(PathBuf),
    Csv(PathBuf),
}

impl CatalogSource {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json(path.to_path_buf())),
            Some("csv") => Ok(Self::Csv(path.to_path_buf())),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn load(&self) -> Result<RateCatalog, CatalogError> {
        let catalog = match self {
            CatalogSource::Standard => RateCatalog::standard(),
            CatalogSource::Json(path) => RateCatalog::from_json_reader(File::open(path)?)?,
            CatalogSource::Csv(path) => RateCatalog::from_csv_reader(File::open(path)?)?,
        };

        info!(
            source = ?self,
            lenders = catalog.lenders().len(),
            "rate catalog loaded"
        );
        Ok(catalog)
    }
}

impl RateCatalog {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.lenders)
    }

    /// Reads one row per tier. Lenders keep the order of their first row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut lenders: Vec<LenderOffering> = Vec::new();

        for record in csv_reader.deserialize::<TierRow>() {
            let row = record?;
            let vehicle_type = VehicleType::parse(&row.vehicle_type)
                .ok_or_else(|| CatalogError::UnknownVehicleType(row.vehicle_type.clone()))?;

            let position = match lenders.iter().position(|lender| lender.name == row.lender) {
                Some(position) => position,
                None => {
                    lenders.push(LenderOffering {
                        name: row.lender.clone(),
                        offerings: BTreeMap::new(),
                    });
                    lenders.len() - 1
                }
            };

            let offering = lenders[position]
                .offerings
                .entry(vehicle_type)
                .or_insert_with(|| TypeOffering {
                    max_age_years: row.max_age_years,
                    tiers: Vec::new(),
                });

            if offering.max_age_years != row.max_age_years {
                return Err(CatalogError::ConflictingMaxAge {
                    lender: row.lender,
                    vehicle_type,
                });
            }

            offering.tiers.push(RateTier {
                max_age_years: row.tier_max_age_years,
                monthly_rate: row.monthly_rate,
            });
        }

        Self::new(lenders)
    }
}

#[derive(Debug, Deserialize)]
struct TierRow {
    lender: String,
    vehicle_type: String,
    max_age_years: u32,
    tier_max_age_years: u32,
    monthly_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV_CATALOG: &str = "\
lender,vehicle_type,max_age_years,tier_max_age_years,monthly_rate
Norte,light,25,5,0.017
Norte,light,25,25,0.021
Sul,truck,19,19,0.02
Norte,motorcycle,10,10,0.027
";

    #[test]
    fn csv_catalog_groups_rows_by_lender_in_first_seen_order() {
        let catalog =
            RateCatalog::from_csv_reader(Cursor::new(CSV_CATALOG)).expect("catalog parses");

        let names: Vec<&str> = catalog
            .lenders()
            .iter()
            .map(|lender| lender.name.as_str())
            .collect();
        assert_eq!(names, vec!["Norte", "Sul"]);

        let norte = catalog.lender("Norte").expect("norte present");
        let light = norte.offering(VehicleType::Light).expect("light offering");
        assert_eq!(light.tiers.len(), 2);
        assert_eq!(light.rate_for_age(7), Some(0.021));
        assert!(norte.supports(VehicleType::Motorcycle));
        assert!(!catalog
            .lender("Sul")
            .expect("sul present")
            .supports(VehicleType::Light));
    }

    #[test]
    fn csv_catalog_rejects_unknown_vehicle_types() {
        let raw = "lender,vehicle_type,max_age_years,tier_max_age_years,monthly_rate\nX,boat,5,5,0.01\n";
        let err = RateCatalog::from_csv_reader(Cursor::new(raw)).expect_err("boat rejected");
        assert!(matches!(err, CatalogError::UnknownVehicleType(kind) if kind == "boat"));
    }

    #[test]
    fn csv_catalog_rejects_conflicting_max_ages() {
        let raw = "lender,vehicle_type,max_age_years,tier_max_age_years,monthly_rate\nX,light,25,5,0.01\nX,light,20,25,0.02\n";
        let err = RateCatalog::from_csv_reader(Cursor::new(raw)).expect_err("conflict rejected");
        assert!(matches!(err, CatalogError::ConflictingMaxAge { .. }));
    }

    #[test]
    fn json_catalog_loads_and_validates() {
        let raw = r#"{
            "lenders": [
                {
                    "name": "Leste",
                    "offerings": {
                        "light": {
                            "max_age_years": 10,
                            "tiers": [
                                { "max_age_years": 4, "monthly_rate": 0.015 },
                                { "max_age_years": 10, "monthly_rate": 0.018 }
                            ]
                        }
                    }
                }
            ]
        }"#;
        let catalog = RateCatalog::from_json_reader(Cursor::new(raw)).expect("catalog parses");
        let leste = catalog.lender("Leste").expect("lender present");
        assert_eq!(
            leste
                .offering(VehicleType::Light)
                .and_then(|offering| offering.rate_for_age(4)),
            Some(0.015)
        );
    }

    #[test]
    fn source_is_chosen_by_extension() {
        assert_eq!(
            CatalogSource::from_path("rates/catalog.JSON").expect("json accepted"),
            CatalogSource::Json(PathBuf::from("rates/catalog.JSON"))
        );
        assert!(matches!(
            CatalogSource::from_path("rates.csv"),
            Ok(CatalogSource::Csv(_))
        ));
        assert!(matches!(
            CatalogSource::from_path("rates.toml"),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn standard_source_loads_reference_table() {
        let catalog = CatalogSource::Standard.load().expect("standard loads");
        assert_eq!(catalog, RateCatalog::standard());
    }
}
