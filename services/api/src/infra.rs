use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vehicle_quote::config::QuotingConfig;
use vehicle_quote::error::AppError;
use vehicle_quote::financing::{CatalogSource, QuoteEngine, VehicleType};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the engine from configuration; `catalog_override` wins over `QUOTE_CATALOG_PATH`.
pub(crate) fn load_engine(
    config: &QuotingConfig,
    catalog_override: Option<&Path>,
) -> Result<QuoteEngine, AppError> {
    let source = match catalog_override {
        Some(path) => CatalogSource::from_path(path)?,
        None => config.catalog_source()?,
    };
    let catalog = source.load()?;
    Ok(QuoteEngine::new(catalog, config.settings))
}

pub(crate) fn parse_vehicle_type(raw: &str) -> Result<VehicleType, String> {
    VehicleType::parse(raw)
        .ok_or_else(|| format!("unknown vehicle type '{raw}' (light, motorcycle, truck)"))
}
