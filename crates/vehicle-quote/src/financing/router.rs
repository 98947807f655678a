use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{current_year, LoanRequest, TermError, TermMonths, VehicleType};
use super::QuoteEngine;

/// Quote request as received over HTTP. `reference_year` pins the calendar year.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequestBody {
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub model_year: Option<i32>,
    #[serde(default)]
    pub manufacture_year: Option<i32>,
    #[serde(default)]
    pub vehicle_price: f64,
    #[serde(default)]
    pub down_payment: f64,
    #[serde(default = "default_term_months")]
    pub term_months: u32,
    #[serde(default)]
    pub reference_year: Option<i32>,
}

fn default_term_months() -> u32 {
    TermMonths::default().months()
}

impl QuoteRequestBody {
    pub fn into_request(self) -> Result<(LoanRequest, i32), TermError> {
        let term = TermMonths::new(self.term_months)?;
        let year = self.reference_year.unwrap_or_else(current_year);
        Ok((
            LoanRequest {
                vehicle_type: self.vehicle_type,
                model_year: self.model_year,
                manufacture_year: self.manufacture_year,
                vehicle_price: self.vehicle_price,
                down_payment: self.down_payment,
                term,
            },
            year,
        ))
    }
}

/// Router exposing quoting and catalog endpoints.
pub fn quote_router(engine: Arc<QuoteEngine>) -> Router {
    Router::new()
        .route("/api/v1/quotes", post(quote_handler))
        .route("/api/v1/lenders", get(lenders_handler))
        .with_state(engine)
}

pub(crate) async fn quote_handler(
    State(engine): State<Arc<QuoteEngine>>,
    axum::Json(body): axum::Json<QuoteRequestBody>,
) -> Response {
    match body.into_request() {
        Ok((request, year)) => {
            let sheet = engine.quote(&request, year);
            (StatusCode::OK, axum::Json(sheet)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn lenders_handler(State(engine): State<Arc<QuoteEngine>>) -> Response {
    let payload = json!({
        "lenders": engine.lender_summaries(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
