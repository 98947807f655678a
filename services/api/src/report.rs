use crate::infra::{load_engine, parse_vehicle_type};
use clap::Args;
use std::path::PathBuf;
use vehicle_quote::config::AppConfig;
use vehicle_quote::error::AppError;
use vehicle_quote::financing::{
    current_year, LenderSummary, LoanRequest, QuoteSheet, TermMonths, VehicleType,
};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Vehicle type: light, motorcycle or truck
    #[arg(long, value_parser = parse_vehicle_type)]
    pub(crate) vehicle_type: VehicleType,
    /// Model year of the vehicle
    #[arg(long)]
    pub(crate) model_year: Option<i32>,
    /// Manufacture year of the vehicle
    #[arg(long)]
    pub(crate) manufacture_year: Option<i32>,
    /// Vehicle price
    #[arg(long, default_value_t = 0.0)]
    pub(crate) price: f64,
    /// Down payment (must reach 10% of the price)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) down_payment: f64,
    /// Term in months: 6, 12, 24, 36, 48 or 60
    #[arg(long, default_value_t = 60, value_parser = parse_term)]
    pub(crate) term: u32,
    /// Calendar year used to compute vehicle age (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// JSON or CSV rate catalog overriding QUOTE_CATALOG_PATH
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LendersArgs {
    /// JSON or CSV rate catalog overriding QUOTE_CATALOG_PATH
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

fn parse_term(raw: &str) -> Result<u32, String> {
    let months = raw
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("failed to parse '{raw}' as months ({err})"))?;
    TermMonths::new(months)
        .map(|term| term.months())
        .map_err(|err| err.to_string())
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(&config.quoting, args.catalog.as_deref())?;

    let request = LoanRequest {
        vehicle_type: args.vehicle_type,
        model_year: args.model_year,
        manufacture_year: args.manufacture_year,
        vehicle_price: args.price,
        down_payment: args.down_payment,
        term: TermMonths::new(args.term)?,
    };
    let year = args.year.unwrap_or_else(current_year);

    let sheet = engine.quote(&request, year);
    print!("{}", render_quote_sheet(&sheet, year));
    Ok(())
}

pub(crate) fn run_lenders(args: LendersArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = load_engine(&config.quoting, args.catalog.as_deref())?;
    print!("{}", render_lenders(&engine.lender_summaries()));
    Ok(())
}

fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

pub(crate) fn render_quote_sheet(sheet: &QuoteSheet, year: i32) -> String {
    let mut out = String::new();
    out.push_str("Vehicle financing comparison\n");
    out.push_str(&format!(
        "{} | {} months | reference year {}\n",
        sheet.vehicle_type,
        sheet.term.months(),
        year
    ));
    out.push_str(&format!(
        "Minimum down payment: {:.2}\nFinanced amount: {:.2}\n",
        sheet.minimum_down_payment, sheet.base_financed
    ));

    if let Some(age) = sheet.effective_age {
        out.push_str(&format!("Vehicle age considered: {age} years\n"));
    }

    if let Some(issue) = &sheet.issue {
        if issue.is_error() {
            out.push_str(&format!("\nCannot quote: {issue}\n"));
        } else {
            out.push_str(&format!(
                "\nFill in vehicle type, years, amounts and term to see quotes ({issue})\n"
            ));
        }
        return out;
    }

    out.push_str("\nLenders by installment\n");
    for (position, quote) in sheet.quotes.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} | rate {:.2}% a.m. | installment {:.2} | total {:.2}\n",
            position + 1,
            quote.lender_name,
            quote.rate_percent(),
            quote.installment,
            quote.total_paid
        ));
    }
    out
}

pub(crate) fn render_lenders(lenders: &[LenderSummary]) -> String {
    let mut out = String::from("Rate catalog\n");
    for lender in lenders {
        out.push_str(&format!("- {}\n", lender.name));
        for offering in &lender.vehicle_types {
            out.push_str(&format!(
                "    {}: up to {} years, {} to {} a.m.\n",
                offering.vehicle_type,
                offering.max_age_years,
                percent(offering.lowest_rate),
                percent(offering.highest_rate)
            ));
        }
    }
    out
}
