use crate::report::{run_lenders, run_quote, LendersArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vehicle_quote::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Vehicle Quote",
    about = "Compare vehicle financing installments across lenders",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Quote a single financing request and print the ranked lenders
    Quote(QuoteArgs),
    /// List the lenders, vehicle types and rate ranges in the catalog
    Lenders(LendersArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Lenders(args) => run_lenders(args),
    }
}
