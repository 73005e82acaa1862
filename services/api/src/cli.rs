use crate::demo::{run_demo, run_svi_batch, run_svi_calculate, BatchArgs, CalculateArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use strategic_value::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Strategic Decision Service",
    about = "Run and demo the open banking strategic decision scoring service",
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
    /// Score strategic scenarios from the command line
    Svi {
        #[command(subcommand)]
        command: SviCommand,
    },
    /// Run an end-to-end CLI demo covering the catalog and scoring engine
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SviCommand {
    /// Score a single scenario from its raw inputs
    Calculate(CalculateArgs),
    /// Score scenarios in bulk from a CSV export
    Batch(BatchArgs),
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
        Command::Svi {
            command: SviCommand::Calculate(args),
        } => run_svi_calculate(args),
        Command::Svi {
            command: SviCommand::Batch(args),
        } => run_svi_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
