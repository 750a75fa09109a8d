use crate::demo::{run_batch, run_demo, run_screen_report, BatchArgs, ScreenReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindwell::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Mindwell Screening Service",
    about = "Run the wellness screening service or generate risk reports from the command line",
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
    /// Score intake answers without starting the server
    Screen {
        #[command(subcommand)]
        command: ScreenCommand,
    },
    /// Run two canned profiles end to end and print both reports
    Demo,
}

#[derive(Subcommand, Debug)]
enum ScreenCommand {
    /// Generate a risk report for a single set of answers
    Report(ScreenReportArgs),
    /// Score every row of a cohort CSV export
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
        Command::Screen {
            command: ScreenCommand::Report(args),
        } => run_screen_report(args),
        Command::Screen {
            command: ScreenCommand::Batch(args),
        } => run_batch(args),
        Command::Demo => run_demo(),
    }
}
