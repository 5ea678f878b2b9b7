use crate::api::demo::{run_demo, run_schedule, DemoArgs, ScheduleArgs};
use crate::api::server;
use crate::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Training Tracker",
    about = "Enroll trainees, mark lecture attendance, and view weekly schedule rosters",
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
    /// Print the weekly schedule, optionally with rosters from an exported CSV
    Schedule(ScheduleArgs),
    /// Walk through enrollment, attendance, rosters, and CSV export
    Demo(DemoArgs),
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
        Command::Schedule(args) => run_schedule(args),
        Command::Demo(args) => run_demo(args),
    }
}
