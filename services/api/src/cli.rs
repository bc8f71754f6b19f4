use crate::demo::{run_demo, run_niches, run_score, ScoreArgs};
use crate::server;
use bmed_eval::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "b-Med Evaluation",
    about = "Score digital-health solutions against the b-Med evaluation questionnaire",
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
    /// List evaluation groups and the niches routed to each
    Niches,
    /// Score a complete evaluation request read from a JSON file
    Score(ScoreArgs),
    /// Walk through a telemedicine evaluation section by section
    Demo,
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
        Command::Niches => {
            run_niches();
            Ok(())
        }
        Command::Score(args) => run_score(args),
        Command::Demo => run_demo(),
    }
}
