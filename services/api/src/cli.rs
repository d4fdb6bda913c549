use crate::commands::{print_questions, run_init_db, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lipedema_screening::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lipedema Screening",
    about = "Serve the lipedema risk questionnaire and manage its submission store",
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
    /// Create the submissions table if it does not exist, then exit
    InitDb,
    /// Score a set of answers offline without storing anything
    Score(ScoreArgs),
    /// Print the questionnaire with option positions
    Questions,
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
        Command::InitDb => run_init_db().await,
        Command::Score(args) => run_score(args),
        Command::Questions => {
            print_questions();
            Ok(())
        }
    }
}
