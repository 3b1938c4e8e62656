use crate::demo::{run_demo, run_event_list, run_roster_view, DemoArgs, EventListArgs, RosterViewArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use event_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Event Desk Console",
    about = "Browse events and candidate rosters of the event platform from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP console (default command)
    Serve(ServeArgs),
    /// Work with the candidate roster of one event
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Work with the event directory
    Events {
        #[command(subcommand)]
        command: EventsCommand,
    },
    /// Run an offline walkthrough of the roster filter and print flow
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Fetch the roster, apply filters, and render the table
    View(RosterViewArgs),
}

#[derive(Subcommand, Debug)]
enum EventsCommand {
    /// Fetch the event directory and filter it locally
    List(EventListArgs),
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
        Command::Roster {
            command: RosterCommand::View(args),
        } => run_roster_view(args).await,
        Command::Events {
            command: EventsCommand::List(args),
        } => run_event_list(args).await,
        Command::Demo(args) => run_demo(args),
    }
}
