mod cmd;
mod output;
mod render;
mod root;
mod services;
mod session;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, play::SwipeDirection};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scorecard",
    about = "Golf score card: count strokes hole by hole and keep the round on disk",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding .scorecard/ (default: search upward from cwd)
    #[arg(long, global = true, env = "SCORECARD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Answer yes to every confirmation prompt
    #[arg(long, global = true, short = 'y')]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .scorecard/ with a default config
    Init,

    /// Show the current hole, stroke and card
    Show,

    /// Swipe gesture: right adds a stroke, left removes one, up commits the hole
    Swipe {
        direction: SwipeDirection,
        /// Repeat the gesture this many times
        #[arg(long, short = 'n', default_value = "1")]
        times: u32,
    },

    /// Jump to a hole (1-18)
    Select { hole: u8 },

    /// Leave a revisited hole and return to the results screen
    Results,

    /// Open the details screen from results
    Details,

    /// Open the preview screen from details
    Preview,

    /// Go back one screen (preview → details → results)
    Back,

    /// Set the round memo on the details screen
    Memo {
        text: Option<String>,
        /// Remove the memo
        #[arg(long, conflicts_with = "text")]
        clear: bool,
    },

    /// Attach a photo on the details screen
    Photo {
        path: Option<PathBuf>,
        /// Remove the attached photo
        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },

    /// Export the preview and save it to the gallery
    Export,

    /// Clear every score and start a new round (asks twice)
    Reset,

    /// Inspect and validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let (json, yes) = (cli.json, cli.yes);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Show => cmd::show::run(&root, json),
        Commands::Swipe { direction, times } => {
            cmd::play::swipe(&root, direction, times, yes, json)
        }
        Commands::Select { hole } => cmd::play::select(&root, hole, yes, json),
        Commands::Results => cmd::play::results(&root, yes, json),
        Commands::Details => cmd::screen::details(&root, yes, json),
        Commands::Preview => cmd::screen::preview(&root, yes, json),
        Commands::Back => cmd::screen::back(&root, yes, json),
        Commands::Memo { text, clear } => {
            cmd::screen::memo(&root, text.as_deref(), clear, yes, json)
        }
        Commands::Photo { path, clear } => {
            cmd::screen::photo(&root, path.as_deref(), clear, yes, json)
        }
        Commands::Export => cmd::screen::export(&root, yes, json),
        Commands::Reset => cmd::reset::run(&root, yes, json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
