use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use shelfcli::{cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Search the Spotify catalog for albums
    Search(SearchOptions),

    /// Browse the album collection
    List(ListOptions),

    /// Show a single album from the collection
    Show(ShowOptions),

    /// Rate an album in the collection
    Rate(RateOptions),

    /// Remove an album from the collection
    Remove(RemoveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// One-shot query; leave out to start an interactive session
    query: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Filter albums by name, artist, genre or track
    #[clap(long)]
    query: Option<String>,

    /// Minimum rating ('all' or 1-5)
    #[clap(long, default_value = "all", value_parser = utils::parse_min_rating)]
    min_rating: utils::MinRating,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowOptions {
    /// Collection record id
    id: String,

    /// Open the album on open.spotify.com
    #[clap(long)]
    open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RateOptions {
    /// Collection record id
    id: String,

    /// Rating from 1 to 5
    rating: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveOptions {
    /// Collection record id
    id: String,

    /// Skip the confirmation prompt
    #[clap(long)]
    yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Search(opt) => cli::search(opt.query).await,
        Command::List(opt) => cli::list(opt.query, opt.min_rating).await,
        Command::Show(opt) => cli::show(opt.id, opt.open).await,
        Command::Rate(opt) => cli::rate(opt.id, opt.rating).await,
        Command::Remove(opt) => cli::remove(opt.id, opt.yes).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
