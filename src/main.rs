use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use songlist::{
    cli,
    config::{self, SpotifyConfig},
    error,
    types::{PkceToken, PlaylistSpec},
    warning,
};
use tokio::sync::Mutex;

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

    /// Add the songs of a song list to a playlist
    #[clap(
        long_about = "Add the songs of a song list to a playlist.\n\nWithout --playlist-id a new playlist is created on every run, so running the same list twice leaves two playlists behind."
    )]
    Playlist(PlaylistOptions),

    /// Save the songs of a song list to your library, skipping saved ones
    Library(LibraryOptions),

    /// Show what each song resolves to without changing anything
    Resolve(ResolveOptions),

    /// Show the account the cached token belongs to
    Whoami,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Text file with one song title per line
    pub file: PathBuf,

    /// Name of the playlist to create
    #[clap(long, default_value = "Imported songs")]
    pub name: String,

    /// Description of the playlist to create
    #[clap(long, default_value = "Imported with songlist")]
    pub description: String,

    /// Make the created playlist public
    #[clap(long)]
    pub public: bool,

    /// Add to this existing playlist instead of creating a new one
    #[clap(long, conflicts_with_all = ["name", "description", "public"])]
    pub playlist_id: Option<String>,

    /// Drop duplicate tracks before adding
    #[clap(long)]
    pub dedupe: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LibraryOptions {
    /// Text file with one song title per line
    pub file: PathBuf,

    /// Drop duplicate tracks before adding
    #[clap(long)]
    pub dedupe: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Text file with one song title per line
    pub file: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn load_config() -> Arc<SpotifyConfig> {
    match SpotifyConfig::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(load_config(), Arc::clone(&oauth_result)).await;
        }
        Command::Playlist(opt) => {
            let spec = PlaylistSpec {
                name: opt.name,
                description: opt.description,
                public: opt.public,
            };
            cli::playlist(load_config(), &opt.file, spec, opt.playlist_id, opt.dedupe).await
        }
        Command::Library(opt) => cli::library(load_config(), &opt.file, opt.dedupe).await,
        Command::Resolve(opt) => cli::resolve(load_config(), &opt.file).await,
        Command::Whoami => cli::whoami(load_config()).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
