use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotq::{
    cli,
    config::{self, Config},
    error,
    management::TokenManager,
    request::WILDCARD,
};

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
    /// Path of the credential record (overrides SPOTQ_CREDENTIALS_FILE)
    #[clap(long, global = true)]
    credentials: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interactive prompt (default when no command is given)
    Shell,

    /// Authorize with Spotify API
    Auth,

    /// Show your top tracks or artists
    Top(TopOptions),

    /// Search the Spotify catalog
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// tracks, artists or _
    #[clap(default_value = WILDCARD)]
    kind: String,
    /// short, medium, long or _
    #[clap(default_value = WILDCARD)]
    time_range: String,
    /// 1 to 50 or _
    #[clap(default_value = WILDCARD, allow_hyphen_values = true)]
    limit: String,
    /// 0 to 49 or _
    #[clap(default_value = WILDCARD, allow_hyphen_values = true)]
    offset: String,
}

impl TopOptions {
    fn tokens(self) -> Vec<String> {
        vec![self.kind, self.time_range, self.limit, self.offset]
    }
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    query: String,
    /// or, not or _
    #[clap(default_value = WILDCARD)]
    operator: String,
    /// Query joined with the operator, or _
    #[clap(default_value = WILDCARD)]
    operator_query: String,
    /// track, artist, album or _
    #[clap(default_value = WILDCARD)]
    kind: String,
}

impl SearchOptions {
    fn tokens(self) -> Vec<String> {
        vec![self.query, self.operator, self.operator_query, self.kind]
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.credentials {
        config = config.with_credentials_path(path);
    }
    let mut tokens = TokenManager::new(config);

    let result = match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => cli::shell(&mut tokens),
        Command::Auth => cli::auth(&mut tokens),
        Command::Top(opt) => cli::top(&mut tokens, &opt.tokens()),
        Command::Search(opt) => cli::search(&mut tokens, &opt.tokens()),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
