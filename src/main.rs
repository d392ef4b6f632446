//! Binary entrypoint for the roomtactoe CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml`
//! - `play --session <id> --user <name> [TEXT...]` - process one game command
//! - `show --session <id>` - print the current board and players
//! - `reset --session <id>` - wipe the game in a session
//!
//! See the library crate docs for module-level details: `roomtactoe::`.
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use roomtactoe::config::Config;
use roomtactoe::game::{Game, Player, SessionId};
use roomtactoe::service::GameService;
use roomtactoe::storage::SledStore;
use roomtactoe::validation::validate_session_id;

#[derive(Parser)]
#[command(name = "roomtactoe")]
#[command(about = "Two-player tic-tac-toe for chat rooms")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Process one game command as if typed after the slash command
    Play {
        /// Session (channel) id
        #[arg(short, long)]
        session: String,
        /// Name of the user sending the command
        #[arg(short, long)]
        user: String,
        /// Print the slash-command JSON payload instead of plain text
        #[arg(long)]
        json: bool,
        /// Command text, e.g. `challenge @bob`, `status`, `5`
        text: Vec<String>,
    },
    /// Show the board and players for a session without changing anything
    Show {
        #[arg(short, long)]
        session: String,
    },
    /// Clear the game in a session
    Reset {
        #[arg(short, long)]
        session: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            info!("Initializing new roomtactoe configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Play {
            session,
            user,
            json,
            text,
        } => {
            let (config, store) = open_session_store(&cli.config, cli.verbose).await?;
            let service = GameService::new(Arc::new(store), config.game);
            let joined = text.join(" ");
            let command = if joined.is_empty() {
                None
            } else {
                Some(joined.as_str())
            };
            let response = service.handle(&session, &user, command)?;
            debug!("{}: outcome {}", session, response.outcome.as_str());
            if json {
                println!("{}", response.to_slack_json());
            } else {
                let scope = if response.broadcast { "room" } else { "private" };
                println!("[{}]\n{}", scope, response.text);
            }
        }
        Commands::Show { session } => {
            let (config, store) = open_session_store(&cli.config, cli.verbose).await?;
            validate_session_id(&session)?;
            debug!("{}: stored keys {:?}", session, store.session_keys(&session)?);
            let session = SessionId::new(session);
            let game = Game::load(&session, &store, &config.game)?;
            print!("{}", game.board().render(&config.game.symbols, false));
            let players = game.players();
            if players.has_players() {
                println!(
                    "{} ({}) vs {} ({}); turn: {}",
                    players.identity(Player::One).unwrap_or_default(),
                    config.game.symbols.player_one,
                    players.identity(Player::Two).unwrap_or_default(),
                    config.game.symbols.player_two,
                    players.current_turn_identity().unwrap_or_default()
                );
            } else {
                println!("No game in progress.");
            }
        }
        Commands::Reset { session } => {
            let (config, store) = open_session_store(&cli.config, cli.verbose).await?;
            let service = GameService::new(Arc::new(store), config.game);
            service.reset(&session)?;
            info!("Reset game in session {}", session);
        }
    }

    Ok(())
}

/// Load the configuration (defaults when the file is missing), start logging and open
/// the sled session store it points at.
async fn open_session_store(path: &str, verbosity: u8) -> Result<(Config, SledStore)> {
    let (config, missing) = match Config::load(path).await {
        Ok(cfg) => (cfg, None),
        Err(e) if !std::path::Path::new(path).exists() => (Config::default(), Some(e)),
        Err(e) => return Err(e),
    };
    init_logging(&Some(config.clone()), verbosity);
    if let Some(e) = missing {
        debug!("{}; using defaults", e);
    }

    let db_path = config.storage.sessions_path();
    let store = SledStore::open(&db_path)
        .map_err(|e| anyhow!("Failed to open session store {}: {}", db_path.display(), e))?;
    Ok((config, store))
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Mirror to the console only when attached to a terminal
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
