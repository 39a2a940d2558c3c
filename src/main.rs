use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use surprise::chat::{self, Reply};
use surprise::client::{Endpoint, SurpriseClient};
use surprise::config::{self, Config};
use surprise::consts::{BASE_URL_ENV, TOKEN_ENV, default_db_path};
use surprise::eggs::{self, Celebration};
use surprise::render::render;
use surprise::source::SurpriseSource;
use surprise::source::http::HttpSource;
use surprise::source::local::LocalSource;

#[derive(Parser)]
#[command(name = "surprise", version, author, about = "Quotes, jokes, and hidden easter eggs.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// SQLite database for stored settings (defaults to ~/.surprise/surprise.db)
    #[arg(short, long, global = true)]
    db: Option<String>,

    /// API base URL
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Bearer token for the API
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Generate surprises locally instead of calling the API
    #[arg(short, long, global = true, default_value_t = false)]
    local: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one surprise (random, quote, joke, fact, art, challenge, celebrate, daily)
    Get {
        #[arg(default_value = "random")]
        endpoint: Endpoint,
    },
    /// Check a message for an easter egg
    Egg {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Print a hint about hidden easter eggs
    Hint,
    /// Print a random achievement message
    Achievement,
    /// Print celebration ASCII art (rocket, party, trophy, success)
    CelebrateArt {
        #[arg(default_value = "party")]
        kind: String,
    },
    /// Read or change stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Interactive session: surprise commands and easter eggs
    Chat,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Store a value (base_url or token)
    Set { key: String, value: String },
    /// Show a stored value
    Get { key: String },
    /// Remove a stored value
    Unset { key: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Egg { message } => {
            let message = message.join(" ");
            match eggs::check_easter_egg(&message) {
                Some(egg) => {
                    println!("{}", egg.response);
                    println!("{}", eggs::achievement_message());
                }
                None => {
                    println!("no easter egg");
                    println!("{}", eggs::random_hint());
                }
            }
            return Ok(());
        }
        Command::Hint => {
            println!("{}", eggs::random_hint());
            return Ok(());
        }
        Command::Achievement => {
            println!("{}", eggs::achievement_message());
            return Ok(());
        }
        Command::CelebrateArt { kind } => {
            let celebration = Celebration::from_name(kind)
                .with_context(|| format!("unknown celebration: {kind}"))?;
            println!("{}", celebration.art());
            return Ok(());
        }
        _ => {}
    }

    let config = open_config(cli.db.as_deref())?;

    match &cli.command {
        Command::Config { action } => handle_config(&config, action),
        Command::Get { endpoint } => {
            let source = build_source(&cli, &config)?;
            let surprise = source.fetch(*endpoint).await?;
            println!("{}", render(&surprise));
            Ok(())
        }
        Command::Chat => {
            let source = build_source(&cli, &config)?;
            run_chat(source.as_ref()).await
        }
        Command::Egg { .. } | Command::Hint | Command::Achievement | Command::CelebrateArt { .. } => {
            Ok(())
        }
    }
}

fn open_config(db: Option<&str>) -> Result<Config> {
    let path = match db {
        Some(path) => path.to_string(),
        None => {
            let path = default_db_path()?;
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            path.to_string_lossy().into_owned()
        }
    };
    Config::open(&path)
}

fn build_source(cli: &Cli, config: &Config) -> Result<Box<dyn SurpriseSource>> {
    if cli.local {
        return Ok(Box::new(LocalSource));
    }
    let base_url =
        config::resolve_base_url(cli.base_url.as_deref(), std::env::var(BASE_URL_ENV).ok(), config)?;
    let token = config::resolve_token(cli.token.as_deref(), std::env::var(TOKEN_ENV).ok(), config)?;
    tracing::debug!(%base_url, "using remote surprise API");
    Ok(Box::new(HttpSource::new(SurpriseClient::new(base_url), token)))
}

fn handle_config(config: &Config, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            config.set(key, value)?;
            println!("✓ {key} saved");
        }
        ConfigAction::Get { key } => {
            config::check_key(key)?;
            match config.get(key)? {
                Some(value) if key == config::TOKEN_KEY => println!("{}", mask(&value)),
                Some(value) => println!("{value}"),
                None => println!("{key} is not set"),
            }
        }
        ConfigAction::Unset { key } => {
            config::check_key(key)?;
            config.remove(key)?;
            println!("✓ {key} removed");
        }
    }
    Ok(())
}

/// Show only the last four characters of a secret.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

async fn run_chat(source: &dyn SurpriseSource) -> Result<()> {
    println!("{}", eggs::random_hint());
    println!("type /help for commands");

    // Async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nsurprise> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        match chat::respond(&line, source).await {
            Ok(Reply::Empty) => continue,
            Ok(Reply::Quit) => break,
            Ok(Reply::Say(text)) => println!("{}", text),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    println!("goodbye.");
    Ok(())
}
