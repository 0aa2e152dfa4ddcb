//! Relayterm - a retro relay-station portfolio console
//!
//! Hosts the terminal shell in a real TTY: free-text commands navigate
//! between portfolio sections, custom pages stream in from the content
//! API at startup, and the classified scrollback renders with the CRT
//! palette.

mod repl;

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use tracing::{debug, info, warn};

use relayterm::config::loader;
use relayterm::{Config, ConfigLoader, ContentClient, Result, TerminalShell};

use repl::Repl;

/// Parsed command-line arguments
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Content API base URL override
    api_url: Option<String>,
    /// Enable debug logging
    debug: bool,
    /// Disable ANSI colors
    no_color: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".into());
                    }
                }
                "--url" | "-u" => {
                    if i + 1 < args.len() {
                        app_args.api_url = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err("Missing content API URL".into());
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--no-color" => {
                    app_args.no_color = true;
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("relayterm v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("Relayterm - a retro relay-station portfolio console");
    println!();
    println!("USAGE:");
    println!("    relayterm [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -u, --url <URL>        Content API base URL override");
    println!("    -d, --debug            Enable debug logging");
    println!("        --no-color         Disable ANSI colors");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    Relayterm looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $RELAYTERM_CONFIG");
    println!("    3. $XDG_CONFIG_HOME/relayterm/config.toml");
    println!("    4. ~/.relayterm/config.toml");
    println!("    5. ./relayterm.toml");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    RELAYTERM_CONFIG    Path to configuration file");
    println!("    RELAYTERM_DEBUG     Enable debug logging (1 or true)");
    println!("    RUST_LOG            Set logging level (error, warn, info, debug, trace)");
}

fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        print_help();
        process::exit(1);
    });

    let log_level = if args.debug
        || env::var("RELAYTERM_DEBUG").is_ok_and(|v| v == "1" || v.to_lowercase() == "true")
    {
        "debug"
    } else {
        "info"
    };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    info!("starting relayterm v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_configuration(&args)?;
    if let Some(url) = &args.api_url {
        config.content.api_url = url.clone();
    }
    if args.no_color {
        config.ui.color = false;
    }

    let shell = TerminalShell::from_config(&config);

    // Fire-and-forget startup fetch; the shell runs on static sections
    // until (and unless) the snapshot arrives.
    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let timeout = Duration::from_secs(config.content.fetch_timeout_secs);
    match ContentClient::new(&config.content.api_url, timeout) {
        Ok(client) => {
            let _guard = runtime.enter();
            client.spawn_fetch(tx);
        }
        Err(e) => warn!("content client unavailable: {}", e),
    }

    let first_visit = check_and_mark_visited();

    let mut repl = Repl::new(shell, config, rx, first_visit);
    repl.run()?;

    info!("relayterm shutdown complete");
    Ok(())
}

/// Load configuration from file or use defaults
fn load_configuration(args: &AppArgs) -> Result<Config> {
    let config_path = args
        .config_path
        .clone()
        .or_else(|| env::var("RELAYTERM_CONFIG").ok().map(PathBuf::from));

    if let Some(path) = &config_path {
        debug!("loading config from: {}", path.display());
        match ConfigLoader::load_from_file(path) {
            Ok(config) => return Ok(config),
            Err(e) => {
                warn!("failed to load config from {}: {}", path.display(), e);
                info!("falling back to default configuration");
                return Ok(Config::default());
            }
        }
    }

    match ConfigLoader::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("failed to load configuration: {}. Using defaults", e);
            Ok(Config::default())
        }
    }
}

/// Check the first-visit marker, creating it when absent
///
/// Returns true on the first run so the navigation tutorial shows once;
/// later runs only see it via the TUTORIAL command.
fn check_and_mark_visited() -> bool {
    let Some(marker) = loader::visited_marker_path() else {
        return false;
    };
    if marker.exists() {
        return false;
    }
    if let Err(e) = create_marker(&marker) {
        debug!("could not persist visited marker: {}", e);
    }
    true
}

fn create_marker(marker: &Path) -> std::io::Result<()> {
    if let Some(parent) = marker.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(marker, b"1")
}
