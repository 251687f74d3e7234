//! shoptui - Main entry point
//!
//! A terminal storefront client with proper separation of concerns: the
//! library owns the screens, store, and carousel; this binary wires up
//! logging, CLI parsing, and the terminal lifecycle.

use std::io::stdout;
use std::path::Path;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use shoptui::app::App;
use shoptui::catalog::Catalog;
use shoptui::cli::{Cli, Commands};
use shoptui::config_file::ClientConfig;
use shoptui::error;

/// Initialize tracing with appropriate settings.
///
/// Logs go to stderr; the terminal UI owns stdout. RUST_LOG overrides the
/// default `info` filter.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("shoptui starting up");

    let cli = Cli::parse_args();

    match cli.command {
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match ClientConfig::load_from_file(&config) {
                Ok(config) => match config.validate() {
                    Ok(()) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid");
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {e}");
                        eprintln!("✗ Configuration validation failed: {e}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {e}");
                    eprintln!("✗ Failed to load configuration file: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Catalog { path }) => {
            info!("Validating catalog file: {:?}", path);
            match Catalog::load_from_file(&path) {
                Ok(catalog) => match catalog.validate() {
                    Ok(()) => {
                        info!("Catalog validation successful");
                        println!("✓ Catalog is valid ({} products)", catalog.products.len());
                    }
                    Err(e) => {
                        error!("Catalog validation failed: {e}");
                        eprintln!("✗ Catalog validation failed: {e}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load catalog file: {e}");
                    eprintln!("✗ Failed to load catalog file: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Run {
            config,
            save_config,
        }) => {
            let config = load_config(config.as_deref())?;
            if let Some(save_path) = save_config {
                config.save_to_file(&save_path)?;
                println!("✓ Configuration saved to {}", save_path.display());
                return Ok(());
            }
            run_storefront(config)?;
        }
        None => {
            info!("No command specified, launching storefront");
            run_storefront(ClientConfig::default())?;
        }
    }

    Ok(())
}

/// Load and validate a configuration file, falling back to defaults
fn load_config(path: Option<&Path>) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            let config = ClientConfig::load_from_file(path)?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(ClientConfig::default()),
    }
}

/// Run the interactive storefront
fn run_storefront(config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    // Create and run application
    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
