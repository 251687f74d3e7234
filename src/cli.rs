use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shoptui - a terminal storefront client
#[derive(Parser)]
#[command(name = "shoptui")]
#[command(about = "Browse products, manage a cart, and place orders from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive storefront
    Run {
        /// Path to a client configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the effective configuration to a file and exit
        #[arg(long)]
        save_config: Option<PathBuf>,
    },
    /// Validate a client configuration file
    Validate {
        /// Path to the configuration file to validate
        config: PathBuf,
    },
    /// Validate a product catalog file
    Catalog {
        /// Path to the catalog file to validate
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
