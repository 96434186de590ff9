//! Command-line interface for the `loadcast` binary.

use clap::{Args, Parser, Subcommand};
use loadcast_config::LoadcastConfig;
use std::path::PathBuf;

/// Top-level CLI parser for the `loadcast` binary.
#[derive(Debug, Parser)]
#[command(
    name = "loadcast",
    version,
    about = "loadcast - building energy-load prediction service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP prediction server
    Serve(ServeArgs),
    /// Print the JSON Schemas of the request and response types
    Schema,
}

#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Model artifact directory (overrides config)
    #[arg(long, value_name = "DIR")]
    pub model_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply CLI overrides on top of the layered configuration.
    pub fn apply(&self, config: &mut LoadcastConfig) {
        if let Some(host) = &self.host {
            config.http.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if let Some(dir) = &self.model_dir {
            config.model.dir.clone_from(dir);
        }
    }
}
