// src/cli/mod.rs
// CLI module for folio commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod ask;
pub mod build;
pub mod serve;

pub use ask::{run_ask, run_chat};
pub use build::run_build;
pub use serve::run_server;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio site with a project gallery and chat assistant")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server (default)
    Serve {
        /// Address to bind (overrides FOLIO_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides FOLIO_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Pre-render the site into a directory
    Build {
        /// Output directory (overrides FOLIO_OUT_DIR)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Ask the assistant one question and print the reply
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Interactive chat with the assistant on stdin
    Chat,
}
