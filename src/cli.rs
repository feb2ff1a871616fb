use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notas")]
#[command(author, version, about = "Notes database builder and local store")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the bundled seed database from ./drizzle into ./static
    Migrate,

    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a note and save the database
    Add {
        /// Note content
        conteudo: String,

        /// Initial status
        #[arg(long, default_value = "0")]
        status: i64,
    },

    /// Change a note's status and save the database
    SetStatus {
        /// Note id
        id: i64,

        /// New status
        status: i64,
    },

    /// Delete a note and save the database
    Delete {
        /// Note id
        id: i64,
    },

    /// Display version information
    Version,
}
