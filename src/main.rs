mod cli;

use notas::config;
use notas::runtime::connection_from_config;
use notas_db::migrations;
use notas_db::queries::notas as notas_queries;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "notas=debug,notas_db=debug".to_string()
        } else {
            "notas=info,notas_db=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Migrate => migrate(),
        Commands::List { json } => list_notes(cli.config.as_deref(), json),
        Commands::Add { conteudo, status } => add_note(cli.config.as_deref(), &conteudo, status),
        Commands::SetStatus { id, status } => set_status(cli.config.as_deref(), id, status),
        Commands::Delete { id } => delete_note(cli.config.as_deref(), id),
        Commands::Version => {
            println!("notas {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn migrate() -> Result<()> {
    migrations::build_default_seed().context("Error initializing database")?;
    Ok(())
}

fn list_notes(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let mut conn = connection_from_config(&config)?;
    let db = conn.initialize()?;

    let notas = notas_queries::list_notas(db)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notas)?);
    } else if notas.is_empty() {
        println!("No notes.");
    } else {
        for nota in &notas {
            println!("[{}] ({}) {}", nota.id, nota.status, nota.conteudo);
        }
    }

    Ok(())
}

fn add_note(config_path: Option<&Path>, conteudo: &str, status: i64) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let mut conn = connection_from_config(&config)?;
    let db = conn.initialize()?;

    let nota = notas_queries::create_nota_with_status(db, conteudo, status)?;
    conn.save().context("Failed to save database")?;

    println!("Added note {}", nota.id);
    Ok(())
}

fn set_status(config_path: Option<&Path>, id: i64, status: i64) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let mut conn = connection_from_config(&config)?;
    let db = conn.initialize()?;

    notas_queries::update_status(db, id, status)?;
    conn.save().context("Failed to save database")?;

    println!("Note {} status set to {}", id, status);
    Ok(())
}

fn delete_note(config_path: Option<&Path>, id: i64) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let mut conn = connection_from_config(&config)?;
    let db = conn.initialize()?;

    notas_queries::delete_nota(db, id)?;
    conn.save().context("Failed to save database")?;

    println!("Deleted note {}", id);
    Ok(())
}
