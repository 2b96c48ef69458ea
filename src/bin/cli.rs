//! bacon CLI - movie distance to Kevin Bacon.
//!
//! Usage:
//!   bacon                        # Interactive prompt
//!   bacon query "Tom Hanks"      # One-shot distance
//!   bacon neighbors "Apollo 13"  # Cast of a movie / films of an actor
//!   bacon stats                  # Graph statistics
//!   bacon -d data/movies query "Tom Hanks" --json

use anyhow::Result;
use bacon::cli::{render_outcome, run_shell, Cli, Commands};
use bacon::config::BaconConfig;
use bacon::{build_graph, distance_to, neighbors, query};
use clap::Parser;
use std::io;

fn main() {
    // Logs go to stderr; stdout carries prompts and results.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = BaconConfig::load(&cli.config);
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    if let Some(target) = cli.target {
        config.target = target;
    }

    let graph = build_graph(&config.dataset);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            run_shell(&graph, &config, stdin.lock(), io::stdout().lock())?;
        }

        Commands::Query { name, json } => {
            if json {
                let response = query(&graph, &name, &config.target);
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                let outcome = distance_to(&graph, &name, &config.target);
                print!("{}", render_outcome(&name, &config.target, &outcome));
            }
        }

        Commands::Neighbors { label, json } => {
            let response = neighbors(&graph, &label);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if !response.found {
                println!("\"{}\" is not in the data.", label);
            } else {
                println!("{}:", label);
                for neighbor in &response.neighbors {
                    println!("  {}", neighbor);
                }
            }
        }

        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&graph.stats())?);
        }
    }

    Ok(())
}
