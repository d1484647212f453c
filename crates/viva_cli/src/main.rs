//! CLI entry point for viva.chat.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Load configuration env files. Order: 1) ~/.viva/env  2) .env (project
/// root, searched upward). Later files never override variables already set.
fn load_viva_config() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".viva").join("env");
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    load_viva_config();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
