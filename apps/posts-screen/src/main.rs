//! # Posts Screen
//!
//! Terminal client that mirrors a remote posts collection and lets the user
//! list, filter, create, edit, patch and delete posts.

use clap::Parser;

mod commands;
mod config;
mod controller;
mod observability;
mod render;
mod session;
mod state;
mod telemetry;

use config::{AppConfig, Backend};
use controller::PostsController;
use posts_core::domain::PostsScreen;
use state::AppState;

#[derive(Parser)]
#[command(name = "posts-screen", version)]
#[command(about = "List, create, edit, patch and delete posts on a REST API")]
struct Cli {
    /// URL of the posts collection (overrides POSTS_API_URL)
    #[arg(long)]
    api_url: Option<String>,
    /// Use the in-memory store with sample posts instead of a server
    #[arg(long, default_value_t = false, conflicts_with = "api_url")]
    in_memory: bool,
    /// User id filter to open the screen with (overrides POSTS_FILTER)
    #[arg(long)]
    filter: Option<String>,
    /// Emit logs as JSON (overrides LOG_FORMAT)
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

impl Cli {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if self.in_memory {
            config.backend = Backend::Memory;
        } else if let Some(base_url) = self.api_url {
            config.backend = Backend::Rest { base_url };
        }
        if let Some(filter) = self.filter {
            config.initial_filter = filter;
        }
        if self.json_logs {
            config.telemetry.json_logs = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Cli::parse().apply(AppConfig::from_env());

    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(backend = ?config.backend, "Starting posts screen");

    let state = AppState::new(&config)?;
    let controller = PostsController::new(
        state.posts,
        PostsScreen::with_filter(config.initial_filter),
    );

    session::run(controller).await
}
