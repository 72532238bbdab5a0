//! Beacon terminal binary - composition root.
//!
//! Ties the pipeline crates into a single executable:
//! 1. Parse CLI arguments (query words, output mode)
//! 2. Load configuration from TOML and initialize tracing
//! 3. Build the Gemini backend and the search gateway
//! 4. Execute the query once
//! 5. Render answer blocks and resolve source identity for display

use std::path::PathBuf;

use clap::Parser;

use beacon_core::config::BeaconConfig;
use beacon_render::render;
use beacon_search::{GeminiBackend, SearchGateway};
use beacon_sources::SourceIdentityResolver;
use beacon_voice::{DictationController, RecognizerSettings};

mod display;

#[derive(Parser, Debug)]
#[command(
    name = "beacon",
    version,
    about = "Web-grounded conversational search for the terminal"
)]
struct Cli {
    /// Emit one JSON document instead of formatted text.
    #[arg(long)]
    json: bool,

    /// Capture the query by voice instead of from the arguments.
    #[arg(long)]
    voice: bool,

    /// Query words, joined with spaces before submission.
    query: Vec<String>,
}

/// Resolve the config file path (BEACON_CONFIG env, or ~/.beacon/config.toml).
fn config_path() -> PathBuf {
    if let Ok(p) = std::env::var("BEACON_CONFIG") {
        return PathBuf::from(p);
    }
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".beacon").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".beacon").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config first: its log level seeds the tracing filter when RUST_LOG
    // is unset.
    let config_file = config_path();
    let config = BeaconConfig::load_or_default(&config_file);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting Beacon v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    if cli.voice {
        // The terminal build bundles no platform recognizer, so the
        // controller settles into its unsupported status and the flag
        // degrades with the standard message.
        let mut controller = DictationController::new(
            RecognizerSettings::from(&config.voice),
            None,
            Box::new(|transcript| {
                tracing::info!(transcript = %transcript, "Voice query captured");
            }),
        );
        controller.start();
        if !controller.is_supported() {
            if let Some(message) = controller.status().error_message() {
                eprintln!("{}", message);
            }
            std::process::exit(1);
        }
    }

    let query = cli.query.join(" ");
    let query = query.trim();
    if query.is_empty() {
        eprintln!("usage: beacon [--json] <query words>");
        std::process::exit(2);
    }

    let backend = match GeminiBackend::from_config(&config.search) {
        Some(backend) => backend,
        None => {
            tracing::error!("No API key available for the search backend");
            eprintln!(
                "No Gemini API key configured. Set [search] api_key in {} or export GEMINI_API_KEY.",
                config_file.display()
            );
            std::process::exit(1);
        }
    };

    let gateway = match SearchGateway::with_config(Box::new(backend), &config.search) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!(error = %e, "Invalid search configuration");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // One token per submission; a caller embedding this wiring discards
    // completions whose token is no longer the latest.
    let query_token = uuid::Uuid::new_v4();
    tracing::info!(query_token = %query_token, "Submitting query");

    let result = match gateway.execute(query).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, query_token = %query_token, "Search failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let blocks = render(&result.text);
    let resolver = SourceIdentityResolver::new(&config.sources);

    if cli.json {
        let document = display::json_document(query, &blocks, &result.sources, &resolver);
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    if !blocks.is_empty() {
        println!("{}", display::render_answer(&blocks));
    }
    if !result.sources.is_empty() {
        println!();
        println!("{}", display::render_sources(&result.sources, &resolver));
    }

    Ok(())
}
