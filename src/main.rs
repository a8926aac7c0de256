// Main entry point
use clap::Parser;
use colored::Colorize;
use shakespeare::application;
use shakespeare::infrastructure::config::{self, load_config, Config};
use shakespeare::interfaces::cli::Cli;
use shakespeare::state::AppState;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let mut config = load_config()?;

    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }

    if cli.status {
        print_status(&config, cli.api_key.as_deref());
        return Ok(());
    }

    let text = if cli.text.is_empty() {
        let mut input = String::new();
        tokio::io::stdin().read_to_string(&mut input).await?;
        input.trim().to_string()
    } else {
        cli.text.join(" ")
    };

    if text.is_empty() {
        eprintln!("{}", "Please provide some text to translate".red());
        std::process::exit(1);
    }

    let state = AppState::new(config)?;

    let result = tokio::select! {
        result = application::translate::translate_text(&state, &text, cli.api_key.as_deref()) => result,
        Ok(()) = shutdown_rx => {
            eprintln!("Translation interrupted");
            return Ok(());
        }
    };

    match result {
        Ok(translation) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&translation)?);
            } else {
                println!("{}", translation.payload);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    }
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(config: &Config, api_key_override: Option<&str>) {
    println!("{}", "shakespeare Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!("Endpoint: {}", config.endpoint);

    if application::translate::resolve_api_key(api_key_override, config).is_some() {
        println!("API key: Configured");
    } else {
        println!("API key: Not configured (public rate limit applies)");
    }

    match config.timeout_secs {
        Some(secs) => println!("Timeout: {}s", secs),
        None => println!("Timeout: none"),
    }
}
