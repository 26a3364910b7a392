use anyhow::{Context, Result};
use clap::Parser;

use myworld_agent::{telemetry, GeneratorConfig, ValidationGenerator};

/// Ask the generative service for supportive comments on a reflection.
#[derive(Debug, Parser)]
#[command(name = "myworld_agent", version)]
struct Cli {
    /// Text of the reflection to react to
    #[arg(required_unless_present = "save_config")]
    text: Vec<String>,

    /// Override the configured model
    #[arg(long)]
    model: Option<String>,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let mut config = GeneratorConfig::load();
    if let Some(model) = cli.model {
        config.model = model;
    }
    tracing::info!("LLM: {} at {}", config.model, config.api_url);

    if cli.save_config {
        let path = config.save()?;
        tracing::info!("Saved generator config to {:?}", path);
        if cli.text.is_empty() {
            return Ok(());
        }
    }

    let text = cli.text.join(" ");
    if text.trim().is_empty() {
        anyhow::bail!("Nothing to react to: the text is blank");
    }

    let generator = ValidationGenerator::from_config(&config);
    let comments = generator.generate(&text).await;
    let rendered = serde_json::to_string_pretty(&comments).context("Failed to render comments")?;
    println!("{rendered}");
    Ok(())
}
