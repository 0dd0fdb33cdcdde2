use super::GoogleArgs;
use crate::config::Config;
use crate::error::{AppError, Result};
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show the config file and service account key paths
    Paths,
    /// Show the effective configuration after applying flags and environment
    Config,
}

impl ShowResource {
    pub async fn execute(&self, args: &GoogleArgs) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(args),
            ShowResource::Config => show_config(args),
        }
    }
}

fn show_paths(args: &GoogleArgs) -> Result<()> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_file()?,
    };
    let config = args.load_config()?;

    info!(path = ?config_path, exists = config_path.exists(), "Config path");
    info!(
        path = ?config.google.key_file,
        exists = config.google.key_file.exists(),
        "Service account key path"
    );

    Ok(())
}

fn show_config(args: &GoogleArgs) -> Result<()> {
    let config = args.load_config()?;
    println!("{}", render_config(&config)?);

    Ok(())
}

fn render_config(config: &Config) -> Result<String> {
    let rendered = toml::to_string(config)
        .map_err(|e| AppError::Config(format!("Failed to render config: {}", e)))?;
    Ok(rendered.trim_end().to_string())
}
