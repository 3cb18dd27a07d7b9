use std::{env, fs};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

/// Write the default `.docviewrc.json` into the current directory.
///
/// Refuses to overwrite an existing file. The generated JSON goes through
/// the same parse and validation as a loaded config before it is written.
pub fn init() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    let content = default_config_json()?;
    let config = parse_generated(&content)?;
    fs::write(&config_path, &content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", config_path.display()).green()
    );
    print_settings_summary(&config);

    Ok(ExitStatus::Success)
}

fn parse_generated(content: &str) -> Result<Config> {
    let config: Config =
        serde_json::from_str(content).context("Generated config is not valid JSON")?;
    config
        .validate()
        .context("Generated config failed validation")?;
    Ok(config)
}

fn print_settings_summary(config: &Config) {
    let settings = &config.settings;
    println!(
        "  comment tags: @{}, @{}, @{}",
        settings.title_tag, settings.name_tag, settings.required_tag_name
    );
    println!(
        "  required annotations: {}",
        join(&settings.required_field_annotation_ids)
    );
    println!(
        "  excluded annotations: {}",
        join(&settings.exclude_field_annotation_ids)
    );
}

fn join<'a>(ids: impl IntoIterator<Item = &'a String>) -> String {
    ids.into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
