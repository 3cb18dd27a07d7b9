use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tracing::info;
use walkdir::WalkDir;

use super::super::{
    args::{OutputFormat, ResolveCommand},
    exit_status::ExitStatus,
    report::{self, FileReport},
};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config, load_config_file},
    model::DeclarationDocument,
    resolve::resolve_tree,
};

pub fn resolve(cmd: &ResolveCommand) -> Result<ExitStatus> {
    let config = load_settings(cmd.config.as_deref())?;
    let files = collect_declaration_files(&cmd.paths)?;

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let document = read_document(&path)?;
        info!(
            path = %path.display(),
            declarations = document.declarations.len(),
            "loaded declarations"
        );
        let declarations = resolve_tree(&document.declarations, &config);
        reports.push(FileReport { path, declarations });
    }

    match cmd.format {
        OutputFormat::Text => report::print_text(&reports, cmd.explain),
        OutputFormat::Json => report::print_json(&reports)?,
    }

    Ok(ExitStatus::Success)
}

fn load_settings(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if !loaded.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }
    Ok(loaded.config)
}

/// Expand directories to the `*.json` files below them, sorted by path.
///
/// The configuration file itself is never treated as a declaration file.
fn collect_declaration_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            bail!("Path does not exist: {}", path.display());
        }

        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|p| is_declaration_file(p))
            .collect();
        found.sort();
        files.extend(found);
    }

    Ok(files)
}

fn is_declaration_file(path: &Path) -> bool {
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let is_config = path
        .file_name()
        .is_some_and(|name| name == CONFIG_FILE_NAME);
    is_json && !is_config
}

fn read_document(path: &Path) -> Result<DeclarationDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read declaration file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse declaration file: {}", path.display()))
}
