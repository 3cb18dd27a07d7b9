use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".docviewrc.json";

/// Project-scoped resolution settings.
///
/// Read-only from the resolver's point of view: every resolution function
/// takes `&Settings` explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "enabled")]
    pub title_use_comment_tag: bool,
    #[serde(default = "enabled")]
    pub title_use_full_class_name: bool,
    #[serde(default = "enabled")]
    pub title_use_simple_class_name: bool,
    #[serde(default = "enabled")]
    pub name_use_swagger3: bool,
    #[serde(default = "enabled")]
    pub name_use_swagger2: bool,
    #[serde(default = "enabled")]
    pub name_use_comment_tag: bool,
    #[serde(default = "enabled")]
    pub desc_use_swagger3: bool,
    #[serde(default = "enabled")]
    pub desc_use_swagger2: bool,
    #[serde(default = "enabled")]
    pub required_use_comment_tag: bool,
    #[serde(default = "default_title_tag")]
    pub title_tag: String,
    #[serde(default = "default_name_tag")]
    pub name_tag: String,
    #[serde(default = "default_required_tag_name")]
    pub required_tag_name: String,
    #[serde(default = "default_exclude_field_names")]
    pub exclude_field_names: BTreeSet<String>,
    #[serde(default = "default_exclude_field_annotation_ids")]
    pub exclude_field_annotation_ids: BTreeSet<String>,
    #[serde(
        default = "default_required_field_annotation_ids",
        alias = "requiredFieldAnnotationId"
    )]
    pub required_field_annotation_ids: BTreeSet<String>,
}

fn enabled() -> bool {
    true
}

fn default_title_tag() -> String {
    "docTitle".to_string()
}

fn default_name_tag() -> String {
    "docName".to_string()
}

fn default_required_tag_name() -> String {
    "required".to_string()
}

fn default_exclude_field_names() -> BTreeSet<String> {
    ["serialVersionUID"].map(String::from).into()
}

fn default_exclude_field_annotation_ids() -> BTreeSet<String> {
    ["com.fasterxml.jackson.annotation.JsonIgnore"]
        .map(String::from)
        .into()
}

fn default_required_field_annotation_ids() -> BTreeSet<String> {
    [
        "javax.validation.constraints.NotNull",
        "javax.validation.constraints.NotBlank",
        "javax.validation.constraints.NotEmpty",
    ]
    .map(String::from)
    .into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title_use_comment_tag: enabled(),
            title_use_full_class_name: enabled(),
            title_use_simple_class_name: enabled(),
            name_use_swagger3: enabled(),
            name_use_swagger2: enabled(),
            name_use_comment_tag: enabled(),
            desc_use_swagger3: enabled(),
            desc_use_swagger2: enabled(),
            required_use_comment_tag: enabled(),
            title_tag: default_title_tag(),
            name_tag: default_name_tag(),
            required_tag_name: default_required_tag_name(),
            exclude_field_names: default_exclude_field_names(),
            exclude_field_annotation_ids: default_exclude_field_annotation_ids(),
            required_field_annotation_ids: default_required_field_annotation_ids(),
        }
    }
}

impl Settings {
    /// Validate configuration values.
    ///
    /// Tag names and annotation identifiers must not be blank; a blank tag
    /// name would never match and a blank identifier hides a typo.
    pub fn validate(&self) -> Result<()> {
        for (key, tag) in [
            ("titleTag", &self.title_tag),
            ("nameTag", &self.name_tag),
            ("requiredTagName", &self.required_tag_name),
        ] {
            if tag.trim().is_empty() {
                bail!("'{}' must not be blank", key);
            }
        }

        for (key, ids) in [
            ("excludeFieldAnnotationIds", &self.exclude_field_annotation_ids),
            ("requiredFieldAnnotationIds", &self.required_field_annotation_ids),
        ] {
            if ids.iter().any(|id| id.trim().is_empty()) {
                bail!("'{}' contains a blank annotation identifier", key);
            }
        }

        Ok(())
    }
}

/// Contents of `.docviewrc.json`: settings for the whole repository plus
/// optional per-project blocks keyed by a declaration's `owningProject`.
///
/// A project block is a complete [`Settings`] of its own; keys it omits take
/// the built-in defaults, not the repository-level values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(flatten)]
    pub settings: Settings,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub projects: BTreeMap<String, Settings>,
}

impl Config {
    /// Settings for `project`, falling back to the repository-level settings
    /// for unknown or missing project keys.
    pub fn settings_for(&self, project: Option<&str>) -> &Settings {
        project
            .and_then(|name| self.projects.get(name))
            .unwrap_or(&self.settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.settings.validate()?;
        for (name, settings) in &self.projects {
            settings
                .validate()
                .with_context(|| format!("In project \"{}\"", name))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {:?}", path))?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            from_file: true,
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
