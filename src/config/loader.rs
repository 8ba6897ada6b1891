//! Config file discovery and layering

use super::Config;
use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override config keys.
pub const ENV_PREFIX: &str = "BLAH_";

/// Table name under which settings may be nested in a config file.
const SECTION: &str = "blah";

const CANDIDATES: [&str; 6] =
    ["blah.toml", ".blah.toml", "blah.yml", ".blah.yml", "blah.yaml", ".blah.yaml"];

/// Values given on the command line; `None` leaves lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hg_command: Option<String>,
}

enum FileLayer {
    Toml(toml::Value),
    Yaml(serde_yaml::Value),
}

/// Resolve the effective configuration.
///
/// An explicitly given `config_path` must exist and parse. A file found by
/// discovery in `search_dir` (or the user config directory) that fails to
/// parse is skipped with a warning.
pub fn load_config(
    search_dir: &Path,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return resolve(None, overrides);
    };

    let layer = match read_config_file(&config_file) {
        Ok(layer) => layer,
        Err(e) if config_path_provided => return Err(e),
        Err(e) => {
            tracing::warn!("Ignoring auto-discovered config {}: {:#}", config_file.display(), e);
            return resolve(None, overrides);
        }
    };

    match resolve(Some(&layer), overrides) {
        Ok(config) => {
            tracing::debug!(path = %config_file.display(), "loaded config");
            Ok(config)
        }
        Err(e) if config_path_provided => {
            Err(e.context(format!("Invalid config: {}", config_file.display())))
        }
        Err(e) => {
            tracing::warn!("Ignoring auto-discovered config {}: {:#}", config_file.display(), e);
            resolve(None, overrides)
        }
    }
}

fn resolve(file: Option<&FileLayer>, overrides: &CliOverrides) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    figment = match file {
        Some(FileLayer::Toml(value)) => figment.merge(Serialized::defaults(value)),
        Some(FileLayer::Yaml(value)) => figment.merge(Serialized::defaults(value)),
        None => figment,
    };
    figment
        .merge(Env::prefixed(ENV_PREFIX).only(&["git_command", "hg_command"]))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Failed to resolve configuration")
}

fn read_config_file(config_file: &Path) -> Result<FileLayer> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "toml" => {
            let raw: toml::Value = toml::from_str(&content)
                .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;
            let value = if let Some(nested) = raw.get(SECTION) { nested.clone() } else { raw };
            Ok(FileLayer::Toml(value))
        }
        "yaml" | "yml" => {
            let raw: serde_yaml::Value = serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;
            let value = if let Some(nested) = raw.get(SECTION) { nested.clone() } else { raw };
            Ok(FileLayer::Yaml(value))
        }
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|candidate| search_dir.join(candidate))
        .find(|path| path.is_file())
        .or_else(|| {
            let user_config = config_root_dir()?.join("blah").join("config.toml");
            user_config.is_file().then_some(user_config)
        })
}

fn config_root_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    }
}
