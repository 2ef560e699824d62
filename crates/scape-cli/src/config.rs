//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory),
//! and applying command-line overrides on top of them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use scape::{
    ScapeError,
    config::{AppConfig, GeneratorConfig},
};

use crate::args::GenerateArgs;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ScapeError {
    fn from(err: ConfigError) -> Self {
        ScapeError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (scape/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ScapeError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("scape/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "scape", "scape") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Apply command-line generator overrides to a loaded configuration.
pub fn apply_overrides(config: AppConfig, overrides: &GenerateArgs) -> AppConfig {
    let generator = config.generator();
    let merged = GeneratorConfig::new(
        overrides.size.unwrap_or(generator.size()),
        overrides
            .container
            .as_deref()
            .unwrap_or(generator.container_element_id()),
        overrides.seed.or(generator.seed()),
    )
    .with_mesh_layout(generator.mesh_layout().clone());

    AppConfig::new(merged, config.document().clone())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ScapeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use scape::model::LayoutName;

    use super::*;

    fn generate_args(size: Option<usize>, seed: Option<u64>) -> GenerateArgs {
        GenerateArgs {
            name: "test".to_string(),
            size,
            container: None,
            seed,
        }
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[generator]\nsize = 12\nmesh_layout = \"grid\"\n\n[document]\nindent = 3"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.generator().size(), 12);
        assert_eq!(config.generator().mesh_layout(), &LayoutName::Grid);
        assert_eq!(config.document().indent(), 3);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_config(Some(&missing)).unwrap_err();

        assert!(matches!(err, ScapeError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator\nsize = ").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();

        assert!(err.to_string().contains("Failed to parse TOML configuration"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let base = AppConfig::new(
            GeneratorConfig::new(50, "graph", Some(1)).with_mesh_layout(LayoutName::Circle),
            scape::config::DocumentConfig::new(4),
        );

        let merged = apply_overrides(base, &generate_args(Some(5), None));

        assert_eq!(merged.generator().size(), 5);
        assert_eq!(merged.generator().container_element_id(), "graph");
        assert_eq!(merged.generator().seed(), Some(1));
        assert_eq!(merged.generator().mesh_layout(), &LayoutName::Circle);
        assert_eq!(merged.document().indent(), 4);
    }
}
