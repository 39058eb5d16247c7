//! Configuration file handling for uds-request

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use uds_request::{OutputFormat, ServiceIds, UdsRequestConfig};

/// Load configuration from an explicit path, or the default location if present
pub fn load(path: Option<&Path>) -> Result<UdsRequestConfig> {
    if let Some(path) = path {
        return UdsRequestConfig::load_from(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()));
    }

    let default_path = config_path()?;
    if default_path.exists() {
        UdsRequestConfig::load_from(&default_path)
            .with_context(|| format!("Failed to load config file: {}", default_path.display()))
    } else {
        tracing::debug!(path = %default_path.display(), "No config file, using standard service IDs");
        Ok(UdsRequestConfig::default())
    }
}

/// Get the default config file path
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("uds-request");

    Ok(config_dir.join("config.toml"))
}

/// Fully resolved settings after merging CLI args over the config file
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub service_ids: ServiceIds,
    pub output: OutputFormat,
    pub no_color: bool,
}

/// Merge CLI arguments over config file values
pub fn merge_with_args(
    config: &UdsRequestConfig,
    output: Option<OutputFormat>,
    no_color: bool,
) -> MergedConfig {
    MergedConfig {
        service_ids: config.service_ids(),
        output: output.unwrap_or(config.output.format),
        no_color: no_color || config.output.no_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_args_override_file() {
        let config = UdsRequestConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap();

        let merged = merge_with_args(&config, None, false);
        assert_eq!(merged.output, OutputFormat::Json);
        assert!(!merged.no_color);

        let merged = merge_with_args(&config, Some(OutputFormat::Text), true);
        assert_eq!(merged.output, OutputFormat::Text);
        assert!(merged.no_color);
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service_overrides]\necu_reset = 0x51").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.service_ids().ecu_reset, 0x51);
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        assert!(load(Some(Path::new("/nonexistent/uds.toml"))).is_err());
    }
}
