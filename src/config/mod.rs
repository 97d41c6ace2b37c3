pub mod persist;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// Config file used when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "~/.tvrecode.toml";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File passed explicitly
    File(PathBuf),
    /// Default file, already present
    Default(PathBuf),
    /// Default file, just written with the built-in defaults
    Created(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    /// Keys missing from the default file were written back to it
    pub filled_missing_keys: bool,
}

/// Parse config text, filling anything it lacks from the defaults
pub fn parse_config(content: &str) -> Result<Config> {
    let (doc, _) = persist::merge_with_defaults(content)?;

    let config: Config =
        toml::from_str(&doc.to_string()).with_context(|| "Failed to parse config")?;

    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    parse_config(&content).with_context(|| format!("Invalid config file: {:?}", path))
}

/// Resolved location of the default config file
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load the given config file, or the default one
///
/// The default file is created with the built-in values when it does not
/// exist, and completed with any keys it lacks when it does.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<LoadedConfig> {
    match custom_path {
        Some(path) => Ok(LoadedConfig {
            config: load_config(path)?,
            source: ConfigSource::File(path.to_path_buf()),
            filled_missing_keys: false,
        }),
        None => load_or_create(&default_config_path()),
    }
}

/// Load `path`, writing the defaults there first if it does not exist
pub fn load_or_create(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        persist::save_config(path, &Config::default())?;
        return Ok(LoadedConfig {
            config: Config::default(),
            source: ConfigSource::Created(path.to_path_buf()),
            filled_missing_keys: false,
        });
    }

    let filled_missing_keys = persist::update_missing_keys(path)?;

    Ok(LoadedConfig {
        config: load_config(path)?,
        source: ConfigSource::Default(path.to_path_buf()),
        filled_missing_keys,
    })
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let recoding = &config.recoding;

    if recoding.dimensions.max.width == 0 || recoding.dimensions.max.height == 0 {
        anyhow::bail!("Maximum dimensions must be greater than 0");
    }

    for (kind, codec) in [
        ("video", &recoding.codecs.video),
        ("audio", &recoding.codecs.audio),
        ("subtitle", &recoding.codecs.subtitle),
    ] {
        if codec.fallback.trim().is_empty() {
            anyhow::bail!("No fallback {} codec configured", kind);
        }
        if codec.allowed.is_empty() {
            tracing::warn!("No {} codecs allowed, every {} track will be re-encoded", kind, kind);
        }
    }

    if config.files.output.extension.trim().is_empty() {
        anyhow::bail!("Output file extension cannot be empty");
    }

    LevelFilter::from_str(&config.logging.level)
        .map_err(|_| anyhow::anyhow!("Unknown log level: {}", config.logging.level))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = Config::default().recoding.policy();
        assert_eq!(policy, tvrecode_plan::PolicyConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [recoding.preferred_languages]
            audio = ["jpn"]

            [recoding.quality.video]
            parameter = "-crf 21"
            "#,
        )
        .unwrap();

        let policy = config.recoding.policy();
        assert_eq!(policy.preferred_audio_languages, vec!["jpn"]);
        assert_eq!(policy.preferred_subtitle_languages, vec!["eng", "cze", "slo"]);
        assert_eq!(policy.video_quality, "-crf 21");
        assert_eq!(policy.max_height, 1080);
    }

    #[test]
    fn test_empty_allowed_set_is_valid() {
        let config = parse_config("[recoding.codecs.subtitle]\nallowed = []\n").unwrap();
        assert!(config.recoding.codecs.subtitle.allowed.is_empty());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(parse_config("[recoding.dimensions.max]\nwidth = 0\n").is_err());
        assert!(parse_config("[recoding.codecs.audio]\nfallback = \"\"\n").is_err());
        assert!(parse_config("[logging]\nlevel = \"loud\"\n").is_err());
        assert!(parse_config("[logging]\nformat = \"xml\"\n").is_err());
        assert!(parse_config("not = [valid").is_err());
    }

    #[test]
    fn test_level_is_case_insensitive() {
        assert!(parse_config("[logging]\nlevel = \"ERROR\"\n").is_ok());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tvrecode.toml");

        let loaded = load_or_create(&path).unwrap();
        assert_eq!(loaded.source, ConfigSource::Created(path.clone()));
        assert_eq!(loaded.config, Config::default());
        assert!(path.exists());

        let loaded = load_or_create(&path).unwrap();
        assert_eq!(loaded.source, ConfigSource::Default(path.clone()));
        assert!(!loaded.filled_missing_keys);
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("missing.toml")).is_err());
    }
}
