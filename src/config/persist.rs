//! Configuration persistence using toml_edit to preserve formatting and comments.

use super::Config;
use anyhow::{Context, Result};
use std::path::Path;
use toml_edit::{DocumentMut, TableLike};

/// Serialize a config as a TOML document.
pub fn to_document(config: &Config) -> Result<DocumentMut> {
    let content = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    content
        .parse()
        .with_context(|| "Failed to parse serialized config")
}

/// Save the entire config to a TOML file, replacing any existing content
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let doc = to_document(config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    std::fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

/// Parse user config text and add every key it lacks from the defaults.
///
/// Existing values, comments and ordering are kept. Returns the merged
/// document and whether anything was added.
pub fn merge_with_defaults(content: &str) -> Result<(DocumentMut, bool)> {
    let mut doc: DocumentMut = content
        .parse()
        .with_context(|| "Failed to parse config file")?;
    let defaults = to_document(&Config::default())?;

    let changed = fill_missing(doc.as_table_mut(), defaults.as_table());

    Ok((doc, changed))
}

/// Merge the defaults into the file at `path` and write it back if keys
/// were missing. Returns whether the file changed.
pub fn update_missing_keys(path: &Path) -> Result<bool> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let (doc, changed) = merge_with_defaults(&content)
        .with_context(|| format!("Failed to merge config file: {:?}", path))?;

    if changed {
        std::fs::write(path, doc.to_string())
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
    }

    Ok(changed)
}

fn fill_missing(target: &mut dyn TableLike, defaults: &dyn TableLike) -> bool {
    let mut changed = false;

    for (key, default_item) in defaults.iter() {
        if !target.contains_key(key) {
            target.insert(key, default_item.clone());
            changed = true;
            continue;
        }

        let nested = target
            .get_mut(key)
            .and_then(|item| item.as_table_like_mut())
            .zip(default_item.as_table_like());
        if let Some((target_table, default_table)) = nested {
            changed |= fill_missing(target_table, default_table);
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_fills_missing_keys() {
        let content = "[recoding.dimensions.max]\nwidth = 1280\n";
        let (doc, changed) = merge_with_defaults(content).unwrap();
        assert!(changed);

        let config: Config = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.recoding.dimensions.max.width, 1280);
        assert_eq!(config.recoding.dimensions.max.height, 1080);
        assert_eq!(config.recoding.codecs.audio.fallback, "aac");
        assert_eq!(config.files.output.suffix, "recoded4tv");
    }

    #[test]
    fn test_merge_keeps_comments() {
        let content = "# my settings\n[files.output]\n# container\nextension = \"mp4\"\n";
        let (doc, _) = merge_with_defaults(content).unwrap();
        let text = doc.to_string();
        assert!(text.contains("# my settings"));
        assert!(text.contains("# container"));
        assert!(text.contains("extension = \"mp4\""));
    }

    #[test]
    fn test_complete_config_is_unchanged() {
        let content = to_document(&Config::default()).unwrap().to_string();
        let (_, changed) = merge_with_defaults(&content).unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_inline_tables_are_merged() {
        let content = "[recoding.codecs]\nvideo = { allowed = [\"hevc\"] }\n";
        let (doc, changed) = merge_with_defaults(content).unwrap();
        assert!(changed);

        let config: Config = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.recoding.codecs.video.allowed, vec!["hevc"]);
        assert_eq!(config.recoding.codecs.video.fallback, "libx264");
    }

    #[test]
    fn test_update_missing_keys_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

        assert!(update_missing_keys(&path).unwrap());
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("level = \"info\""));
        assert!(text.contains("fallback = \"libx264\""));

        assert!(!update_missing_keys(&path).unwrap());
    }
}
