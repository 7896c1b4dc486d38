//! Decode preset configuration for CLI tools.
//!
//! Configuration is stored in ~/.aacbridge/{app_name}/config.yaml

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::wav::AudioFileFormat;

/// Default base configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".aacbridge";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Application name (not serialized).
    #[serde(skip)]
    pub app_name: String,

    /// Name of the currently active preset.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current_preset: String,

    /// Map of preset name to preset.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub presets: HashMap<String, Preset>,

    /// Path to the config file (not serialized).
    #[serde(skip)]
    config_path: PathBuf,
}

/// Named set of decode parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Bytes read from the input per decode call.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub chunk_size: usize,

    /// Channel count known ahead of decoding.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub channels: usize,

    /// Output file format, `pcm` or `wav`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output: String,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl Preset {
    /// The output format named by the preset, `None` when unset.
    pub fn output_format(&self) -> anyhow::Result<Option<AudioFileFormat>> {
        if self.output.is_empty() {
            return Ok(None);
        }
        AudioFileFormat::from_name(&self.output)
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("preset '{}': unsupported output format '{}'", self.name, self.output))
    }
}

impl Config {
    /// Gets the default config directory.
    pub fn default_config_dir(app_name: &str) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(app_name))
    }

    /// Gets the default config file path.
    pub fn default_config_path(app_name: &str) -> Option<PathBuf> {
        Self::default_config_dir(app_name).map(|dir| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Returns the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Adds or replaces a preset.
    pub fn add_preset(&mut self, name: &str, mut preset: Preset) -> anyhow::Result<()> {
        preset.name = name.to_string();
        preset.output_format()?;
        self.presets.insert(name.to_string(), preset);
        self.save()
    }

    /// Deletes a preset.
    pub fn delete_preset(&mut self, name: &str) -> anyhow::Result<()> {
        if self.presets.remove(name).is_none() {
            anyhow::bail!("preset '{}' not found", name);
        }
        if self.current_preset == name {
            self.current_preset.clear();
        }
        self.save()
    }

    /// Sets the current preset.
    pub fn use_preset(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.presets.contains_key(name) {
            anyhow::bail!("preset '{}' not found", name);
        }
        self.current_preset = name.to_string();
        self.save()
    }

    pub fn get_preset(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    pub fn get_current_preset(&self) -> Option<&Preset> {
        if self.current_preset.is_empty() {
            return None;
        }
        self.presets.get(&self.current_preset)
    }

    /// Resolves the preset by name, or the current preset if name is empty.
    pub fn resolve_preset(&self, name: Option<&str>) -> anyhow::Result<Option<&Preset>> {
        match name {
            Some(n) if !n.is_empty() => self
                .get_preset(n)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("preset '{}' not found", n)),
            _ => Ok(self.get_current_preset()),
        }
    }

    /// Lists preset names in sorted order.
    pub fn list_presets(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Loads configuration for the specified app, creating an empty file on
/// first use.
pub fn load_config(app_name: &str, custom_path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path(app_name)
            .ok_or_else(|| anyhow::anyhow!("cannot determine config path"))?,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut cfg = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        serde_yaml::from_str(&content)?
    } else {
        let cfg = Config::default();
        std::fs::write(&config_path, serde_yaml::to_string(&cfg)?)?;
        cfg
    };

    cfg.app_name = app_name.to_string();
    cfg.config_path = config_path;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aacdec").join("config.yaml");
        let cfg = load_config("aacdec", Some(path.to_str().unwrap())).unwrap();
        (dir, cfg)
    }

    fn preset() -> Preset {
        Preset {
            chunk_size: 4096,
            channels: 2,
            output: "wav".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_creates_file() {
        let (_dir, cfg) = temp_config();
        assert!(cfg.path().exists());
        assert_eq!(cfg.app_name, "aacdec");
        assert!(cfg.presets.is_empty());
    }

    #[test]
    fn test_add_use_reload() {
        let (_dir, mut cfg) = temp_config();
        cfg.add_preset("stereo", preset()).unwrap();
        cfg.use_preset("stereo").unwrap();

        let path = cfg.path().to_str().unwrap().to_string();
        let reloaded = load_config("aacdec", Some(&path)).unwrap();
        assert_eq!(reloaded.current_preset, "stereo");
        let p = reloaded.get_current_preset().unwrap();
        assert_eq!(p.name, "stereo");
        assert_eq!(p.chunk_size, 4096);
        assert_eq!(p.channels, 2);
        assert_eq!(p.output_format().unwrap(), Some(AudioFileFormat::Wav));
    }

    #[test]
    fn test_delete_clears_current() {
        let (_dir, mut cfg) = temp_config();
        cfg.add_preset("stereo", preset()).unwrap();
        cfg.use_preset("stereo").unwrap();
        cfg.delete_preset("stereo").unwrap();

        assert!(cfg.current_preset.is_empty());
        assert!(cfg.delete_preset("stereo").is_err());
    }

    #[test]
    fn test_use_missing() {
        let (_dir, mut cfg) = temp_config();
        assert!(cfg.use_preset("nope").is_err());
    }

    #[test]
    fn test_add_rejects_unknown_output() {
        let (_dir, mut cfg) = temp_config();
        let bad = Preset {
            output: "mp3".to_string(),
            ..Default::default()
        };
        assert!(cfg.add_preset("bad", bad).is_err());
        assert!(cfg.presets.is_empty());
    }

    #[test]
    fn test_resolve_preset() {
        let (_dir, mut cfg) = temp_config();
        assert!(cfg.resolve_preset(None).unwrap().is_none());

        cfg.add_preset("a", preset()).unwrap();
        cfg.add_preset("b", Preset::default()).unwrap();
        cfg.use_preset("a").unwrap();

        assert_eq!(cfg.resolve_preset(None).unwrap().unwrap().name, "a");
        assert_eq!(cfg.resolve_preset(Some("b")).unwrap().unwrap().name, "b");
        assert!(cfg.resolve_preset(Some("c")).is_err());
        assert_eq!(cfg.list_presets(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_fields_omitted() {
        let yaml = serde_yaml::to_string(&Preset::default()).unwrap();
        assert_eq!(yaml.trim(), "{}");
    }
}
