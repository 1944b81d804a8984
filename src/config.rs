use crate::input::ControlId;
use crate::nav::{FlowLayout, NavigationConfig};
use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rejected configuration. Raised while loading, never recovered from.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("key binding {key:?} must be a single character")]
    InvalidBinding { key: String },
    #[error("screen.{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: u16,
        value: u16,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub background: BackgroundConfig,
    /// Extra key bindings for the face and option buttons
    #[serde(default = "default_bindings")]
    pub bindings: BTreeMap<String, ControlId>,
    #[serde(default)]
    pub library: LibraryConfig,
}

/// Tile geometry of the tablet screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub tile_width: u16,
    pub tile_height: u16,
    pub gap: u16,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        let layout = FlowLayout::default();
        Self {
            tile_width: layout.tile_width,
            tile_height: layout.tile_height,
            gap: layout.gap,
        }
    }
}

impl ScreenConfig {
    #[must_use]
    pub fn layout(&self) -> FlowLayout {
        FlowLayout {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            gap: self.gap,
        }
    }
}

/// Drifting silhouettes behind the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub enabled: bool,
    pub sprites: usize,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sprites: 10,
        }
    }
}

/// Items hosted on the tablet screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub items: Vec<String>,
    /// Newline separated list, read in addition to `items`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_file: Option<PathBuf>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let items = [
            "Mario Kart 8 Deluxe",
            "Super Mario Odyssey",
            "Zelda: Breath of the Wild",
            "Zelda: Tears of the Kingdom",
            "Animal Crossing",
            "Splatoon 3",
            "Super Smash Bros. Ultimate",
            "Metroid Dread",
            "Kirby and the Forgotten Land",
            "Pikmin 4",
            "Luigi's Mansion 3",
            "Super Mario Wonder",
        ];
        Self {
            items: items.into_iter().map(String::from).collect(),
            items_file: None,
        }
    }
}

fn default_bindings() -> BTreeMap<String, ControlId> {
    [
        ("x", ControlId::X),
        ("y", ControlId::Y),
        ("a", ControlId::A),
        ("b", ControlId::B),
        ("-", ControlId::Minus),
        ("+", ControlId::Plus),
        ("c", ControlId::Capture),
        ("h", ControlId::Home),
    ]
    .into_iter()
    .map(|(key, control)| (key.to_string(), control))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            screen: ScreenConfig::default(),
            background: BackgroundConfig::default(),
            bindings: default_bindings(),
            library: LibraryConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "wrote default config");
            return Ok(config);
        }

        Ok(Self::load_from(&config_path)?)
    }

    /// Parses and validates the config file at `path`
    pub fn load_from(path: &Path) -> std::result::Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if let Some(key) = self.bindings.keys().find(|key| key.chars().count() != 1) {
            return Err(ConfigError::InvalidBinding { key: key.clone() });
        }
        for (field, min, value) in [
            ("tile_width", 4, self.screen.tile_width),
            ("tile_height", 3, self.screen.tile_height),
        ] {
            if value < min {
                return Err(ConfigError::TooSmall { field, min, value });
            }
        }
        Ok(())
    }

    /// Saves configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> std::result::Result<PathBuf, ConfigError> {
        let proj_dirs = project_dirs()?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Bindings keyed by character; `validate` guarantees one char per key
    #[must_use]
    pub fn key_bindings(&self) -> BTreeMap<char, ControlId> {
        self.bindings
            .iter()
            .filter_map(|(key, control)| key.chars().next().map(|c| (c, *control)))
            .collect()
    }
}

pub fn project_dirs() -> std::result::Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "joyconsole").ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("loop = true"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("[navigation]\nloop = false\n");
        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.navigation.wrap);
        assert_eq!(config.screen, ScreenConfig::default());
        assert_eq!(config.key_bindings().get(&'a'), Some(&ControlId::A));
    }

    #[test]
    fn test_partial_sections_fill_missing_fields() {
        let file = write_config(
            "[navigation]\n[screen]\ngap = 2\n[background]\nenabled = false\n\
             [library]\nitems_file = \"games.txt\"\n",
        );
        let config = Config::load_from(file.path()).unwrap();
        assert!(config.navigation.wrap);
        assert_eq!(config.screen.gap, 2);
        assert_eq!(config.screen.tile_width, ScreenConfig::default().tile_width);
        assert!(!config.background.enabled);
        assert_eq!(config.background.sprites, 10);
        assert_eq!(config.library.items, LibraryConfig::default().items);
        assert_eq!(config.library.items_file, Some(PathBuf::from("games.txt")));
    }

    #[test]
    fn test_non_boolean_loop_is_rejected() {
        let file = write_config("[navigation]\nloop = \"yes\"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_unknown_control_is_rejected() {
        let file = write_config("[bindings]\nz = \"turbo\"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("turbo"));
    }

    #[test]
    fn test_multi_char_binding_is_rejected() {
        let file = write_config("[bindings]\nab = \"a\"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBinding { ref key } if key == "ab"));
    }

    #[test]
    fn test_tiny_tiles_are_rejected() {
        let file = write_config("[screen]\ntile_width = 2\ntile_height = 3\ngap = 1\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooSmall {
                field: "tile_width",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Config::load_from(Path::new("/nonexistent/joyconsole.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/joyconsole.toml"));
    }
}
