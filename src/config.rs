//! User configuration loaded from `config.toml`.
//!
//! ```toml
//! [ui]
//! reduced_motion = false
//! tick_ms = 16
//! smooth_scroll_ms = 600
//! entrance_ms = 800
//!
//! [thresholds]
//! skills = 0.3
//!
//! [page]
//! hidden = ["blog"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::{FolioError, Result};
use crate::models::{SectionId, Thresholds};

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub ui: UiConfig,
    /// Keyed by section id; validated in `into_settings`.
    #[serde(default)]
    pub thresholds: BTreeMap<String, f32>,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Skip entrance transitions, smooth scrolling and scene auto-rotation.
    pub reduced_motion: bool,
    pub tick_ms: u64,
    pub smooth_scroll_ms: u64,
    pub entrance_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            tick_ms: 16,
            smooth_scroll_ms: 600,
            entrance_ms: 800,
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageConfig {
    /// Sections left out of the page. They stay in the navigation bar.
    #[serde(default)]
    pub hidden: Vec<SectionId>,
}

/// Resolved settings the app runs with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub reduced_motion: bool,
    pub tick: Duration,
    pub smooth_scroll: Duration,
    pub entrance: Duration,
    pub thresholds: Thresholds,
    pub hidden: Vec<SectionId>,
}

impl Settings {
    fn from_ui(ui: &UiConfig, thresholds: Thresholds, hidden: Vec<SectionId>) -> Self {
        let motion = |ms: u64| {
            if ui.reduced_motion {
                Duration::ZERO
            } else {
                Duration::from_millis(ms)
            }
        };
        Self {
            reduced_motion: ui.reduced_motion,
            tick: Duration::from_millis(ui.tick_ms.max(1)),
            smooth_scroll: motion(ui.smooth_scroll_ms),
            entrance: motion(ui.entrance_ms),
            thresholds,
            hidden,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_ui(&UiConfig::default(), Thresholds::default(), Vec::new())
    }
}

impl FolioConfig {
    /// Read the config at `path`, or the default location if `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| {
            warn!("Failed to read config at {:?}: {}", path, source);
            FolioError::ConfigRead {
                path: path.clone(),
                source,
            }
        })?;
        Self::parse(&raw).map_err(|source| {
            warn!("Failed to parse config at {:?}: {}", path, source);
            FolioError::ConfigParse { path, source }
        })
    }

    pub fn parse(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Validate and resolve into runtime settings.
    pub fn into_settings(self) -> Result<Settings> {
        let mut thresholds = Thresholds::default();
        for (key, value) in self.thresholds {
            let section: SectionId = key.parse()?;
            if !(value > 0.0 && value <= 1.0) {
                return Err(FolioError::InvalidThreshold {
                    section: key,
                    value,
                });
            }
            thresholds.set(section, value);
        }
        Ok(Settings::from_ui(&self.ui, thresholds, self.page.hidden))
    }
}

/// `$CONFIG_DIR/folio/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}
