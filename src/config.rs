//! User configuration loaded from `config.toml`
//!
//! Every key is optional. A missing file yields the defaults.
//!
//! ```toml
//! [window]
//! width = 393
//! height = 852
//!
//! [gallery]
//! initial_num_to_render = 6
//! max_to_render_per_batch = 6
//! window_size = 5
//!
//! [detail]
//! empty_lists = "placeholder"   # or "hide"
//!
//! [assets]
//! dir = "/usr/share/mikabites/assets"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::layout::grid::WindowTuning;
use crate::layout::scale::{BASE_HEIGHT, BASE_WIDTH};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "mikabites";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub gallery: GalleryConfig,
    pub detail: DetailConfig,
    pub assets: AssetsConfig,
}

/// Initial window size in logical units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: BASE_WIDTH,
            height: BASE_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Configured size, or the reference size when a value is unusable
    pub fn size(&self) -> (f32, f32) {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        let width = if valid(self.width) { self.width } else { BASE_WIDTH };
        let height = if valid(self.height) { self.height } else { BASE_HEIGHT };
        (width, height)
    }
}

/// Gallery virtualization tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub initial_num_to_render: usize,
    pub max_to_render_per_batch: usize,
    pub window_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let tuning = WindowTuning::default();
        Self {
            initial_num_to_render: tuning.initial_num_to_render,
            max_to_render_per_batch: tuning.max_to_render_per_batch,
            window_size: tuning.window_size,
        }
    }
}

impl GalleryConfig {
    /// Tunables with zero values raised to one
    pub fn tuning(&self) -> WindowTuning {
        WindowTuning {
            initial_num_to_render: self.initial_num_to_render.max(1),
            max_to_render_per_batch: self.max_to_render_per_batch.max(1),
            window_size: self.window_size.max(1),
        }
    }
}

/// How the detail view renders an empty ingredients/instructions/tips list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyListPolicy {
    /// Omit the whole section
    #[default]
    Hide,
    /// Keep the section header and show a short placeholder line
    Placeholder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    pub empty_lists: EmptyListPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory bundled image paths are resolved against
    pub dir: Option<PathBuf>,
}

impl AssetsConfig {
    /// Configured directory, else `assets/` next to the executable,
    /// else `assets/` in the working directory
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join("assets")))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

impl Config {
    /// Path of the user's config file
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(Error::NoDirectory { kind: "config" })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
    }

    /// Load the user's config file, or defaults when it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from an explicit path, or defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
