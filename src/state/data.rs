//! Shared data structures for the application state
//!
//! These structs represent the recipe data that flows from the bundled
//! catalog into the gallery and detail views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// How hard a recipe is to make
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recipe in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    /// Stable id, unique within the catalog; only used as a widget key
    pub id: String,
    /// English name
    pub name: String,
    /// Urdu name (right-to-left)
    pub localized_name: String,
    /// Bundled asset path (relative to the assets directory) or remote URL
    pub image: String,
    pub description: String,
    /// Display string, e.g. "20 mins"
    pub prep_time: String,
    /// Display string, e.g. "1 hr"
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
}

/// Where a record's image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file shipped with the application
    Bundled(PathBuf),
    /// A remote URL. Never fetched; the view shows its placeholder instead.
    Remote(String),
}

impl FoodRecord {
    /// Resolve the image reference against the assets directory
    pub fn image_source(&self, assets_dir: &Path) -> ImageSource {
        let image = self.image.trim();
        if image.starts_with("http://") || image.starts_with("https://") {
            return ImageSource::Remote(image.to_string());
        }

        let path = Path::new(image);
        if path.is_absolute() {
            ImageSource::Bundled(path.to_path_buf())
        } else {
            ImageSource::Bundled(assets_dir.join(path))
        }
    }

    /// First letter of the name, shown on the image placeholder
    pub fn monogram(&self) -> String {
        self.name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
