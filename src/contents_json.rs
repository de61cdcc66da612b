//! Read-only view of an appiconset `Contents.json`.
//!
//! Flutter's iOS template ships an `AppIcon.appiconset/Contents.json` that names
//! every icon file Xcode should pick up. We never rewrite it; we only parse it
//! to spot generated files that the asset catalog does not reference.

use crate::sizes::IosIcon;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub const CONTENTS_JSON: &str = "Contents.json";

/// Root of a Contents.json file. Unknown keys are ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ContentsFile {
    /// Image entries for the different idioms, sizes and scales
    #[serde(default)]
    pub images: Vec<ImageEntry>,

    #[serde(default)]
    pub info: Option<Info>,
}

/// One image slot in the asset catalog.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ImageEntry {
    /// Absent for slots Xcode shows as empty wells
    #[serde(default)]
    pub filename: Option<String>,

    /// Device type, e.g. "iphone", "ipad", "ios-marketing"
    #[serde(default)]
    pub idiom: Option<String>,

    /// e.g. "1x", "2x", "3x"
    #[serde(default)]
    pub scale: Option<String>,

    /// Size in points, e.g. "29x29" or "83.5x83.5"
    #[serde(default)]
    pub size: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Info {
    pub version: u8,
    pub author: String,
}

impl ContentsFile {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse Contents.json")
    }

    /// Loads `<appiconset>/Contents.json`, or `None` when the file is absent.
    pub fn load(appiconset: &Path) -> Result<Option<Self>> {
        let path = appiconset.join(CONTENTS_JSON);
        if !path.is_file() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&json).map(Some)
    }

    pub fn referenced_filenames(&self) -> HashSet<&str> {
        self.images
            .iter()
            .filter_map(|image| image.filename.as_deref())
            .collect()
    }

    /// Icons from `catalog` that no image entry points at, in catalog order.
    pub fn unreferenced<'a>(&self, catalog: &'a [IosIcon]) -> Vec<&'a IosIcon> {
        let referenced = self.referenced_filenames();
        catalog
            .iter()
            .filter(|icon| !referenced.contains(icon.filename))
            .collect()
    }
}
