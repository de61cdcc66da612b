//! Read-only audit of the icon files already present in a Flutter project.

use crate::sizes::{
    android_res_dir, ios_appiconset_dir, ANDROID_DENSITIES, IOS_ICONS, LAUNCHER_ICON,
    ROUND_LAUNCHER_ICON,
};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconState {
    Ok,
    WrongSize { width: u32, height: u32 },
    Missing,
    Unreadable(String),
}

impl fmt::Display for IconState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconState::Ok => f.write_str("ok"),
            IconState::WrongSize { width, height } => write!(f, "is {width}x{height}"),
            IconState::Missing => f.write_str("missing"),
            IconState::Unreadable(reason) => write!(f, "unreadable ({reason})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub path: PathBuf,
    pub expected_edge: u32,
    pub state: IconState,
}

impl AuditEntry {
    fn inspect(path: PathBuf, expected_edge: u32) -> Self {
        let state = if !path.is_file() {
            IconState::Missing
        } else {
            match image::image_dimensions(&path) {
                Ok((w, h)) if w == expected_edge && h == expected_edge => IconState::Ok,
                Ok((width, height)) => IconState::WrongSize { width, height },
                Err(err) => IconState::Unreadable(err.to_string()),
            }
        };

        AuditEntry {
            path,
            expected_edge,
            state,
        }
    }
}

/// Checks every icon the generator would write.
///
/// Platforms and density folders missing from the project are left out, and
/// round icons are only audited when the project ships them.
pub fn audit_project(project: &Path) -> Vec<AuditEntry> {
    let mut entries = Vec::new();

    let ios_dir = ios_appiconset_dir(project);
    if ios_dir.is_dir() {
        for icon in IOS_ICONS {
            entries.push(AuditEntry::inspect(ios_dir.join(icon.filename), icon.edge));
        }
    } else {
        log::info!("{} not found", ios_dir.display());
    }

    let res_dir = android_res_dir(project);
    if res_dir.is_dir() {
        for density in ANDROID_DENSITIES {
            let mipmap_dir = res_dir.join(density.folder);
            if !mipmap_dir.is_dir() {
                continue;
            }
            entries.push(AuditEntry::inspect(mipmap_dir.join(LAUNCHER_ICON), density.edge));

            let round = mipmap_dir.join(ROUND_LAUNCHER_ICON);
            if round.is_file() {
                entries.push(AuditEntry::inspect(round, density.edge));
            }
        }
    } else {
        log::info!("{} not found", res_dir.display());
    }

    entries
}

/// `true` when every audited icon exists at its expected size.
pub fn all_ok(entries: &[AuditEntry]) -> bool {
    entries.iter().all(|entry| entry.state == IconState::Ok)
}
