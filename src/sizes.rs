//! Fixed icon size tables and the Flutter project locations they are written to.

use std::path::{Path, PathBuf};

/// Smallest accepted width and height of a source image.
pub const MIN_SOURCE_EDGE: u32 = 1024;

const IOS_APPICONSET: [&str; 4] = ["ios", "Runner", "Assets.xcassets", "AppIcon.appiconset"];
const ANDROID_RES: [&str; 5] = ["android", "app", "src", "main", "res"];

/// Launcher icon written into every Android density folder.
pub const LAUNCHER_ICON: &str = "ic_launcher.png";

/// Round launcher icon, only refreshed when the project already ships one.
pub const ROUND_LAUNCHER_ICON: &str = "ic_launcher_round.png";

/// A square iOS icon: file name inside the appiconset and its edge in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosIcon {
    pub filename: &'static str,
    pub edge: u32,
}

/// An Android mipmap density folder and the launcher edge it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    pub folder: &'static str,
    pub edge: u32,
}

const fn ios(filename: &'static str, edge: u32) -> IosIcon {
    IosIcon { filename, edge }
}

/// Every icon in the Flutter iOS appiconset.
pub const IOS_ICONS: [IosIcon; 15] = [
    ios("Icon-App-20x20@1x.png", 20),
    ios("Icon-App-20x20@2x.png", 40),
    ios("Icon-App-20x20@3x.png", 60),
    ios("Icon-App-29x29@1x.png", 29),
    ios("Icon-App-29x29@2x.png", 58),
    ios("Icon-App-29x29@3x.png", 87),
    ios("Icon-App-40x40@1x.png", 40),
    ios("Icon-App-40x40@2x.png", 80),
    ios("Icon-App-40x40@3x.png", 120),
    ios("Icon-App-60x60@2x.png", 120),
    ios("Icon-App-60x60@3x.png", 180),
    ios("Icon-App-76x76@1x.png", 76),
    ios("Icon-App-76x76@2x.png", 152),
    ios("Icon-App-83.5x83.5@2x.png", 167),
    ios("Icon-App-1024x1024@1x.png", 1024),
];

/// Mipmap folders from mdpi to xxxhdpi.
pub const ANDROID_DENSITIES: [Density; 5] = [
    Density { folder: "mipmap-mdpi", edge: 48 },
    Density { folder: "mipmap-hdpi", edge: 72 },
    Density { folder: "mipmap-xhdpi", edge: 96 },
    Density { folder: "mipmap-xxhdpi", edge: 144 },
    Density { folder: "mipmap-xxxhdpi", edge: 192 },
];

/// `<project>/ios/Runner/Assets.xcassets/AppIcon.appiconset`
pub fn ios_appiconset_dir(project: &Path) -> PathBuf {
    project.join(IOS_APPICONSET.iter().collect::<PathBuf>())
}

/// `<project>/android/app/src/main/res`
pub fn android_res_dir(project: &Path) -> PathBuf {
    project.join(ANDROID_RES.iter().collect::<PathBuf>())
}
