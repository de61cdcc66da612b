use crate::contents_json::{ContentsFile, CONTENTS_JSON};
use crate::error::InputError;
use crate::sizes::{
    android_res_dir, ios_appiconset_dir, Density, ANDROID_DENSITIES, IOS_ICONS, LAUNCHER_ICON,
    MIN_SOURCE_EDGE, ROUND_LAUNCHER_ICON,
};
use crate::validate::check_resolution;
use anyhow::{anyhow, Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::FilterType,
    ColorType, DynamicImage, ImageEncoder,
};
use std::{
    fmt,
    io::Write,
    path::{Path, PathBuf},
};

/// Cubic resampling, applied to the whole uncropped source.
const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

#[derive(Debug, Clone)]
pub struct Args {
    pub input: PathBuf,
    pub project: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingDirectory(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingDirectory(dir) => write!(f, "{} not found", dir.display()),
        }
    }
}

/// Result of one platform or one density folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Generated(T),
    Skipped(SkipReason),
}

impl<T> Outcome<T> {
    pub fn generated(&self) -> Option<&T> {
        match self {
            Outcome::Generated(value) => Some(value),
            Outcome::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }
}

/// Files written into a single mipmap folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityIcons {
    pub launcher: PathBuf,
    /// Only set when the folder already had a round icon.
    pub round: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityReport {
    pub density: Density,
    pub outcome: Outcome<DensityIcons>,
}

pub type IosOutcome = Outcome<Vec<PathBuf>>;
pub type AndroidOutcome = Outcome<Vec<DensityReport>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub ios: IosOutcome,
    pub android: AndroidOutcome,
}

/// Validates the inputs, then writes iOS and Android icons into the project.
///
/// Input problems surface as [`InputError`] before anything is written. A
/// platform whose destination directory is missing is skipped. Both platforms
/// are always attempted; a failed write on either one fails the run once the
/// other has finished.
pub fn generate_icons(args: &Args) -> Result<GenerationReport> {
    if !args.input.exists() {
        return Err(InputError::MissingInput(args.input.clone()).into());
    }
    if !args.project.is_dir() {
        return Err(InputError::MissingProject(args.project.clone()).into());
    }

    let source = check_resolution(&args.input, MIN_SOURCE_EDGE)?;
    if source.width() != source.height() {
        log::warn!(
            "Source image is {}x{}; icons will be stretched to square",
            source.width(),
            source.height()
        );
    }

    let ios = emit_ios_icons(&source, &args.project).context("iOS icon generation failed");
    let android =
        emit_android_icons(&source, &args.project).context("Android icon generation failed");

    match (ios, android) {
        (Ok(ios), Ok(android)) => Ok(GenerationReport { ios, android }),
        (Err(ios_err), Err(android_err)) => Err(anyhow!("{ios_err:#}\n{android_err:#}")),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
    }
}

/// Decodes `input` and writes the iOS app icon set, unless the project has no
/// appiconset directory.
pub fn generate_ios_icons(input: &Path, project: &Path) -> Result<IosOutcome> {
    let ios_dir = ios_appiconset_dir(project);
    if !ios_dir.is_dir() {
        return Ok(missing_destination(ios_dir, "iOS appicon"));
    }

    let source = load_image(input)?;
    emit_ios_icons(&source, project)
}

/// Decodes `input` and writes Android launcher icons into whichever density
/// folders the project has.
pub fn generate_android_icons(input: &Path, project: &Path) -> Result<AndroidOutcome> {
    let res_dir = android_res_dir(project);
    if !res_dir.is_dir() {
        return Ok(missing_destination(res_dir, "Android res"));
    }

    let source = load_image(input)?;
    emit_android_icons(&source, project)
}

/// Writes the 15 iOS icons from an already decoded source.
pub fn emit_ios_icons(source: &DynamicImage, project: &Path) -> Result<IosOutcome> {
    let ios_dir = ios_appiconset_dir(project);
    if !ios_dir.is_dir() {
        return Ok(missing_destination(ios_dir, "iOS appicon"));
    }

    let mut written = Vec::with_capacity(IOS_ICONS.len());
    for icon in IOS_ICONS {
        let resized = source.resize_exact(icon.edge, icon.edge, RESIZE_FILTER);
        let output_path = ios_dir.join(icon.filename);
        save_png(&resized, &output_path)?;
        log::debug!("Generated {} ({}x{})", icon.filename, icon.edge, icon.edge);
        written.push(output_path);
    }

    check_asset_catalog(&ios_dir);

    println!("✓ Generated {} iOS icons", written.len());
    Ok(Outcome::Generated(written))
}

/// Writes Android launcher icons from an already decoded source.
pub fn emit_android_icons(source: &DynamicImage, project: &Path) -> Result<AndroidOutcome> {
    let res_dir = android_res_dir(project);
    if !res_dir.is_dir() {
        return Ok(missing_destination(res_dir, "Android res"));
    }

    let mut reports = Vec::with_capacity(ANDROID_DENSITIES.len());
    for density in ANDROID_DENSITIES {
        let mipmap_dir = res_dir.join(density.folder);
        let outcome = if mipmap_dir.is_dir() {
            Outcome::Generated(write_density(source, &mipmap_dir, density.edge)?)
        } else {
            log::debug!("Skipping {}: folder not found", density.folder);
            Outcome::Skipped(SkipReason::MissingDirectory(mipmap_dir))
        };
        reports.push(DensityReport { density, outcome });
    }

    let generated = reports.iter().filter(|r| !r.outcome.is_skipped()).count();
    println!(
        "✓ Generated Android icons in {generated} of {} density folders",
        ANDROID_DENSITIES.len()
    );
    Ok(Outcome::Generated(reports))
}

/// Always writes `ic_launcher.png`; `ic_launcher_round.png` is only
/// overwritten when the folder already contains one.
fn write_density(source: &DynamicImage, mipmap_dir: &Path, edge: u32) -> Result<DensityIcons> {
    let round = mipmap_dir.join(ROUND_LAUNCHER_ICON);
    let round = round.is_file().then_some(round);

    let resized = source.resize_exact(edge, edge, RESIZE_FILTER);
    let png = encode_png(&resized)?;

    let launcher = mipmap_dir.join(LAUNCHER_ICON);
    write_file(&launcher, &png)?;
    log::debug!("Generated {}", launcher.display());

    if let Some(round) = &round {
        write_file(round, &png)?;
        log::debug!("Refreshed {}", round.display());
    }

    Ok(DensityIcons { launcher, round })
}

fn missing_destination<T>(dir: PathBuf, what: &str) -> Outcome<T> {
    println!("{what} directory not found, skipping: {}", dir.display());
    Outcome::Skipped(SkipReason::MissingDirectory(dir))
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("Failed to load image {}", path.display()))
}

/// Warns about generated icons that the asset catalog doesn't list.
fn check_asset_catalog(ios_dir: &Path) {
    match ContentsFile::load(ios_dir) {
        Ok(Some(contents)) => {
            for icon in contents.unreferenced(&IOS_ICONS) {
                log::warn!(
                    "{} is not referenced by {CONTENTS_JSON}; Xcode will ignore it",
                    icon.filename
                );
            }
        }
        Ok(None) => log::warn!("No {CONTENTS_JSON} in {}", ios_dir.display()),
        Err(err) => log::warn!("{err:#}"),
    }
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let png = encode_png(image)?;
    write_file(path, &png)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let rgba = image.to_rgba8();
    let mut buf = Vec::new();
    write_png(rgba.as_raw(), &mut buf, rgba.width(), rgba.height())?;
    Ok(buf)
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image_data, width, height, ColorType::Rgba8)
        .context("Failed to encode PNG")?;
    Ok(())
}
