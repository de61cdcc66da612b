use image::{Rgba, RgbaImage};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const GENERATOR: &str = env!("CARGO_BIN_EXE_flutter-icon-gen");
const VERIFIER: &str = env!("CARGO_BIN_EXE_verify_icons");

/// Runs `flutter-icon-gen 2000x2000.png <project>` against a project that only
/// has the mdpi folder, and checks that exactly one icon comes out.
#[test]
fn test_android_mdpi_only_project() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source_path = temp_dir.path().join("source.png");
    create_gradient_image(&source_path, 2000, 2000);

    let project = temp_dir.path().join("app");
    let mdpi = project.join("android/app/src/main/res/mipmap-mdpi");
    fs::create_dir_all(&mdpi).unwrap();

    let output = run(GENERATOR, &[&source_path, &project]);
    assert_success(&output);
    assert!(stdout(&output).contains("all icons successfully generated."));

    assert_eq!(list_files(&project), vec![mdpi.join("ic_launcher.png")]);
    assert_eq!(
        image::image_dimensions(mdpi.join("ic_launcher.png")).unwrap(),
        (48, 48)
    );
    assert!(!project.join("ios").exists());
}

#[test]
fn test_full_project_then_verify() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source_path = temp_dir.path().join("source.png");
    create_gradient_image(&source_path, 1024, 1024);

    let project = temp_dir.path().join("app");
    let appiconset = project.join("ios/Runner/Assets.xcassets/AppIcon.appiconset");
    fs::create_dir_all(&appiconset).unwrap();
    let res = project.join("android/app/src/main/res");
    for density in ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"] {
        fs::create_dir_all(res.join(format!("mipmap-{density}"))).unwrap();
    }
    create_gradient_image(&res.join("mipmap-xxxhdpi/ic_launcher_round.png"), 3, 3);

    let output = run(GENERATOR, &[&source_path, &project]);
    assert_success(&output);

    let files = list_files(&project);
    assert_eq!(files.len(), 15 + 5 + 1);
    assert_eq!(
        image::image_dimensions(appiconset.join("Icon-App-83.5x83.5@2x.png")).unwrap(),
        (167, 167)
    );
    assert_eq!(
        image::image_dimensions(res.join("mipmap-xxxhdpi/ic_launcher_round.png")).unwrap(),
        (192, 192)
    );

    let output = run(VERIFIER, &[&project]);
    assert_success(&output);
    assert!(stdout(&output).contains("✓ 21 icons checked"));
}

#[test]
fn test_rejects_low_resolution_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source_path = temp_dir.path().join("narrow.png");
    create_gradient_image(&source_path, 800, 1200);

    let project = temp_dir.path().join("app");
    let mdpi = project.join("android/app/src/main/res/mipmap-mdpi");
    fs::create_dir_all(&mdpi).unwrap();

    let output = run(GENERATOR, &[&source_path, &project]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("image resolution must be at least 1024x1024"));
    assert!(list_files(&project).is_empty());
}

#[test]
fn test_rejects_undecodable_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source_path = temp_dir.path().join("broken.png");
    fs::write(&source_path, b"not an image").unwrap();

    let output = run(GENERATOR, &[source_path.as_path(), temp_dir.path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("failed to decode"));
}

#[test]
fn test_rejects_missing_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source_path = temp_dir.path().join("source.png");

    let output = run(GENERATOR, &[source_path.as_path(), temp_dir.path()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("input file does not exist"));

    create_gradient_image(&source_path, 16, 16);
    let output = run(GENERATOR, &[source_path.clone(), temp_dir.path().join("missing")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("flutter project directory does not exist"));
}

#[test]
fn test_wrong_argument_count() {
    for args in [vec![], vec!["only-one.png"], vec!["a.png", "b", "c"]] {
        let output = Command::new(GENERATOR)
            .args(&args)
            .output()
            .expect("Failed to run flutter-icon-gen");

        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stdout(&output).starts_with("usage:"));
    }
}

#[test]
fn test_verify_icons_bad_arguments() {
    for args in [vec![], vec!["a", "b"]] {
        let output = Command::new(VERIFIER)
            .args(&args)
            .output()
            .expect("Failed to run verify_icons");

        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stdout(&output).starts_with("usage:"));
    }
}

fn run<S: AsRef<OsStr>>(binary: &str, args: &[S]) -> Output {
    Command::new(binary)
        .args(args)
        .output()
        .expect("Failed to run command")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("command failed");
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Every regular file below `dir`, sorted.
fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

/// Creates a gradient RGBA image and saves it as PNG
fn create_gradient_image(path: &Path, width: u32, height: u32) {
    let mut image = RgbaImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let red = (255.0 * x as f32 / width as f32) as u8;
        let green = (255.0 * y as f32 / height as f32) as u8;
        *pixel = Rgba([red, green, 128, 255]);
    }

    image.save(path).expect("Failed to save gradient image");
}
