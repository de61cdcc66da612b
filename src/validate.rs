use crate::error::InputError;
use image::DynamicImage;
use std::path::Path;

/// Returns `true` when `path` decodes as an image whose width and height are
/// both at least `min_edge`. Decode failures of any kind yield `false`.
pub fn resolution_ok(path: &Path, min_edge: u32) -> bool {
    check_resolution(path, min_edge).is_ok()
}

/// Decodes `path` and checks both axes against `min_edge`, handing back the
/// decoded image so callers don't need to read the file twice.
///
/// Non-square images pass as long as each axis is large enough; they get
/// stretched when resized to square icons.
pub fn check_resolution(path: &Path, min_edge: u32) -> Result<DynamicImage, InputError> {
    let source = image::open(path).map_err(|source| InputError::Undecodable {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = (source.width(), source.height());
    if width < min_edge || height < min_edge {
        return Err(InputError::TooSmall {
            width,
            height,
            min: min_edge,
        });
    }

    Ok(source)
}
