use std::path::PathBuf;
use thiserror::Error;

/// Problems with the command line inputs. Any of these stops the run before
/// a single icon is written.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("flutter project directory does not exist: {}", .0.display())]
    MissingProject(PathBuf),

    #[error("failed to decode {}", .path.display())]
    Undecodable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image resolution must be at least {min}x{min} (got {width}x{height})")]
    TooSmall { width: u32, height: u32, min: u32 },
}
