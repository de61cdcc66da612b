//! Writes iOS and Android launcher icons into a Flutter project from one
//! high resolution source image.

pub mod contents_json;
pub mod error;
pub mod icon_gen;
pub mod sizes;
pub mod validate;
pub mod verify;

pub use error::InputError;
pub use icon_gen::{
    generate_android_icons, generate_icons, generate_ios_icons, Args, GenerationReport, Outcome,
    SkipReason,
};
pub use validate::resolution_ok;
