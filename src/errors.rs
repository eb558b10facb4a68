//! Error Types
//!
//! The main error type [`ArmatureError`] covers the failure modes of this
//! crate. Nothing here is fatal: the worst outcome of any error is a no-op
//! or a partially-defaulted data structure, and interactive callers simply
//! retry. Malformed numeric fields in scene/key files are deliberately not
//! errors — they default silently during parsing (see [`crate::scene::io`]).
//!
//! All public fallible APIs return [`Result`], an alias for
//! `std::result::Result<T, ArmatureError>`.

use thiserror::Error;

/// The main error type for the armature crate.
#[derive(Error, Debug)]
pub enum ArmatureError {
    /// File I/O error (a scene, key or frame file could not be opened or
    /// written).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame capture encoding error.
    #[error("Image encode error: {0}")]
    ImageEncode(String),
}

impl From<image::ImageError> for ArmatureError {
    fn from(err: image::ImageError) -> Self {
        ArmatureError::ImageEncode(err.to_string())
    }
}

/// Alias for `Result<T, ArmatureError>`.
pub type Result<T> = std::result::Result<T, ArmatureError>;
