//! Error types shared by every generator.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::options::Platform;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can abort icon generation for a platform.
///
/// Missing optional native files (the Android manifest, the Xcode project file)
/// are not represented here: generators log those as skipped steps and carry on.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "invalid Android icon name {0:?}: only lowercase letters, digits and '_' are allowed (e.g. \"ic_new_icon\")"
    )]
    InvalidIconName(String),

    #[error("no source image path was provided for {0}")]
    MissingImagePath(Platform),

    #[error(
        "adaptive icon background {0:?} is neither a #RRGGBB color nor a png/jpeg/webp image"
    )]
    InvalidAdaptiveBackground(String),

    #[error("no iOS project directory found at {}", .0.display())]
    IosProjectNotFound(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error at {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to render rounded corner mask at {0}px")]
    Mask(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn image(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true for errors caused by the caller's settings rather than the
    /// filesystem or the image codec.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidIconName(_)
                | Self::MissingImagePath(_)
                | Self::InvalidAdaptiveBackground(_)
                | Self::Config(_)
        )
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
