//! Image rasterization: decoding the source once, resizing to exact square
//! sizes, rounding corners and flattening alpha.

pub mod mask;

use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// A decoded source image, shared by every output of a platform.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
}

impl SourceImage {
    /// Reads and decodes an image, guessing the format from its contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = ImageReader::open(path)
            .map_err(|e| Error::io(path, e))?
            .with_guessed_format()
            .map_err(|e| Error::io(path, e))?
            .decode()
            .map_err(|e| Error::image(path, e))?;

        debug!(
            "Decoded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    /// Decodes an image on the blocking pool.
    pub async fn load(path: &Path) -> Result<Self> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::open(path)).await?
    }

    /// Wraps an in-memory image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            path: PathBuf::new(),
            image,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resizes to exactly `size x size`.
    ///
    /// Non-square sources are scaled to cover the square and center-cropped.
    pub fn resize(&self, size: u32) -> RgbaImage {
        self.image
            .resize_to_fill(size, size, FilterType::Lanczos3)
            .into_rgba8()
    }

    /// Resizes to `size` and cuts the corners with the rounded mask.
    pub fn resize_rounded(&self, size: u32) -> Result<RgbaImage> {
        let mut image = self.resize(size);
        let mask = mask::render_mask(size)?;
        mask::apply_dest_in(&mut image, &mask);
        Ok(image)
    }

    /// Resizes to `size` with the alpha channel removed.
    pub fn resize_opaque(&self, size: u32) -> RgbImage {
        strip_alpha(self.resize(size))
    }
}

/// Runs blocking render jobs concurrently and waits for all of them.
///
/// Fails as soon as any job fails; no job depends on another's output.
pub async fn render_all<I, F>(jobs: I) -> Result<()>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<()> + Send + 'static,
{
    try_join_all(jobs.into_iter().map(|job| async move {
        let result: Result<()> = tokio::task::spawn_blocking(job).await?;
        result
    }))
    .await?;
    Ok(())
}

/// Drops the alpha channel, keeping each pixel's color as-is.
pub fn strip_alpha(image: RgbaImage) -> RgbImage {
    DynamicImage::ImageRgba8(image).into_rgb8()
}

/// Encodes `image` as PNG at `path`, creating parent directories as needed.
pub fn save_png(image: impl Into<DynamicImage>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    image
        .into()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::image(path, e))?;

    debug!("Wrote {}", path.display());
    Ok(())
}
