//! iconset: launcher icon generation for React Native style mobile projects
//!
//! This crate renders a single square source image into the icon sets a
//! mobile project needs and points the native project files at them:
//!
//! - Android: legacy launcher, round and Play Store icons, adaptive icon
//!   layers, `AndroidManifest.xml` and `colors.xml` updates.
//! - iOS: an `.appiconset` asset catalog with its `Contents.json`, and the
//!   app icon build setting in `project.pbxproj`.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use iconset::{IconCreator, IconsetConfig, PlatformToggle};
//!
//! # async fn generate() -> iconset::Result<()> {
//! let overrides = IconsetConfig {
//!     image_path: Some("assets/icon.png".into()),
//!     android: Some(PlatformToggle::Named("ic_beta".into())),
//!     ..Default::default()
//! };
//!
//! // Settings from package.json, rc files and ICONSET_* variables are merged
//! // below the overrides.
//! let creator = IconCreator::for_project(Path::new("."), overrides)?;
//!
//! for report in creator.run().await {
//!     if let Err(err) = report.result {
//!         eprintln!("{}: {err}", report.platform);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! [`IconsetConfig`] is the serializable settings shape shared by every
//! configuration source. With the `jsonschema` feature enabled it also derives
//! a JSON schema for editor tooling.

pub mod android;
pub mod catalog;
pub mod ios;
pub mod raster;

mod config;
mod creator;
mod error;
mod files;
mod options;
mod paths;

pub use android::AndroidGenerator;
pub use config::IconsetConfig;
pub use creator::{IconCreator, PlatformReport};
pub use error::{Error, Result};
pub use ios::IosGenerator;
pub use options::{
    AdaptiveBackground, GenerationOptions, Platform, PlatformSelection, PlatformToggle,
    is_hex_color,
};
pub use paths::ProjectPaths;
pub use raster::SourceImage;
