//! Resolved generation options.
//!
//! [`GenerationOptions`] is built once per run from an already merged
//! [`IconsetConfig`](crate::config::IconsetConfig) and is read-only afterwards.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use image::ImageFormat;
use palette::Srgb;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::IconsetConfig;
use crate::error::{Error, Result};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color pattern"));

/// Returns true if `value` is a `#RRGGBB` color literal.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

// ============================================================================
// Platform
// ============================================================================

/// A native platform the generator can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Android => f.write_str("Android"),
            Self::Ios => f.write_str("iOS"),
        }
    }
}

/// How a platform was requested in the configuration record.
///
/// Accepts either a flag or a custom icon name:
///
/// ```json
/// { "android": true, "ios": "AppIconBeta" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum PlatformToggle {
    Enabled(bool),
    Named(String),
}

impl PlatformToggle {
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Enabled(enabled) => *enabled,
            Self::Named(_) => true,
        }
    }

    pub fn custom_name(&self) -> Option<&str> {
        match self {
            Self::Enabled(_) => None,
            Self::Named(name) => Some(name.as_str()),
        }
    }
}

/// Whether a platform runs, and under which icon name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformSelection {
    pub enabled: bool,
    pub custom_name: Option<String>,
}

impl From<&PlatformToggle> for PlatformSelection {
    fn from(toggle: &PlatformToggle) -> Self {
        Self {
            enabled: toggle.is_enabled(),
            custom_name: toggle.custom_name().map(str::to_owned),
        }
    }
}

// ============================================================================
// Adaptive background
// ============================================================================

/// Background layer of an Android adaptive icon.
#[derive(Debug, Clone, PartialEq)]
pub enum AdaptiveBackground {
    /// Flat color, written to the colors resource file.
    Color(Srgb<u8>),
    /// Raster image, resized into every adaptive density bucket.
    Image(PathBuf),
}

impl AdaptiveBackground {
    /// Classifies a configured background value.
    ///
    /// `#RRGGBB` literals become colors; values whose extension names a raster
    /// format become images. Anything else is rejected.
    pub fn parse(value: &str) -> Result<Self> {
        if is_hex_color(value) {
            return Srgb::<u8>::from_str(value)
                .map(Self::Color)
                .map_err(|_| Error::InvalidAdaptiveBackground(value.to_owned()));
        }

        match ImageFormat::from_path(value) {
            Ok(ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::WebP) => {
                Ok(Self::Image(PathBuf::from(value)))
            }
            _ => Err(Error::InvalidAdaptiveBackground(value.to_owned())),
        }
    }
}

// ============================================================================
// GenerationOptions
// ============================================================================

/// Everything a run needs, with defaults applied and paths made absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Project root every relative path is resolved against.
    pub context: PathBuf,
    pub image_path: Option<PathBuf>,
    pub image_path_android: Option<PathBuf>,
    pub image_path_ios: Option<PathBuf>,
    pub android: PlatformSelection,
    pub ios: PlatformSelection,
    /// Android build flavor, also used to name the iOS catalog.
    pub flavor: Option<String>,
    /// Explicit iOS project/group name.
    pub group: Option<String>,
    /// Either a `#RRGGBB` literal or an absolute image path.
    pub adaptive_background: Option<String>,
    pub adaptive_foreground: Option<PathBuf>,
    pub disable_launcher_icon: bool,
}

impl GenerationOptions {
    /// Applies defaulting and path normalization to a merged config record.
    ///
    /// Both platforms are enabled when neither was requested.
    pub fn resolve(config: IconsetConfig, context: impl Into<PathBuf>) -> Self {
        let context = context.into();

        let mut android = config
            .android
            .as_ref()
            .map(PlatformSelection::from)
            .unwrap_or_default();
        let mut ios = config
            .ios
            .as_ref()
            .map(PlatformSelection::from)
            .unwrap_or_default();

        if !android.enabled && !ios.enabled {
            android.enabled = true;
            ios.enabled = true;
        }

        let resolve = |path: Option<PathBuf>| path.map(|p| context.join(p));

        Self {
            image_path: resolve(config.image_path),
            image_path_android: resolve(config.image_path_android),
            image_path_ios: resolve(config.image_path_ios),
            android,
            ios,
            flavor: config.flavor,
            group: config.group,
            adaptive_background: config
                .adaptive_icon_background
                .map(|value| resolve_unless_color(&context, value)),
            adaptive_foreground: resolve(config.adaptive_icon_foreground),
            disable_launcher_icon: config.disable_launcher_icon.unwrap_or(false),
            context,
        }
    }

    pub fn is_enabled(&self, platform: Platform) -> bool {
        match platform {
            Platform::Android => self.android.enabled,
            Platform::Ios => self.ios.enabled,
        }
    }

    /// Source image for a platform: its override if set, else the shared one.
    pub fn image_for(&self, platform: Platform) -> Result<&Path> {
        let specific = match platform {
            Platform::Android => self.image_path_android.as_deref(),
            Platform::Ios => self.image_path_ios.as_deref(),
        };

        specific
            .or(self.image_path.as_deref())
            .ok_or(Error::MissingImagePath(platform))
    }
}

fn resolve_unless_color(context: &Path, value: String) -> String {
    if is_hex_color(&value) {
        value
    } else {
        context.join(value).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_literals() {
        assert!(is_hex_color("#ffffff"));
        assert!(is_hex_color("#1A2b3C"));
        assert!(!is_hex_color("ffffff"));
        assert!(!is_hex_color("#fff"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color("assets/bg.png"));
    }

    #[test]
    fn adaptive_background_color() {
        let background = AdaptiveBackground::parse("#FF8000").unwrap();
        assert_eq!(background, AdaptiveBackground::Color(Srgb::new(255, 128, 0)));
    }

    #[test]
    fn adaptive_background_image() {
        assert_eq!(
            AdaptiveBackground::parse("/project/assets/bg.png").unwrap(),
            AdaptiveBackground::Image(PathBuf::from("/project/assets/bg.png"))
        );
        assert!(matches!(
            AdaptiveBackground::parse("bg.jpeg").unwrap(),
            AdaptiveBackground::Image(_)
        ));
    }

    #[test]
    fn adaptive_background_rejects_unknown_values() {
        assert!(matches!(
            AdaptiveBackground::parse("notes.txt"),
            Err(Error::InvalidAdaptiveBackground(_))
        ));
        assert!(AdaptiveBackground::parse("red").is_err());
    }

    #[test]
    fn both_platforms_enabled_by_default() {
        let options = GenerationOptions::resolve(IconsetConfig::default(), "/project");
        assert!(options.android.enabled);
        assert!(options.ios.enabled);
    }

    #[test]
    fn explicit_platform_disables_the_other() {
        let config = IconsetConfig {
            android: Some(PlatformToggle::Named("ic_beta".into())),
            ..Default::default()
        };
        let options = GenerationOptions::resolve(config, "/project");
        assert!(options.android.enabled);
        assert_eq!(options.android.custom_name.as_deref(), Some("ic_beta"));
        assert!(!options.ios.enabled);
    }

    #[test]
    fn paths_are_resolved_against_context_but_colors_are_kept() {
        let config = IconsetConfig {
            image_path: Some("assets/icon.png".into()),
            adaptive_icon_background: Some("#000000".into()),
            adaptive_icon_foreground: Some("assets/fg.png".into()),
            ..Default::default()
        };
        let options = GenerationOptions::resolve(config, "/project");
        assert_eq!(
            options.image_path.as_deref(),
            Some(Path::new("/project/assets/icon.png"))
        );
        assert_eq!(options.adaptive_background.as_deref(), Some("#000000"));
        assert_eq!(
            options.adaptive_foreground.as_deref(),
            Some(Path::new("/project/assets/fg.png"))
        );
    }

    #[test]
    fn background_image_path_is_resolved() {
        let config = IconsetConfig {
            adaptive_icon_background: Some("assets/bg.png".into()),
            ..Default::default()
        };
        let options = GenerationOptions::resolve(config, "/project");
        assert_eq!(
            options.adaptive_background.as_deref(),
            Some("/project/assets/bg.png")
        );
    }

    #[test]
    fn absolute_paths_are_untouched() {
        let config = IconsetConfig {
            image_path: Some("/elsewhere/icon.png".into()),
            ..Default::default()
        };
        let options = GenerationOptions::resolve(config, "/project");
        assert_eq!(
            options.image_path.as_deref(),
            Some(Path::new("/elsewhere/icon.png"))
        );
    }

    #[test]
    fn platform_image_override_wins() {
        let config = IconsetConfig {
            image_path: Some("icon.png".into()),
            image_path_ios: Some("ios.png".into()),
            ..Default::default()
        };
        let options = GenerationOptions::resolve(config, "/p");
        assert_eq!(options.image_for(Platform::Ios).unwrap(), Path::new("/p/ios.png"));
        assert_eq!(
            options.image_for(Platform::Android).unwrap(),
            Path::new("/p/icon.png")
        );
    }

    #[test]
    fn missing_image_path_is_a_configuration_error() {
        let options = GenerationOptions::resolve(IconsetConfig::default(), "/p");
        let err = options.image_for(Platform::Android).unwrap_err();
        assert!(matches!(err, Error::MissingImagePath(Platform::Android)));
    }
}
