//! Per-platform icon catalogs.
//!
//! Every generated file is derived from one of the static tables below. The
//! generators never hard-code a size of their own; they iterate these tables.

// ============================================================================
// Android
// ============================================================================

/// A density-qualified Android icon output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidIcon {
    /// Density bucket name (`mdpi`, `hdpi`, ...).
    pub density: &'static str,
    /// Resource subdirectory the file is written into.
    pub directory: &'static str,
    /// Edge length of the square output in pixels.
    pub size: u32,
}

impl AndroidIcon {
    const fn new(density: &'static str, directory: &'static str, size: u32) -> Self {
        Self {
            density,
            directory,
            size,
        }
    }
}

/// Standard and round launcher icons, one per density bucket.
pub const ANDROID_LAUNCHER_ICONS: &[AndroidIcon] = &[
    AndroidIcon::new("mdpi", "mipmap-mdpi", 48),
    AndroidIcon::new("hdpi", "mipmap-hdpi", 72),
    AndroidIcon::new("xhdpi", "mipmap-xhdpi", 96),
    AndroidIcon::new("xxhdpi", "mipmap-xxhdpi", 144),
    AndroidIcon::new("xxxhdpi", "mipmap-xxxhdpi", 192),
];

/// Adaptive icon layers (foreground and raster background).
///
/// Layers are 108dp with the visible 72dp safe zone in the middle, hence the
/// 2.25x factor over the launcher sizes.
pub const ANDROID_ADAPTIVE_ICONS: &[AndroidIcon] = &[
    AndroidIcon::new("mdpi", "mipmap-mdpi", 108),
    AndroidIcon::new("hdpi", "mipmap-hdpi", 162),
    AndroidIcon::new("xhdpi", "mipmap-xhdpi", 216),
    AndroidIcon::new("xxhdpi", "mipmap-xxhdpi", 324),
    AndroidIcon::new("xxxhdpi", "mipmap-xxxhdpi", 432),
];

/// Edge length of the Play Store listing icon.
pub const ANDROID_STORE_ICON_SIZE: u32 = 512;

/// File name of the Play Store listing icon, written at the resource root.
pub const ANDROID_STORE_ICON_FILE: &str = "playstore-icon.png";

// ============================================================================
// iOS
// ============================================================================

/// Device family an iOS icon entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Idiom {
    Iphone,
    Ipad,
    IosMarketing,
}

impl Idiom {
    /// The value used for `idiom` in an asset catalog descriptor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iphone => "iphone",
            Self::Ipad => "ipad",
            Self::IosMarketing => "ios-marketing",
        }
    }
}

/// One entry of an iOS app icon set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IosIcon {
    pub idiom: Idiom,
    /// Logical size in points, as written in the descriptor (`"83.5x83.5"`).
    pub points: &'static str,
    /// Display scale factor (1, 2 or 3).
    pub scale: u8,
    /// Edge length of the square output in pixels.
    pub size: u32,
    /// Appended to the icon name to build the file name.
    pub suffix: &'static str,
}

impl IosIcon {
    const fn new(
        idiom: Idiom,
        points: &'static str,
        scale: u8,
        size: u32,
        suffix: &'static str,
    ) -> Self {
        Self {
            idiom,
            points,
            scale,
            size,
            suffix,
        }
    }

    /// Scale as written in the descriptor (`"2x"`).
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }

    /// File name for this entry given the icon name prefix.
    pub fn file_name(&self, icon_name: &str) -> String {
        format!("{icon_name}{}.png", self.suffix)
    }
}

/// Every image an `AppIcon.appiconset` needs for iPhone, iPad and the App Store.
pub const IOS_ICONS: &[IosIcon] = &[
    IosIcon::new(Idiom::Iphone, "20x20", 2, 40, "-20x20@2x"),
    IosIcon::new(Idiom::Iphone, "20x20", 3, 60, "-20x20@3x"),
    IosIcon::new(Idiom::Iphone, "29x29", 1, 29, "-29x29@1x"),
    IosIcon::new(Idiom::Iphone, "29x29", 2, 58, "-29x29@2x"),
    IosIcon::new(Idiom::Iphone, "29x29", 3, 87, "-29x29@3x"),
    IosIcon::new(Idiom::Iphone, "40x40", 2, 80, "-40x40@2x"),
    IosIcon::new(Idiom::Iphone, "40x40", 3, 120, "-40x40@3x"),
    IosIcon::new(Idiom::Iphone, "60x60", 2, 120, "-60x60@2x"),
    IosIcon::new(Idiom::Iphone, "60x60", 3, 180, "-60x60@3x"),
    IosIcon::new(Idiom::Ipad, "20x20", 1, 20, "-20x20@1x~ipad"),
    IosIcon::new(Idiom::Ipad, "20x20", 2, 40, "-20x20@2x~ipad"),
    IosIcon::new(Idiom::Ipad, "29x29", 1, 29, "-29x29@1x~ipad"),
    IosIcon::new(Idiom::Ipad, "29x29", 2, 58, "-29x29@2x~ipad"),
    IosIcon::new(Idiom::Ipad, "40x40", 1, 40, "-40x40@1x~ipad"),
    IosIcon::new(Idiom::Ipad, "40x40", 2, 80, "-40x40@2x~ipad"),
    IosIcon::new(Idiom::Ipad, "76x76", 1, 76, "-76x76@1x~ipad"),
    IosIcon::new(Idiom::Ipad, "76x76", 2, 152, "-76x76@2x~ipad"),
    IosIcon::new(Idiom::Ipad, "83.5x83.5", 2, 167, "-83.5x83.5@2x~ipad"),
    IosIcon::new(Idiom::IosMarketing, "1024x1024", 1, 1024, "-1024x1024@1x"),
];
