//! Android launcher, round, store and adaptive icon generation.
//!
//! Outputs go under `android/app/src/<flavor or main>/res`:
//!
//! - `mipmap-<density>/<name>.png` and `mipmap-<density>/<name>_round.png`
//! - `playstore-icon.png`
//! - adaptive layers in `mipmap-<density>/` and a descriptor in `mipmap-anydpi-v26/`
//! - the `ic_launcher_background` entry of `values/colors.xml` for flat backgrounds

pub mod manifest;
pub mod resources;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::{
    ANDROID_ADAPTIVE_ICONS, ANDROID_LAUNCHER_ICONS, ANDROID_STORE_ICON_FILE,
    ANDROID_STORE_ICON_SIZE,
};
use crate::error::{Error, Result};
use crate::files::{read_optional, write_text};
use crate::options::{AdaptiveBackground, GenerationOptions};
use crate::paths::ProjectPaths;
use crate::raster::{self, SourceImage};

use resources::{BACKGROUND_COLOR_NAME, COLORS_TEMPLATE, DEFAULT_ICON_NAME};

/// Generates every Android icon asset for one project.
#[derive(Debug, Clone)]
pub struct AndroidGenerator {
    paths: ProjectPaths,
    flavor: Option<String>,
    custom_name: Option<String>,
    disable_launcher_icon: bool,
}

impl AndroidGenerator {
    /// Creates a generator, rejecting custom names that are not valid
    /// Android resource names.
    pub fn new(paths: ProjectPaths, options: &GenerationOptions) -> Result<Self> {
        let custom_name = options.android.custom_name.clone();

        if let Some(name) = &custom_name {
            if !resources::is_valid_icon_name(name) {
                return Err(Error::InvalidIconName(name.clone()));
            }
        }

        Ok(Self {
            paths,
            flavor: options.flavor.clone(),
            custom_name,
            disable_launcher_icon: options.disable_launcher_icon,
        })
    }

    /// Resource name of the launcher icon.
    pub fn icon_name(&self) -> &str {
        self.custom_name.as_deref().unwrap_or(DEFAULT_ICON_NAME)
    }

    fn resource_root(&self) -> PathBuf {
        self.paths.resource_root(self.flavor.as_deref())
    }

    /// Produces standard and round launcher icons for every density, plus the
    /// store icon, and points the manifest at them.
    pub async fn create_android_icons(&self, image_path: &Path) -> Result<()> {
        let icon_name = self.icon_name().to_owned();
        if self.custom_name.is_some() {
            info!("Adding new Android launcher icon {icon_name:?}");
        } else {
            info!("Replacing the default Android launcher icon");
        }

        let source = Arc::new(SourceImage::load(image_path).await?);
        let res_dir = self.resource_root();

        if !self.disable_launcher_icon {
            manifest::update_manifest(&self.paths.android_manifest(), &icon_name).await?;
        }

        let round_icon_name = resources::round_name(&icon_name);
        let mut jobs: Vec<Box<dyn FnOnce() -> Result<()> + Send>> = Vec::new();

        for icon in ANDROID_LAUNCHER_ICONS {
            let dir = res_dir.join(icon.directory);
            let size = icon.size;

            let standard = dir.join(format!("{icon_name}.png"));
            let src = source.clone();
            jobs.push(Box::new(move || raster::save_png(src.resize(size), &standard)));

            let round = dir.join(format!("{round_icon_name}.png"));
            let src = source.clone();
            jobs.push(Box::new(move || {
                raster::save_png(src.resize_rounded(size)?, &round)
            }));
        }

        let store = res_dir.join(ANDROID_STORE_ICON_FILE);
        let src = source.clone();
        jobs.push(Box::new(move || {
            raster::save_png(src.resize(ANDROID_STORE_ICON_SIZE), &store)
        }));

        raster::render_all(jobs).await
    }

    /// Produces adaptive icon layers and their descriptor.
    ///
    /// `background` is either a `#RRGGBB` color, written to the colors
    /// resource file exactly as given, or a raster image path, rendered like
    /// the foreground.
    pub async fn create_adaptive_icons(&self, background: &str, foreground: &Path) -> Result<()> {
        let literal = background;
        let background = AdaptiveBackground::parse(literal)?;
        let icon_name = self.icon_name().to_owned();

        info!("Generating adaptive icon layers");

        let foreground_source = Arc::new(SourceImage::load(foreground).await?);
        self.render_adaptive_layer(foreground_source, &resources::foreground_name(&icon_name))
            .await?;

        let descriptor = match background {
            AdaptiveBackground::Image(path) => {
                let background_source = Arc::new(SourceImage::load(&path).await?);
                self.render_adaptive_layer(
                    background_source,
                    &resources::background_name(&icon_name),
                )
                .await?;
                resources::adaptive_icon_with_image(&icon_name)
            }
            AdaptiveBackground::Color(_) => {
                self.update_colors_file(literal).await?;
                resources::adaptive_icon_with_color(&icon_name)
            }
        };

        let dir = self.paths.adaptive_xml_folder(self.flavor.as_deref());
        write_text(&dir.join(format!("{icon_name}.xml")), &descriptor).await
    }

    async fn render_adaptive_layer(&self, source: Arc<SourceImage>, layer_name: &str) -> Result<()> {
        let res_dir = self.resource_root();

        let jobs = ANDROID_ADAPTIVE_ICONS.iter().map(|icon| {
            let path = res_dir.join(icon.directory).join(format!("{layer_name}.png"));
            let size = icon.size;
            let src = source.clone();
            move || raster::save_png(src.resize(size), &path)
        });

        raster::render_all(jobs).await
    }

    async fn update_colors_file(&self, color: &str) -> Result<()> {
        let path = self.paths.colors_file(self.flavor.as_deref());

        let colors = match read_optional(&path).await? {
            Some(colors) => {
                info!("Updating colors.xml with the adaptive icon background color");
                colors
            }
            None => {
                warn!("No colors.xml found in the Android project; creating one");
                COLORS_TEMPLATE.to_owned()
            }
        };

        let updated = resources::upsert_color(&colors, BACKGROUND_COLOR_NAME, color);
        write_text(&path, &updated).await
    }
}
