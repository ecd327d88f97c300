//! iOS app icon set generation.
//!
//! Writes `ios/<project>/Images.xcassets/<catalog>.appiconset/` with one PNG per
//! catalog entry and a regenerated `Contents.json`, then points the Xcode
//! project's build configurations at the catalog.

pub mod contents;
pub mod pbxproj;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::catalog::IOS_ICONS;
use crate::error::{Error, Result};
use crate::files::write_text;
use crate::options::GenerationOptions;
use crate::paths::ProjectPaths;
use crate::raster::{self, SourceImage};

use contents::ContentsFile;

/// File name prefix of the generated images when no custom name is given.
pub const DEFAULT_ICON_NAME: &str = "Icon-App";

/// Asset catalog icon set name when no custom name or flavor is given.
pub const DEFAULT_CATALOG_NAME: &str = "AppIcon";

/// Icon file prefix and icon set name for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconNames {
    pub icon_name: String,
    pub catalog_name: String,
}

/// Generates the iOS app icon set for one project.
#[derive(Debug, Clone)]
pub struct IosGenerator {
    paths: ProjectPaths,
    flavor: Option<String>,
    custom_name: Option<String>,
    group: Option<String>,
    disable_launcher_icon: bool,
}

impl IosGenerator {
    pub fn new(paths: ProjectPaths, options: &GenerationOptions) -> Self {
        Self {
            paths,
            flavor: options.flavor.clone(),
            custom_name: options.ios.custom_name.clone(),
            group: options.group.clone(),
            disable_launcher_icon: options.disable_launcher_icon,
        }
    }

    /// A flavor names the catalog (`AppIcon-<flavor>`) and keeps the default
    /// file prefix; otherwise a custom name is used for both.
    pub fn names(&self) -> IconNames {
        match (&self.flavor, &self.custom_name) {
            (Some(flavor), _) => IconNames {
                icon_name: DEFAULT_ICON_NAME.to_owned(),
                catalog_name: format!("{DEFAULT_CATALOG_NAME}-{flavor}"),
            },
            (None, Some(name)) => IconNames {
                icon_name: name.clone(),
                catalog_name: name.clone(),
            },
            (None, None) => IconNames {
                icon_name: DEFAULT_ICON_NAME.to_owned(),
                catalog_name: DEFAULT_CATALOG_NAME.to_owned(),
            },
        }
    }

    pub async fn create_ios_icons(&self, image_path: &Path) -> Result<()> {
        let project_name = self
            .paths
            .project_name(self.group.as_deref())
            .ok_or_else(|| Error::IosProjectNotFound(self.paths.ios_dir()))?;

        let IconNames {
            icon_name,
            catalog_name,
        } = self.names();
        info!("Generating {catalog_name} icon set for iOS project {project_name:?}");

        let source = Arc::new(SourceImage::load(image_path).await?);
        let icon_folder = self.paths.icon_set_folder(&project_name, &catalog_name);

        let jobs = IOS_ICONS.iter().map(|icon| {
            let path = icon_folder.join(icon.file_name(&icon_name));
            let size = icon.size;
            let src = source.clone();
            move || raster::save_png(src.resize_opaque(size), &path)
        });
        raster::render_all(jobs).await?;

        if !self.disable_launcher_icon {
            pbxproj::update_build_config(&self.paths.build_config_file(&project_name), &catalog_name)
                .await?;
        }

        let contents = ContentsFile::for_icon(&icon_name).to_json_pretty()?;
        write_text(&icon_folder.join("Contents.json"), &contents).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconsetConfig;
    use crate::options::PlatformToggle;
    use image::{ColorType, DynamicImage, Rgba, RgbaImage};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PROJECT: &str = "/* Begin XCBuildConfiguration section */
\t\t13B07F941A680F5B00A75B9A /* Debug */ = {
\t\t\tbuildSettings = {
\t\t\t\tASSETCATALOG_COMPILER_APPICON_NAME = AppIcon;
\t\t\t};
\t\t};
/* End XCBuildConfiguration section */
";

    fn write_source(dir: &Path) -> PathBuf {
        let path = dir.join("icon.png");
        let image = RgbaImage::from_pixel(1024, 1024, Rgba([255, 200, 0, 128]));
        DynamicImage::ImageRgba8(image).save(&path).unwrap();
        path
    }

    fn generator(root: &Path, config: IconsetConfig) -> IosGenerator {
        let options = GenerationOptions::resolve(config, root);
        IosGenerator::new(ProjectPaths::new(root), &options)
    }

    fn ios_project(name: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("ios").join(name).join("Images.xcassets"))
            .unwrap();
        let xcodeproj = temp_dir.path().join("ios").join(format!("{name}.xcodeproj"));
        fs::create_dir_all(&xcodeproj).unwrap();
        fs::write(xcodeproj.join("project.pbxproj"), PROJECT).unwrap();
        temp_dir
    }

    #[test]
    fn name_resolution() {
        let root = Path::new("/project");
        assert_eq!(
            generator(root, IconsetConfig::default()).names(),
            IconNames {
                icon_name: "Icon-App".into(),
                catalog_name: "AppIcon".into()
            }
        );

        let custom = IconsetConfig {
            ios: Some(PlatformToggle::Named("BetaIcon".into())),
            ..Default::default()
        };
        assert_eq!(
            generator(root, custom.clone()).names(),
            IconNames {
                icon_name: "BetaIcon".into(),
                catalog_name: "BetaIcon".into()
            }
        );

        let flavored = IconsetConfig {
            flavor: Some("staging".into()),
            ..custom
        };
        assert_eq!(
            generator(root, flavored).names(),
            IconNames {
                icon_name: "Icon-App".into(),
                catalog_name: "AppIcon-staging".into()
            }
        );
    }

    #[tokio::test]
    async fn generates_icon_set_and_patches_project() {
        let temp_dir = ios_project("MyApp");
        let root = temp_dir.path();
        let source = write_source(root);

        generator(root, IconsetConfig::default())
            .create_ios_icons(&source)
            .await
            .unwrap();

        let paths = ProjectPaths::new(root);
        let folder = paths.icon_set_folder("MyApp", "AppIcon");
        for icon in IOS_ICONS {
            let path = folder.join(icon.file_name("Icon-App"));
            let image = image::open(&path).unwrap();
            assert_eq!((image.width(), image.height()), (icon.size, icon.size));
            assert_eq!(image.color(), ColorType::Rgb8, "{}", path.display());
        }

        let contents: ContentsFile =
            serde_json::from_str(&fs::read_to_string(folder.join("Contents.json")).unwrap())
                .unwrap();
        assert_eq!(contents, ContentsFile::for_icon("Icon-App"));

        let project = fs::read_to_string(paths.build_config_file("MyApp")).unwrap();
        assert!(project.contains("ASSETCATALOG_COMPILER_APPICON_NAME = AppIcon;"));
    }

    #[tokio::test]
    async fn flavor_catalog_is_written_and_referenced() {
        let temp_dir = ios_project("MyApp");
        let root = temp_dir.path();
        let source = write_source(root);

        let config = IconsetConfig {
            flavor: Some("beta".into()),
            ..Default::default()
        };
        generator(root, config).create_ios_icons(&source).await.unwrap();

        let paths = ProjectPaths::new(root);
        let folder = paths.icon_set_folder("MyApp", "AppIcon-beta");
        assert!(folder.join("Icon-App-60x60@3x.png").is_file());
        assert!(folder.join("Contents.json").is_file());

        let project = fs::read_to_string(paths.build_config_file("MyApp")).unwrap();
        assert!(project.contains("ASSETCATALOG_COMPILER_APPICON_NAME = AppIcon-beta;"));
    }

    #[tokio::test]
    async fn disabled_launcher_patch_keeps_project_file() {
        let temp_dir = ios_project("MyApp");
        let root = temp_dir.path();
        let source = write_source(root);

        let config = IconsetConfig {
            ios: Some(PlatformToggle::Named("Other".into())),
            disable_launcher_icon: Some(true),
            ..Default::default()
        };
        generator(root, config).create_ios_icons(&source).await.unwrap();

        let paths = ProjectPaths::new(root);
        assert_eq!(
            fs::read_to_string(paths.build_config_file("MyApp")).unwrap(),
            PROJECT
        );
        assert!(paths.icon_set_folder("MyApp", "Other").join("Contents.json").is_file());
    }

    #[tokio::test]
    async fn explicit_group_without_project_file_still_generates() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let source = write_source(root);

        let config = IconsetConfig {
            group: Some("Fresh".into()),
            ..Default::default()
        };
        generator(root, config).create_ios_icons(&source).await.unwrap();

        let folder = ProjectPaths::new(root).icon_set_folder("Fresh", "AppIcon");
        assert!(folder.join("Contents.json").is_file());
    }

    #[tokio::test]
    async fn missing_ios_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_source(temp_dir.path());

        let err = generator(temp_dir.path(), IconsetConfig::default())
            .create_ios_icons(&source)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::IosProjectNotFound(_)));
    }
}
