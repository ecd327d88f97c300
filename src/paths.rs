//! Native project path resolution.
//!
//! Computes where each platform's build system expects resources, manifests
//! and asset catalogs to live. Nothing here writes to disk.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

const ANDROID_APP_SRC: &str = "android/app/src";
const ANDROID_MAIN_SOURCE_SET: &str = "main";
const ANDROID_ADAPTIVE_DIR: &str = "mipmap-anydpi-v26";
const ANDROID_COLORS_FILE: &str = "values/colors.xml";
const ANDROID_MANIFEST_FILE: &str = "AndroidManifest.xml";

const IOS_DIR: &str = "ios";
const IOS_ASSET_CATALOG: &str = "Images.xcassets";
const IOS_APP_DESCRIPTOR: &str = "app.json";

/// Used when an `ios/` directory exists but no project group can be found.
pub const IOS_FALLBACK_PROJECT_NAME: &str = "AppName";

/// Path conventions for one project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

#[derive(Deserialize)]
struct AppDescriptor {
    name: Option<String>,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // ------------------------------------------------------------------------
    // Android
    // ------------------------------------------------------------------------

    /// `android/app/src/<flavor or main>/res`.
    pub fn resource_root(&self, flavor: Option<&str>) -> PathBuf {
        self.root
            .join(ANDROID_APP_SRC)
            .join(flavor.unwrap_or(ANDROID_MAIN_SOURCE_SET))
            .join("res")
    }

    /// Directory holding the adaptive icon descriptors.
    pub fn adaptive_xml_folder(&self, flavor: Option<&str>) -> PathBuf {
        self.resource_root(flavor).join(ANDROID_ADAPTIVE_DIR)
    }

    pub fn colors_file(&self, flavor: Option<&str>) -> PathBuf {
        self.resource_root(flavor).join(ANDROID_COLORS_FILE)
    }

    /// The main source set's manifest. Flavors share it.
    pub fn android_manifest(&self) -> PathBuf {
        self.root
            .join(ANDROID_APP_SRC)
            .join(ANDROID_MAIN_SOURCE_SET)
            .join(ANDROID_MANIFEST_FILE)
    }

    // ------------------------------------------------------------------------
    // iOS
    // ------------------------------------------------------------------------

    /// Resolves the iOS project (group) name.
    ///
    /// Lookup order: `explicit_group`, the `name` field of `app.json`, the
    /// first directory under `ios/` containing an asset catalog, and finally
    /// [`IOS_FALLBACK_PROJECT_NAME`]. Returns `None` only when there is no
    /// `ios/` directory to look in.
    pub fn project_name(&self, explicit_group: Option<&str>) -> Option<String> {
        if let Some(group) = explicit_group {
            return Some(group.to_owned());
        }

        if let Some(name) = self.app_descriptor_name() {
            debug!("Using iOS project name {name:?} from {IOS_APP_DESCRIPTOR}");
            return Some(name);
        }

        let ios_dir = self.root.join(IOS_DIR);
        if !ios_dir.is_dir() {
            return None;
        }

        if let Some(name) = scan_for_asset_catalog(&ios_dir) {
            debug!("Discovered iOS project {name:?}");
            return Some(name);
        }

        Some(IOS_FALLBACK_PROJECT_NAME.to_owned())
    }

    /// `ios/<project>/Images.xcassets`.
    pub fn asset_catalog_folder(&self, project_name: &str) -> PathBuf {
        self.root
            .join(IOS_DIR)
            .join(project_name)
            .join(IOS_ASSET_CATALOG)
    }

    /// `ios/<project>/Images.xcassets/<catalog>.appiconset`.
    pub fn icon_set_folder(&self, project_name: &str, catalog_name: &str) -> PathBuf {
        self.asset_catalog_folder(project_name)
            .join(format!("{catalog_name}.appiconset"))
    }

    /// `ios/<project>.xcodeproj/project.pbxproj`.
    pub fn build_config_file(&self, project_name: &str) -> PathBuf {
        self.root
            .join(IOS_DIR)
            .join(format!("{project_name}.xcodeproj"))
            .join("project.pbxproj")
    }

    pub fn ios_dir(&self) -> PathBuf {
        self.root.join(IOS_DIR)
    }

    fn app_descriptor_name(&self) -> Option<String> {
        let text = std::fs::read_to_string(self.root.join(IOS_APP_DESCRIPTOR)).ok()?;
        let descriptor: AppDescriptor = serde_json::from_str(&text).ok()?;
        descriptor.name.filter(|name| !name.is_empty())
    }
}

/// Finds the first subdirectory (by name) that contains an asset catalog.
fn scan_for_asset_catalog(ios_dir: &Path) -> Option<String> {
    let mut candidates: Vec<_> = std::fs::read_dir(ios_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().join(IOS_ASSET_CATALOG).is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn android_paths() {
        let paths = ProjectPaths::new("/project");
        assert_eq!(
            paths.resource_root(None),
            PathBuf::from("/project/android/app/src/main/res")
        );
        assert_eq!(
            paths.resource_root(Some("staging")),
            PathBuf::from("/project/android/app/src/staging/res")
        );
        assert_eq!(
            paths.adaptive_xml_folder(Some("staging")),
            PathBuf::from("/project/android/app/src/staging/res/mipmap-anydpi-v26")
        );
        assert_eq!(
            paths.colors_file(None),
            PathBuf::from("/project/android/app/src/main/res/values/colors.xml")
        );
        assert_eq!(
            paths.android_manifest(),
            PathBuf::from("/project/android/app/src/main/AndroidManifest.xml")
        );
    }

    #[test]
    fn ios_paths() {
        let paths = ProjectPaths::new("/project");
        assert_eq!(
            paths.asset_catalog_folder("MyApp"),
            PathBuf::from("/project/ios/MyApp/Images.xcassets")
        );
        assert_eq!(
            paths.icon_set_folder("MyApp", "AppIcon-beta"),
            PathBuf::from("/project/ios/MyApp/Images.xcassets/AppIcon-beta.appiconset")
        );
        assert_eq!(
            paths.build_config_file("MyApp"),
            PathBuf::from("/project/ios/MyApp.xcodeproj/project.pbxproj")
        );
    }

    fn project_with_catalog(name: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("ios").join(name).join(IOS_ASSET_CATALOG))
            .unwrap();
        fs::create_dir_all(temp_dir.path().join("ios/Pods")).unwrap();
        temp_dir
    }

    #[test]
    fn explicit_group_wins() {
        let temp_dir = project_with_catalog("Scanned");
        fs::write(temp_dir.path().join("app.json"), r#"{ "name": "FromAppJson" }"#).unwrap();

        let paths = ProjectPaths::new(temp_dir.path());
        assert_eq!(paths.project_name(Some("Explicit")).as_deref(), Some("Explicit"));
    }

    #[test]
    fn app_descriptor_beats_directory_scan() {
        let temp_dir = project_with_catalog("Scanned");
        fs::write(temp_dir.path().join("app.json"), r#"{ "name": "FromAppJson" }"#).unwrap();

        let paths = ProjectPaths::new(temp_dir.path());
        assert_eq!(paths.project_name(None).as_deref(), Some("FromAppJson"));
    }

    #[test]
    fn directory_scan_finds_asset_catalog() {
        let temp_dir = project_with_catalog("Scanned");
        let paths = ProjectPaths::new(temp_dir.path());
        assert_eq!(paths.project_name(None).as_deref(), Some("Scanned"));
    }

    #[test]
    fn app_descriptor_without_name_falls_through() {
        let temp_dir = project_with_catalog("Scanned");
        fs::write(temp_dir.path().join("app.json"), r#"{ "expo": {} }"#).unwrap();

        let paths = ProjectPaths::new(temp_dir.path());
        assert_eq!(paths.project_name(None).as_deref(), Some("Scanned"));
    }

    #[test]
    fn fallback_name_when_nothing_is_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("ios/Pods")).unwrap();

        let paths = ProjectPaths::new(temp_dir.path());
        assert_eq!(
            paths.project_name(None).as_deref(),
            Some(IOS_FALLBACK_PROJECT_NAME)
        );
    }

    #[test]
    fn no_ios_directory_yields_none() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path());
        assert_eq!(paths.project_name(None), None);
    }
}
