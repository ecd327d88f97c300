//! Configuration record discovery and merging.
//!
//! Settings are merged with the following priority (lowest first):
//! 1. `package.json` (`iconsetConfig`, or the legacy `rnMakeIconConfig` key)
//! 2. `.iconsetrc.json` / `.rnmakeiconrc.json` (first found) and `.iconsetrc.toml`
//! 3. `ICONSET_*` environment variables
//! 4. Caller overrides (usually the command line)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::options::PlatformToggle;

/// JSON run-control files, in lookup order. Only the first one found is read.
const JSON_CONFIG_FILES: &[&str] = &[".iconsetrc.json", ".rnmakeiconrc.json"];

const TOML_CONFIG_FILE: &str = ".iconsetrc.toml";

/// Keys of `package.json` that may hold the settings record, in lookup order.
const PACKAGE_JSON_KEYS: &[&str] = &["iconsetConfig", "rnMakeIconConfig"];

const ENV_PREFIX: &str = "ICONSET_";

/// The user-facing settings record.
///
/// Every field is optional so that records from different sources can be
/// layered; unset fields are skipped when serializing so they never clobber a
/// lower-priority source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct IconsetConfig {
    /// Source image shared by both platforms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path_android: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path_ios: Option<PathBuf>,

    /// `true` to generate Android icons, or a custom launcher icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<PlatformToggle>,

    /// `true` to generate iOS icons, or a custom icon/catalog name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<PlatformToggle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,

    /// iOS project group (the directory next to `<group>.xcodeproj`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// `#RRGGBB` color or path to a raster image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptive_icon_background: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptive_icon_foreground: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_launcher_icon: Option<bool>,
}

impl IconsetConfig {
    /// Discovers the settings for a project and layers `overrides` on top.
    pub fn resolve(context: &Path, overrides: IconsetConfig) -> Result<Self> {
        let figment = Self::figment(context).merge(Serialized::defaults(overrides));
        Ok(figment.extract()?)
    }

    /// Builds the figment for every file- and environment-based source.
    pub fn figment(context: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(IconsetConfig::default()));

        let package_json = context.join("package.json");
        if package_json.is_file() {
            if let Some(key) = package_json_key(&package_json) {
                debug!("Reading settings from package.json ({key})");
                figment = figment.merge(Figment::from(Json::file(&package_json)).focus(key));
            }
        }

        if let Some(path) = JSON_CONFIG_FILES
            .iter()
            .map(|name| context.join(name))
            .find(|path| path.is_file())
        {
            debug!("Reading settings from {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        let toml = context.join(TOML_CONFIG_FILE);
        if toml.is_file() {
            debug!("Reading settings from {}", toml.display());
            figment = figment.merge(Toml::file(toml));
        }

        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .lowercase(false)
                .map(|key| env_key(key.as_str()).into()),
        )
    }
}

/// Maps `IMAGE_PATH_ANDROID` style variable names to the record's camelCase keys.
fn env_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Returns the first settings key present in a `package.json`, if any.
fn package_json_key(path: &Path) -> Option<&'static str> {
    let text = std::fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&text).ok()?;
    PACKAGE_JSON_KEYS
        .iter()
        .copied()
        .find(|key| value.get(key).is_some_and(serde_json::Value::is_object))
}
