//! App icon build setting in `project.pbxproj`.
//!
//! The file is patched with a line scan rather than parsed: everything outside
//! the rewritten setting must stay byte-identical.

use std::path::Path;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::files::{read_optional, write_text};

const SECTION_BEGIN: &str = "/* Begin XCBuildConfiguration section */";
const SECTION_END: &str = "/* End XCBuildConfiguration section */";
const APP_ICON_SETTING: &str = "ASSETCATALOG_COMPILER_APPICON_NAME";

/// Opening line of a configuration object: `13B07F941A680F5B00A75B9A /* Debug */ = {`.
static CONFIGURATION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[0-9A-Za-z]+ /\* (.+?) \*/ = \{").expect("valid configuration pattern")
});

/// A setting's value up to its terminating `;`, with quoted values matched whole.
static SETTING_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"=\s*(?:"(?:[^"\\]|\\.)*"|[^;"]*);"#).expect("valid setting pattern")
});

/// Quotes a value when the project file format requires it.
fn pbx_value(value: &str) -> String {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/'));
    if bare {
        value.to_owned()
    } else {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

/// Sets the app icon name in every build configuration.
///
/// Only lines inside the `XCBuildConfiguration` section, within a named
/// configuration object, are considered.
pub fn patch_build_config(project: &str, catalog_name: &str) -> String {
    let replacement = format!("= {};", pbx_value(catalog_name));

    let mut in_section = false;
    let mut configuration: Option<String> = None;

    project
        .split('\n')
        .map(|line| {
            if line.contains(SECTION_BEGIN) {
                in_section = true;
                configuration = None;
            } else if line.contains(SECTION_END) {
                in_section = false;
                configuration = None;
            }

            if !in_section {
                return line.to_owned();
            }

            if let Some(captures) = CONFIGURATION_START.captures(line) {
                configuration = Some(captures[1].to_owned());
            }

            match &configuration {
                Some(name) if line.contains(APP_ICON_SETTING) => {
                    debug!("Setting app icon for build configuration {name:?}");
                    SETTING_VALUE
                        .replace(line, NoExpand(&replacement))
                        .into_owned()
                }
                _ => line.to_owned(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrites the project file at `path` in place.
///
/// A missing project file is logged and skipped.
pub async fn update_build_config(path: &Path, catalog_name: &str) -> Result<()> {
    let Some(project) = read_optional(path).await? else {
        warn!(
            "project.pbxproj not found at {}; app icon not updated, step skipped",
            path.display()
        );
        return Ok(());
    };

    info!("Updating app icon build setting in project.pbxproj");

    let patched = patch_build_config(&project, catalog_name);
    if patched != project {
        write_text(path, &patched).await?;
    }
    Ok(())
}
