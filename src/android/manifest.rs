//! Launcher icon references in `AndroidManifest.xml`.

use std::path::Path;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::{info, warn};

use super::resources::round_name;
use crate::error::Result;
use crate::files::{read_optional, write_text};

static ICON_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"android:icon="[^"]*""#).expect("valid icon pattern"));

static ROUND_ICON_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"android:roundIcon="[^"]*""#).expect("valid round icon pattern")
});

/// Points `android:icon` and `android:roundIcon` at the given mipmap.
///
/// Works line by line; lines without either attribute are kept byte for byte.
pub fn patch_manifest(manifest: &str, icon_name: &str) -> String {
    let icon = format!(r#"android:icon="@mipmap/{icon_name}""#);
    let round_icon = format!(r#"android:roundIcon="@mipmap/{}""#, round_name(icon_name));

    manifest
        .split('\n')
        .map(|line| {
            let line = ICON_ATTR.replace_all(line, NoExpand(&icon));
            ROUND_ICON_ATTR
                .replace_all(&line, NoExpand(&round_icon))
                .into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrites the manifest at `path` in place.
///
/// A missing manifest is logged and skipped.
pub async fn update_manifest(path: &Path, icon_name: &str) -> Result<()> {
    let Some(manifest) = read_optional(path).await? else {
        warn!(
            "AndroidManifest.xml not found at {}; launcher icon not updated, step skipped",
            path.display()
        );
        return Ok(());
    };

    info!("Updating launcher icon in AndroidManifest.xml");

    let patched = patch_manifest(&manifest, icon_name);
    if patched != manifest {
        write_text(path, &patched).await?;
    }
    Ok(())
}
