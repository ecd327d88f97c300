//! Android resource file contents: the colors file and adaptive icon descriptors.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Default launcher icon resource name.
pub const DEFAULT_ICON_NAME: &str = "ic_launcher";

/// Color entry referenced by adaptive icons with a flat background.
pub const BACKGROUND_COLOR_NAME: &str = "ic_launcher_background";

static RESOURCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("valid resource name pattern"));

static ELEMENT_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">[^><]*<").expect("valid element text pattern"));

/// Returns true if `name` is a valid Android resource file name.
pub fn is_valid_icon_name(name: &str) -> bool {
    RESOURCE_NAME.is_match(name)
}

pub fn foreground_name(icon_name: &str) -> String {
    format!("{icon_name}_foreground")
}

pub fn background_name(icon_name: &str) -> String {
    format!("{icon_name}_background")
}

pub fn round_name(icon_name: &str) -> String {
    format!("{icon_name}_round")
}

// ============================================================================
// colors.xml
// ============================================================================

/// Contents of a freshly created colors resource file.
pub const COLORS_TEMPLATE: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n</resources>\n";

/// Sets the value of the named color entry, adding the entry if needed.
///
/// An existing entry is updated in place. A missing one is inserted right
/// before the closing `</resources>` tag (or appended when there is none).
/// Every other line is left untouched.
pub fn upsert_color(colors_xml: &str, name: &str, value: &str) -> String {
    let marker = format!("name=\"{name}\"");
    let mut lines: Vec<String> = colors_xml.split('\n').map(str::to_owned).collect();

    if let Some(line) = lines.iter_mut().find(|line| line.contains(&marker)) {
        *line = ELEMENT_TEXT
            .replace(line, NoExpand(&format!(">{value}<")))
            .into_owned();
    } else {
        let position = lines
            .iter()
            .rposition(|line| line.contains("</resources>"))
            .unwrap_or(lines.len());
        lines.insert(position, format!("    <color name=\"{name}\">{value}</color>"));
    }

    lines.join("\n")
}

// ============================================================================
// Adaptive icon descriptors
// ============================================================================

/// Adaptive icon whose background is the reserved color entry.
pub fn adaptive_icon_with_color(icon_name: &str) -> String {
    adaptive_icon_xml(
        &format!("@color/{BACKGROUND_COLOR_NAME}"),
        &format!("@mipmap/{}", foreground_name(icon_name)),
    )
}

/// Adaptive icon with raster foreground and background layers.
pub fn adaptive_icon_with_image(icon_name: &str) -> String {
    adaptive_icon_xml(
        &format!("@mipmap/{}", background_name(icon_name)),
        &format!("@mipmap/{}", foreground_name(icon_name)),
    )
}

fn adaptive_icon_xml(background: &str, foreground: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="{background}"/>
    <foreground android:drawable="{foreground}"/>
</adaptive-icon>
"#
    )
}
