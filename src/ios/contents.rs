//! The `Contents.json` descriptor of an app icon set.

use serde::{Deserialize, Serialize};

use crate::catalog::{IOS_ICONS, IosIcon};

/// Top-level `Contents.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentsFile {
    pub images: Vec<ImageEntry>,
    pub info: ContentsInfo,
}

/// One image of the icon set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentsInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ContentsInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_owned(),
        }
    }
}

impl ImageEntry {
    pub fn new(icon: &IosIcon, icon_name: &str) -> Self {
        Self {
            size: icon.points.to_owned(),
            idiom: icon.idiom.as_str().to_owned(),
            filename: icon.file_name(icon_name),
            scale: icon.scale_label(),
        }
    }
}

impl ContentsFile {
    /// Descriptor listing every catalog entry under `icon_name`.
    pub fn for_icon(icon_name: &str) -> Self {
        Self {
            images: IOS_ICONS
                .iter()
                .map(|icon| ImageEntry::new(icon, icon_name))
                .collect(),
            info: ContentsInfo::default(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_catalog_entry() {
        let contents = ContentsFile::for_icon("Icon-App");
        assert_eq!(contents.images.len(), IOS_ICONS.len());
        assert_eq!(
            contents.images[0],
            ImageEntry {
                size: "20x20".into(),
                idiom: "iphone".into(),
                filename: "Icon-App-20x20@2x.png".into(),
                scale: "2x".into(),
            }
        );
    }

    #[test]
    fn json_layout() {
        let json = ContentsFile::for_icon("Beta").to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["info"]["version"], 1);
        assert_eq!(value["info"]["author"], "xcode");
        let marketing = value["images"]
            .as_array()
            .unwrap()
            .iter()
            .find(|image| image["idiom"] == "ios-marketing")
            .unwrap();
        assert_eq!(marketing["filename"], "Beta-1024x1024@1x.png");
        assert_eq!(marketing["size"], "1024x1024");
        assert_eq!(marketing["scale"], "1x");
    }
}
