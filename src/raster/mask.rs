//! Rounded-corner alpha masks rendered with resvg.

use image::{GrayImage, Luma, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{Error, Result};

/// Corner radius as a fraction of the edge length. `0.5` yields a circle.
pub const CORNER_RADIUS_RATIO: f32 = 0.5;

/// SVG markup for a `size x size` rounded square.
pub fn rounded_square_svg(size: u32) -> String {
    let radius = size as f32 * CORNER_RADIUS_RATIO;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}"><rect x="0" y="0" width="{size}" height="{size}" rx="{radius}" ry="{radius}"/></svg>"#
    )
}

/// Renders the rounded-corner mask at `size`, returning its coverage as alpha.
pub fn render_mask(size: u32) -> Result<GrayImage> {
    let svg = rounded_square_svg(size);
    let tree = Tree::from_str(&svg, &Options::default()).map_err(|_| Error::Mask(size))?;

    let mut pixmap = Pixmap::new(size, size).ok_or(Error::Mask(size))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    Ok(pixmap_alpha(&pixmap))
}

/// Extracts the alpha channel of a pixmap. Premultiplication does not affect alpha.
fn pixmap_alpha(pixmap: &Pixmap) -> GrayImage {
    GrayImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        Luma([pixmap.pixel(x, y).map_or(0, |pixel| pixel.alpha())])
    })
}

/// Destination-in blend: keeps `dest` only where the mask is opaque.
///
/// Pixels beyond the mask bounds are cleared.
pub fn apply_dest_in(dest: &mut RgbaImage, mask: &GrayImage) {
    for (x, y, pixel) in dest.enumerate_pixels_mut() {
        let coverage = if x < mask.width() && y < mask.height() {
            mask.get_pixel(x, y)[0]
        } else {
            0
        };
        pixel[3] = ((pixel[3] as u16 * coverage as u16 + 127) / 255) as u8;
    }
}
