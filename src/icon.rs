// SPDX-License-Identifier: MPL-2.0
//! Application and tray icon rendering.
//! Draws a steel-blue disc with a white inner disc at runtime so no image
//! asset has to be shipped.

use iced::window::{icon, Icon};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Edge length of the notification-area icon.
pub const TRAY_ICON_SIZE: u32 = 16;

/// Edge length of the window title bar icon.
pub const WINDOW_ICON_SIZE: u32 = 64;

/// Straight (non-premultiplied) RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Renders the two-disc icon at `size`×`size`.
/// Returns `None` if the pixmap cannot be allocated.
pub fn render(size: u32) -> Option<IconImage> {
    let mut pixmap = Pixmap::new(size, size)?;
    let full = size as f32;

    fill_disc(&mut pixmap, full / 2.0, full / 2.0, full / 2.0, [70, 130, 180]);
    fill_disc(&mut pixmap, full / 2.0, full / 2.0, full / 4.0, [255, 255, 255]);

    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Some(IconImage {
        rgba,
        width: size,
        height: size,
    })
}

fn fill_disc(pixmap: &mut Pixmap, cx: f32, cy: f32, r: f32, [red, green, blue]: [u8; 3]) {
    let Some(path) = PathBuilder::from_circle(cx, cy, r) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color_rgba8(red, green, blue, 255);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

/// Icon for the notification area.
pub fn tray_icon() -> Option<IconImage> {
    render(TRAY_ICON_SIZE)
}

/// Icon for the window title bar. Falls back to `None` if rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let image = render(WINDOW_ICON_SIZE)?;
    icon::from_rgba(image.rgba, image.width, image.height).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(image: &IconImage, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * image.width + x) * 4) as usize;
        [
            image.rgba[i],
            image.rgba[i + 1],
            image.rgba[i + 2],
            image.rgba[i + 3],
        ]
    }

    #[test]
    fn tray_icon_has_expected_dimensions() {
        let image = tray_icon().expect("icon renders");
        assert_eq!(image.width, TRAY_ICON_SIZE);
        assert_eq!(image.height, TRAY_ICON_SIZE);
        assert_eq!(image.rgba.len(), (TRAY_ICON_SIZE * TRAY_ICON_SIZE * 4) as usize);
    }

    #[test]
    fn center_is_white_and_ring_is_blue() {
        let image = render(WINDOW_ICON_SIZE).expect("icon renders");
        assert_eq!(pixel(&image, 32, 32), [255, 255, 255, 255]);
        // Halfway between the inner disc and the edge
        assert_eq!(pixel(&image, 32, 8), [70, 130, 180, 255]);
    }

    #[test]
    fn corners_are_transparent() {
        let image = render(WINDOW_ICON_SIZE).expect("icon renders");
        assert_eq!(pixel(&image, 0, 0)[3], 0);
        assert_eq!(pixel(&image, WINDOW_ICON_SIZE - 1, WINDOW_ICON_SIZE - 1)[3], 0);
    }

    #[test]
    fn zero_size_does_not_render() {
        assert!(render(0).is_none());
    }
}
