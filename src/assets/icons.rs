use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};

use crate::assets::decode::ImageLoader;
use crate::scene::model::ClickType;

/// Side of the built-in marker sprites. Their centre pixel sits at `(5, 5)`, which is the
/// correction applied when a marker is placed on a click point.
pub const BUILTIN_ICON_SIZE: u32 = 11;

const RING: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CENTER: Rgba<u8> = Rgba([255, 255, 255, 255]);
const LEFT_FILL: Rgba<u8> = Rgba([230, 40, 40, 255]);
const RIGHT_FILL: Rgba<u8> = Rgba([40, 90, 230, 255]);

/// Marker icons, looked up by [`ClickType`].
///
/// [`ClickType::None`] never has an icon. A missing icon for `Left`/`Right` means the marker is
/// simply not drawn.
#[derive(Clone, Debug, Default)]
pub struct IconSet {
    left: Option<RgbaImage>,
    right: Option<RgbaImage>,
}

impl IconSet {
    /// No icons at all; click markers become no-ops.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Procedurally drawn left/right markers bundled with the crate.
    pub fn builtin() -> Self {
        Self {
            left: Some(marker_sprite(LEFT_FILL)),
            right: Some(marker_sprite(RIGHT_FILL)),
        }
    }

    /// Replace the icon used for `click_type`. Setting an icon for `None` is ignored.
    pub fn with_icon(mut self, click_type: ClickType, icon: RgbaImage) -> Self {
        match click_type {
            ClickType::Left => self.left = Some(icon),
            ClickType::Right => self.right = Some(icon),
            ClickType::None => {}
        }
        self
    }

    /// Built-in icons with optional overrides loaded from image files.
    pub fn from_files(
        left: Option<&Path>,
        right: Option<&Path>,
        loader: &dyn ImageLoader,
    ) -> anyhow::Result<Self> {
        let mut set = Self::builtin();
        if let Some(path) = left {
            let icon = loader
                .load(path)
                .with_context(|| format!("load left-click icon '{}'", path.display()))?;
            set = set.with_icon(ClickType::Left, icon);
        }
        if let Some(path) = right {
            let icon = loader
                .load(path)
                .with_context(|| format!("load right-click icon '{}'", path.display()))?;
            set = set.with_icon(ClickType::Right, icon);
        }
        Ok(set)
    }

    pub fn get(&self, click_type: ClickType) -> Option<&RgbaImage> {
        match click_type {
            ClickType::Left => self.left.as_ref(),
            ClickType::Right => self.right.as_ref(),
            ClickType::None => None,
        }
    }
}

fn marker_sprite(fill: Rgba<u8>) -> RgbaImage {
    let c = (BUILTIN_ICON_SIZE / 2) as i32;
    RgbaImage::from_fn(BUILTIN_ICON_SIZE, BUILTIN_ICON_SIZE, |x, y| {
        let dx = x as i32 - c;
        let dy = y as i32 - c;
        match dx * dx + dy * dy {
            0 => CENTER,
            d2 if d2 <= 12 => fill,
            d2 if d2 <= 27 => RING,
            _ => Rgba([0, 0, 0, 0]),
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icons.rs"]
mod tests;
