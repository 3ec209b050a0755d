use image::RgbaImage;

use crate::assets::icons::IconSet;
use crate::foundation::geometry::{IPoint, IRect, ISize};
use crate::render::blend::{Rgba8, draw_image, stroke_rect};
use crate::scene::model::ClickType;

const BLACK: Rgba8 = [0, 0, 0, 255];
const WHITE: Rgba8 = [255, 255, 255, 255];

/// Offset from a click point to the marker icon's top-left corner.
pub const MARKER_HOTSPOT: IPoint = IPoint::new(5, 5);

/// Three concentric outlines: black at `rect`, white at `rect` inset by 1 and by 2.
///
/// On rects smaller than 4px an inset ring turns inside out; it is still stroked between its
/// edges, like a painter given a negative-size rect.
pub fn draw_frame(canvas: &mut RgbaImage, rect: IRect) {
    stroke_rect(canvas, rect, BLACK);
    stroke_rect(canvas, rect.inset(1), WHITE);
    stroke_rect(canvas, rect.inset(2), WHITE);
}

/// Overlay the icon for `click_type` so that its hotspot lands on `click_point` inside `cell`.
///
/// No-op for [`ClickType::None`] or when `icons` has no entry for the type.
pub fn draw_click_marker(
    canvas: &mut RgbaImage,
    cell: IRect,
    click_type: ClickType,
    click_point: IPoint,
    icons: &IconSet,
) {
    let Some(icon) = icons.get(click_type) else {
        return;
    };
    let x = i64::from(cell.x) + i64::from(click_point.x) - i64::from(MARKER_HOTSPOT.x);
    let y = i64::from(cell.y) + i64::from(click_point.y) - i64::from(MARKER_HOTSPOT.y);
    // A corner outside the i32 range puts the whole icon off the canvas.
    let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
        tracing::trace!(x, y, "click marker off canvas");
        return;
    };
    draw_image(
        canvas,
        icon,
        IRect::from_size(ISize::of_image(icon)),
        IPoint::new(x, y),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
