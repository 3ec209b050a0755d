use image::RgbaImage;

use crate::assets::icons::IconSet;
use crate::foundation::geometry::{IPoint, IRect, ISize};
use crate::render::blend::draw_image;
use crate::render::overlay::{draw_click_marker, draw_frame};
use crate::scene::model::Input;

/// Gap in pixels between the reference image and the filmstrip, and between filmstrip cells.
pub const SPACING: i32 = 16;

/// Geometry of a composite, computed without touching pixels.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Layout {
    /// Output image size.
    pub canvas_size: ISize,
    /// Size shared by every source image.
    pub source_size: ISize,
    /// Frame rect clipped to the source bounds; the crop taken from every source.
    pub real_frame_rect: IRect,
    /// Horizontal offset of the full reference image.
    pub full_image_x: i32,
    /// One filmstrip cell per source, in source order.
    pub cells: Vec<IRect>,
}

impl Layout {
    /// Plan the composite for `input`, or `None` if the input does not validate.
    pub fn plan(input: &Input) -> Option<Layout> {
        if let Some(err) = input.validate() {
            tracing::debug!(%err, "no layout for invalid input");
            return None;
        }

        let source_size = input.source_size()?;
        let real_frame_rect = input.real_frame_rect()?;
        let n = i32::try_from(input.sources.len()).ok()?;

        let Some(canvas_size) = canvas_size(source_size, real_frame_rect.size(), n) else {
            tracing::debug!(sources = n, "composite too large to lay out");
            return None;
        };
        let full_image_x = (canvas_size.width - source_size.width) / 2;

        let strip_y = source_size.height + SPACING;
        let pitch = SPACING.saturating_add(real_frame_rect.width);
        // Cell origins stay below the canvas size computed above.
        let cells = (0..n)
            .map(|i| {
                IRect::from_origin_size(IPoint::new(i * pitch, strip_y), real_frame_rect.size())
            })
            .collect();

        Some(Layout {
            canvas_size,
            source_size,
            real_frame_rect,
            full_image_x,
            cells,
        })
    }

    /// The region of interest outlined on the full reference image.
    pub fn reference_frame_rect(&self) -> IRect {
        self.real_frame_rect.translate(self.full_image_x, 0)
    }
}

/// Canvas for `n` cells of `cell` size under a `source` sized reference image, or `None` when
/// it does not fit in `i32`.
///
/// The `+ 1` leaves room for the right and bottom edges of the last cell's outline.
fn canvas_size(source: ISize, cell: ISize, n: i32) -> Option<ISize> {
    let strip_width = cell
        .width
        .checked_mul(n)?
        .checked_add(SPACING.checked_mul(n.checked_sub(1)?)?)?;
    let width = source.width.max(strip_width).checked_add(1)?;
    let height = source
        .height
        .checked_add(SPACING)?
        .checked_add(cell.height)?
        .checked_add(1)?;
    Some(ISize::new(width, height))
}

/// Render the review composite: the first source in full, centred at the top, and below it one
/// cropped cell per source with its click marker and frame.
///
/// Returns `None` when `input` does not validate. The canvas starts fully transparent.
#[tracing::instrument(skip_all, fields(sources = input.sources.len()))]
pub fn compose(input: &Input, icons: &IconSet) -> Option<RgbaImage> {
    let layout = Layout::plan(input)?;
    tracing::debug!(
        width = layout.canvas_size.width,
        height = layout.canvas_size.height,
        full_image_x = layout.full_image_x,
        "composing"
    );

    // Validated above: every size is positive.
    let mut canvas = RgbaImage::new(
        layout.canvas_size.width as u32,
        layout.canvas_size.height as u32,
    );

    let first = &input.sources.first()?.image;
    draw_image(
        &mut canvas,
        first,
        IRect::from_size(layout.source_size),
        IPoint::new(layout.full_image_x, 0),
    );

    for (item, &cell) in input.sources.iter().zip(&layout.cells) {
        draw_image(&mut canvas, &item.image, layout.real_frame_rect, cell.top_left());
        draw_click_marker(&mut canvas, cell, item.click_type, item.click_point, icons);
        draw_frame(&mut canvas, cell);
    }

    draw_frame(&mut canvas, layout.reference_frame_rect());

    Some(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
