use image::{Rgba, RgbaImage};

use crate::foundation::geometry::{IPoint, IRect, ISize};

/// Straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Source-over of straight-alpha pixels. Opaque sources replace the destination exactly.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 || dst[3] == 0 {
        return src;
    }

    let sa = u16::from(src[3]);
    let inv = 255u16 - sa;
    let da = mul_div255(u16::from(dst[3]), inv);
    let out_a = add_sat_u8(src[3], da);

    let mut out = [0u8; 4];
    out[3] = out_a;
    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), sa);
        let dc = mul_div255(u16::from(dst[i]), u16::from(da));
        let premul = u32::from(add_sat_u8(sc, dc));
        out[i] = ((premul * 255 + u32::from(out_a) / 2) / u32::from(out_a)).min(255) as u8;
    }
    out
}

/// Draw the `src_rect` part of `src` onto `dst` with its top-left corner at `origin`.
///
/// `src_rect` is clipped to `src`, and writes outside `dst` are dropped.
pub fn draw_image(dst: &mut RgbaImage, src: &RgbaImage, src_rect: IRect, origin: IPoint) {
    let src_rect = src_rect.intersect(IRect::from_size(ISize::of_image(src)));
    if src_rect.is_empty() {
        return;
    }
    let target = IRect::from_origin_size(origin, src_rect.size());
    if target.intersect(IRect::from_size(ISize::of_image(dst))).is_empty() {
        return;
    }
    // Offset that maps a source pixel onto the destination.
    let shift_x = i64::from(origin.x) - i64::from(src_rect.x);
    let shift_y = i64::from(origin.y) - i64::from(src_rect.y);

    for sy in src_rect.y..src_rect.y + src_rect.height {
        for sx in src_rect.x..src_rect.x + src_rect.width {
            let Some((dx, dy)) =
                in_bounds(dst, i64::from(sx) + shift_x, i64::from(sy) + shift_y)
            else {
                continue;
            };
            // In range: both were clipped to `src` above.
            let s = src.get_pixel(sx as u32, sy as u32).0;
            let d = dst.get_pixel_mut(dx, dy);
            *d = Rgba(over(d.0, s));
        }
    }
}

/// Stroke a 1px outline the way a cosmetic pen does: the outline of `(x, y, w, h)` covers
/// columns `x..=x+w` and rows `y..=y+h`.
///
/// A negative extent strokes between the same two edges, so `(5, y, -2, h)` covers columns
/// `3..=5`.
pub fn stroke_rect(dst: &mut RgbaImage, rect: IRect, color: Rgba8) {
    let (x0, x1) = ordered(rect.x, rect.width);
    let (y0, y1) = ordered(rect.y, rect.height);
    // Only the part of the outline that can land on `dst` is walked.
    let (w, h) = (i64::from(dst.width()), i64::from(dst.height()));

    for x in x0.max(0)..=x1.min(w - 1) {
        blend_pixel(dst, x, y0, color);
        if y1 != y0 {
            blend_pixel(dst, x, y1, color);
        }
    }
    for y in (y0 + 1).max(0)..=(y1 - 1).min(h - 1) {
        blend_pixel(dst, x0, y, color);
        if x1 != x0 {
            blend_pixel(dst, x1, y, color);
        }
    }
}

fn ordered(pos: i32, extent: i32) -> (i64, i64) {
    let (a, b) = (i64::from(pos), i64::from(pos) + i64::from(extent));
    (a.min(b), a.max(b))
}

fn blend_pixel(dst: &mut RgbaImage, x: i64, y: i64, color: Rgba8) {
    if let Some((x, y)) = in_bounds(dst, x, y) {
        let d = dst.get_pixel_mut(x, y);
        *d = Rgba(over(d.0, color));
    }
}

fn in_bounds(img: &RgbaImage, x: i64, y: i64) -> Option<(u32, u32)> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    (x < img.width() && y < img.height()).then_some((x, y))
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
