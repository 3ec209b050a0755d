//! Integer pixel geometry.
//!
//! All layout arithmetic in Picout is done on `i32` so offsets match the original review tool
//! exactly. Rectangles are `(x, y, width, height)`; a rectangle with a non-positive width or
//! height is empty.

/// Pixel offset.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IPoint {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

impl IPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl std::ops::Add for IPoint {
    type Output = IPoint;

    fn add(self, rhs: IPoint) -> IPoint {
        IPoint::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl std::ops::Sub for IPoint {
    type Output = IPoint;

    fn sub(self, rhs: IPoint) -> IPoint {
        IPoint::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Pixel dimensions.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ISize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl ISize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Size of an `image` buffer.
    pub fn of_image(img: &image::RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        Self::new(
            i32::try_from(w).unwrap_or(i32::MAX),
            i32::try_from(h).unwrap_or(i32::MAX),
        )
    }

    /// Return `true` when either dimension is zero or negative.
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned integer rectangle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl IRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at `origin` with the given size.
    pub const fn from_origin_size(origin: IPoint, size: ISize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// `(0, 0, size)`, the bounds of an image of that size.
    pub const fn from_size(size: ISize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub const fn top_left(self) -> IPoint {
        IPoint::new(self.x, self.y)
    }

    pub const fn size(self) -> ISize {
        ISize::new(self.width, self.height)
    }

    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Overlap of two rectangles. Disjoint inputs give the empty default rect.
    ///
    /// A negative extent is normalised before clipping, as `QRect` does: `(x, w)` spans the
    /// inclusive range between `x` and `x + w - 1` in either order. A zero extent is empty.
    pub fn intersect(self, other: IRect) -> IRect {
        let (Some((l, r)), Some((t, b))) = (
            overlap(span(self.x, self.width), span(other.x, other.width)),
            overlap(span(self.y, self.height), span(other.y, other.height)),
        ) else {
            return IRect::default();
        };
        match (
            i32::try_from(l),
            i32::try_from(t),
            i32::try_from(r - l + 1),
            i32::try_from(b - t + 1),
        ) {
            (Ok(x), Ok(y), Ok(w), Ok(h)) => IRect::new(x, y, w, h),
            _ => IRect::default(),
        }
    }

    pub const fn translate(self, dx: i32, dy: i32) -> IRect {
        IRect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Shrink by `d` pixels on every side (grow when negative).
    pub const fn inset(self, d: i32) -> IRect {
        IRect::new(
            self.x.saturating_add(d),
            self.y.saturating_add(d),
            self.width.saturating_sub(d.saturating_mul(2)),
            self.height.saturating_sub(d.saturating_mul(2)),
        )
    }
}

/// Inclusive pixel range covered along one axis; `None` for a zero extent.
fn span(pos: i32, extent: i32) -> Option<(i64, i64)> {
    let first = i64::from(pos);
    let last = first + i64::from(extent) - 1;
    match extent {
        0 => None,
        e if e < 0 => Some((last, first)),
        _ => Some((first, last)),
    }
}

fn overlap(a: Option<(i64, i64)>, b: Option<(i64, i64)>) -> Option<(i64, i64)> {
    let ((l1, r1), (l2, r2)) = (a?, b?);
    let (l, r) = (l1.max(l2), r1.min(r2));
    (l <= r).then_some((l, r))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
