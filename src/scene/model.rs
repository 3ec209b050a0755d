use image::RgbaImage;

use crate::foundation::error::ValidationError;
use crate::foundation::geometry::{IPoint, IRect, ISize};

/// Which marker icon, if any, is drawn over a source's click point.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ClickType {
    /// No marker.
    #[default]
    None,
    /// Left mouse button marker.
    Left,
    /// Right mouse button marker.
    Right,
}

impl ClickType {
    /// Map a document `type` attribute. Only the exact strings `left` and `right` are recognised.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("left") => Self::Left,
            Some("right") => Self::Right,
            _ => Self::None,
        }
    }
}

/// One source image of a session together with its recorded click.
#[derive(Clone, Debug)]
pub struct SourceItem {
    /// Decoded pixels; empty (0×0) when the referenced file could not be loaded.
    pub image: RgbaImage,
    pub click_type: ClickType,
    /// Click position in the source image's own coordinates.
    pub click_point: IPoint,
}

impl SourceItem {
    pub fn new(image: RgbaImage, click_type: ClickType, click_point: IPoint) -> Self {
        Self {
            image,
            click_type,
            click_point,
        }
    }

    pub fn size(&self) -> ISize {
        ISize::of_image(&self.image)
    }
}

/// A parsed alignment session.
///
/// `sources[0]` is the full reference image; all sources are laid out left to right in order.
/// Consistency is not assumed: call [`Input::validate`] before relying on the invariants.
#[derive(Clone, Debug, Default)]
pub struct Input {
    pub sources: Vec<SourceItem>,
    /// Region of interest in source-image pixel coordinates.
    pub frame_rect: IRect,
}

impl Input {
    pub fn new(sources: Vec<SourceItem>, frame_rect: IRect) -> Self {
        Self {
            sources,
            frame_rect,
        }
    }

    /// Size of the first source image, if there is one.
    pub fn source_size(&self) -> Option<ISize> {
        self.sources.first().map(SourceItem::size)
    }

    /// `frame_rect` clipped to the bounds of the first source image.
    pub fn real_frame_rect(&self) -> Option<IRect> {
        self.source_size()
            .map(|size| self.frame_rect.intersect(IRect::from_size(size)))
    }

    /// See [`crate::validate`].
    pub fn validate(&self) -> Option<ValidationError> {
        crate::schema::validate::validate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
