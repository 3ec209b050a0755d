use crate::foundation::error::ValidationError;
use crate::foundation::geometry::IRect;
use crate::scene::model::Input;

/// Check a session for consistency.
///
/// Checks run in a fixed order and stop at the first failure, so the reported error is stable:
/// no sources, then size mismatch against the first image, then empty common size, then an
/// empty clipped frame rect. Returns `None` when the session can be composited.
pub fn validate(input: &Input) -> Option<ValidationError> {
    let Some(first) = input.sources.first() else {
        return Some(ValidationError::NoSourceImages);
    };

    let source_size = first.size();
    if input.sources.iter().any(|item| item.size() != source_size) {
        return Some(ValidationError::SizeMismatch);
    }

    if source_size.is_empty() {
        return Some(ValidationError::EmptySourceSize);
    }

    if input
        .frame_rect
        .intersect(IRect::from_size(source_size))
        .is_empty()
    {
        return Some(ValidationError::EmptyFrameRect);
    }

    None
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
