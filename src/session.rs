//! Load → validate → composite, the surface a viewer or the CLI drives.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::assets::decode::{FsImageLoader, ImageLoader};
use crate::assets::icons::IconSet;
use crate::foundation::error::{PicoutError, PicoutResult};
use crate::foundation::geometry::{IPoint, IRect, ISize};
use crate::render::compose::{Layout, compose};
use crate::scene::model::{ClickType, Input};

/// Parse and validate the session document at `path`, decoding images from disk.
///
/// The error's `Display` is the message to show the user.
pub fn load_session(path: impl AsRef<Path>) -> PicoutResult<Input> {
    load_session_with(path, &FsImageLoader)
}

/// [`load_session`] with a caller-supplied image decoder.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_session_with(
    path: impl AsRef<Path>,
    loader: &dyn ImageLoader,
) -> PicoutResult<Input> {
    let input = Input::from_path(path.as_ref(), loader)?;
    if let Some(err) = input.validate() {
        tracing::info!(%err, "session rejected");
        return Err(err.into());
    }
    Ok(input)
}

/// Load the document again from scratch. Nothing is cached between calls, so an unchanged
/// document yields an identical session.
pub fn reload(path: impl AsRef<Path>) -> PicoutResult<Input> {
    load_session(path)
}

/// Composite with the built-in marker icons.
pub fn composite(input: &Input) -> PicoutResult<RgbaImage> {
    composite_with(input, &IconSet::builtin())
}

/// Composite with the given marker icons; an invalid session reports why instead of `None`.
pub fn composite_with(input: &Input, icons: &IconSet) -> PicoutResult<RgbaImage> {
    if let Some(err) = input.validate() {
        return Err(err.into());
    }
    compose(input, icons)
        .ok_or_else(|| PicoutError::Other(anyhow::anyhow!("composite produced no image")))
}

/// Where a composite of `document` is saved by default: `<document dir>/<base name>.png`.
///
/// The base name stops at the first `.` of the file name, so `run.2024.xml` saves as
/// `run.png`.
pub fn default_output_path(document: &Path) -> PathBuf {
    let file_name = document
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default();
    let dir = document.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{base}.png"))
}

/// Encode `image` as PNG at `path`, creating missing parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> PicoutResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "saved composite");
    Ok(())
}

/// Per-source entry of a [`SessionSummary`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SourceSummary {
    pub size: ISize,
    pub click_type: ClickType,
    pub click_point: IPoint,
}

/// Human/JSON friendly description of a loaded session and its planned composite.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SessionSummary {
    pub document: PathBuf,
    pub frame_rect: IRect,
    pub sources: Vec<SourceSummary>,
    /// `None` when the session does not validate.
    pub layout: Option<Layout>,
}

impl SessionSummary {
    pub fn new(document: impl Into<PathBuf>, input: &Input) -> Self {
        Self {
            document: document.into(),
            frame_rect: input.frame_rect,
            sources: input
                .sources
                .iter()
                .map(|s| SourceSummary {
                    size: s.size(),
                    click_type: s.click_type,
                    click_point: s.click_point,
                })
                .collect(),
            layout: Layout::plan(input),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
