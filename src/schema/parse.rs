//! Session document parser.
//!
//! ```xml
//! <session>
//!   <frameRect left="0" top="0" width="50" height="50"/>
//!   <pics>
//!     <pic type="left" clickX="20" clickY="20">frames/0001.png</pic>
//!     <pic>frames/0002.png</pic>
//!   </pics>
//! </session>
//! ```
//!
//! The root element's name is not checked. Numeric attributes that are absent or not integers
//! read as `0`. `pic` paths are relative to the directory holding the document.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::assets::decode::ImageLoader;
use crate::foundation::error::ParseError;
use crate::foundation::geometry::{IPoint, IRect};
use crate::scene::model::{ClickType, Input, SourceItem};

/// Parse a session document.
///
/// Each referenced image is decoded through `loader` right away. A file that cannot be loaded
/// does not fail the parse: its item gets an empty image and [`crate::validate`] reports the
/// problem.
pub fn parse(
    bytes: &[u8],
    base_dir: &Path,
    loader: &dyn ImageLoader,
) -> Result<Input, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::malformed(e.to_string()))?;

    let mut opts = roxmltree::ParsingOptions::default();
    opts.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(text, opts)
        .map_err(|e| ParseError::malformed(e.to_string()))?;
    let root = doc.root_element();

    let frame_rect = first_child_element(root, "frameRect")
        .map(|el| {
            IRect::new(
                int_attr(el, "left"),
                int_attr(el, "top"),
                int_attr(el, "width"),
                int_attr(el, "height"),
            )
        })
        .unwrap_or_default();

    let sources = match first_child_element(root, "pics") {
        Some(pics) => pics
            .children()
            .filter(|n| n.is_element() && n.has_tag_name("pic"))
            .map(|pic| source_item(pic, base_dir, loader))
            .collect(),
        None => Vec::new(),
    };

    tracing::debug!(
        sources = sources.len(),
        ?frame_rect,
        base_dir = %base_dir.display(),
        "parsed session document"
    );
    Ok(Input::new(sources, frame_rect))
}

impl Input {
    /// Read and parse a session document from disk.
    ///
    /// Relative `pic` paths resolve against the document's own directory, not the process
    /// working directory.
    pub fn from_path(
        path: impl AsRef<Path>,
        loader: &dyn ImageLoader,
    ) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ParseError::io(path, e))?;
        parse(&bytes, &document_dir(path), loader)
    }
}

/// Absolute directory containing `path`.
pub(crate) fn document_dir(path: &Path) -> PathBuf {
    let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    abs.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn source_item(
    pic: roxmltree::Node<'_, '_>,
    base_dir: &Path,
    loader: &dyn ImageLoader,
) -> SourceItem {
    let rel: String = pic
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let path = base_dir.join(&rel);

    let image = match loader.load(&path) {
        Ok(img) => img,
        Err(err) => {
            tracing::warn!(path = %path.display(), "source image unavailable: {err:#}");
            RgbaImage::new(0, 0)
        }
    };

    SourceItem::new(
        image,
        ClickType::from_attr(pic.attribute("type")),
        IPoint::new(int_attr(pic, "clickX"), int_attr(pic, "clickY")),
    )
}

fn first_child_element<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.has_tag_name(name))
}

fn int_attr(node: roxmltree::Node<'_, '_>, name: &str) -> i32 {
    node.attribute(name).map(parse_int_or_zero).unwrap_or(0)
}

/// Base-10 integer with optional sign and surrounding whitespace; anything else is `0`.
pub(crate) fn parse_int_or_zero(s: &str) -> i32 {
    s.trim().parse::<i32>().unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/schema/parse.rs"]
mod tests;
