use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

/// Source of decoded pixels for the image files a session document references.
///
/// The parser asks for every `pic` through this trait; a failure is not fatal to parsing (the
/// item gets an empty image and validation reports it later).
pub trait ImageLoader {
    /// Decode the file at `path` into straight-alpha RGBA8.
    fn load(&self, path: &Path) -> anyhow::Result<RgbaImage>;
}

impl<F> ImageLoader for F
where
    F: Fn(&Path) -> anyhow::Result<RgbaImage>,
{
    fn load(&self, path: &Path) -> anyhow::Result<RgbaImage> {
        self(path)
    }
}

/// Loads images from the filesystem with the `image` crate's codecs.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> anyhow::Result<RgbaImage> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        decode_image(&bytes).with_context(|| format!("decode image '{}'", path.display()))
    }
}

/// Decode an encoded image, sniffing the format from its content rather than a file extension.
pub fn decode_image(bytes: &[u8]) -> anyhow::Result<RgbaImage> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("guess image format")?;
    let dyn_img = reader.decode().context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
