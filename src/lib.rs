//! Picout builds review composites for click-alignment sessions.
//!
//! A session document names a frame rect and an ordered list of source images, each with an
//! optional recorded click. The composite shows the first source in full with the frame rect
//! outlined, and under it a filmstrip with the frame region cropped out of every source, the
//! click marker drawn over it, and a black/white border around each cell.
//!
//! - [`load_session`] parses and validates a document
//! - [`composite`] renders the review image
//! - [`save_png`] / [`default_output_path`] persist it next to the document
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod render;
mod scene;
mod schema;
mod session;

pub use crate::assets::decode::{FsImageLoader, ImageLoader, decode_image};
pub use crate::assets::icons::{BUILTIN_ICON_SIZE, IconSet};
pub use crate::foundation::error::{ParseError, PicoutError, PicoutResult, ValidationError};
pub use crate::foundation::geometry::{IPoint, IRect, ISize};
pub use crate::render::compose::{Layout, SPACING, compose};
pub use crate::render::overlay::{MARKER_HOTSPOT, draw_click_marker, draw_frame};
pub use crate::scene::model::{ClickType, Input, SourceItem};
pub use crate::schema::parse::parse;
pub use crate::schema::validate::validate;
pub use crate::session::{
    SessionSummary, SourceSummary, composite, composite_with, default_output_path, load_session,
    load_session_with, reload, save_png,
};
