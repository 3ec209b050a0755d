use std::cell::RefCell;

use super::*;

/// Loader that serves fixed-size images for any path containing "ok" and records every request.
struct RecordingLoader {
    seen: RefCell<Vec<PathBuf>>,
}

impl RecordingLoader {
    fn new() -> Self {
        Self {
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ImageLoader for RecordingLoader {
    fn load(&self, path: &Path) -> anyhow::Result<RgbaImage> {
        self.seen.borrow_mut().push(path.to_path_buf());
        if path.to_string_lossy().contains("ok") {
            Ok(RgbaImage::new(100, 100))
        } else {
            anyhow::bail!("missing")
        }
    }
}

const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<root>
  <frameRect left="10" top="20" width="50" height="40"/>
  <pics>
    <pic type="left" clickX="20" clickY="21">a_ok.png</pic>
    <pic type="right" clickX="-3" clickY="7">sub/b_ok.png</pic>
    <pic>c_ok.png</pic>
  </pics>
</root>"#;

#[test]
fn parses_frame_rect_and_sources_in_order() {
    let loader = RecordingLoader::new();
    let input = parse(DOC.as_bytes(), Path::new("/data/session"), &loader).unwrap();

    assert_eq!(input.frame_rect, IRect::new(10, 20, 50, 40));
    assert_eq!(input.sources.len(), 3);

    assert_eq!(input.sources[0].click_type, ClickType::Left);
    assert_eq!(input.sources[0].click_point, IPoint::new(20, 21));
    assert_eq!(input.sources[1].click_type, ClickType::Right);
    assert_eq!(input.sources[1].click_point, IPoint::new(-3, 7));
    assert_eq!(input.sources[2].click_type, ClickType::None);
    assert_eq!(input.sources[2].click_point, IPoint::default());

    assert_eq!(
        *loader.seen.borrow(),
        vec![
            PathBuf::from("/data/session/a_ok.png"),
            PathBuf::from("/data/session/sub/b_ok.png"),
            PathBuf::from("/data/session/c_ok.png"),
        ]
    );
}

#[test]
fn bad_numbers_default_to_zero() {
    let doc = r#"<root>
      <frameRect left="abc" top=" 5 " width="1e3" height="+7"/>
      <pics><pic clickX="12.5" clickY="99999999999">x_ok.png</pic></pics>
    </root>"#;
    let input = parse(doc.as_bytes(), Path::new("/d"), &RecordingLoader::new()).unwrap();
    assert_eq!(input.frame_rect, IRect::new(0, 5, 0, 7));
    assert_eq!(input.sources[0].click_point, IPoint::new(0, 0));
}

#[test]
fn parse_int_rules() {
    assert_eq!(parse_int_or_zero("42"), 42);
    assert_eq!(parse_int_or_zero("-42"), -42);
    assert_eq!(parse_int_or_zero("  8\n"), 8);
    assert_eq!(parse_int_or_zero("0x10"), 0);
    assert_eq!(parse_int_or_zero(""), 0);
}

#[test]
fn missing_elements_give_empty_model() {
    let input = parse(b"<root/>", Path::new("/d"), &RecordingLoader::new()).unwrap();
    assert_eq!(input.frame_rect, IRect::default());
    assert!(input.sources.is_empty());
}

#[test]
fn only_direct_pic_children_of_first_pics_count() {
    let doc = r#"<root>
      <pics>
        <other>skip_ok.png</other>
        <pic>one_ok.png</pic>
        <group><pic>nested_ok.png</pic></group>
      </pics>
      <pics><pic>second_ok.png</pic></pics>
    </root>"#;
    let loader = RecordingLoader::new();
    let input = parse(doc.as_bytes(), Path::new("/d"), &loader).unwrap();
    assert_eq!(input.sources.len(), 1);
    assert_eq!(*loader.seen.borrow(), vec![PathBuf::from("/d/one_ok.png")]);
}

#[test]
fn unloadable_image_is_deferred_not_fatal() {
    let doc = r#"<root><pics><pic type="left">gone.png</pic></pics></root>"#;
    let input = parse(doc.as_bytes(), Path::new("/d"), &RecordingLoader::new()).unwrap();
    assert_eq!(input.sources.len(), 1);
    assert_eq!(input.sources[0].image.dimensions(), (0, 0));
    assert_eq!(input.sources[0].click_type, ClickType::Left);
}

#[test]
fn malformed_documents_are_rejected() {
    let loader = RecordingLoader::new();
    let bad_docs: [&[u8]; 4] = [b"<root><pics>", b"not xml at all", b"", b"<a></b>"];
    for bad in bad_docs {
        let err = parse(bad, Path::new("/d"), &loader).unwrap_err();
        assert!(matches!(err, ParseError::MalformedDocument(_)), "{err}");
    }

    let err = parse(&[0x3c, 0xff, 0xfe, 0x3e], Path::new("/d"), &loader).unwrap_err();
    assert!(matches!(err, ParseError::MalformedDocument(_)));
}

#[test]
fn from_path_resolves_against_document_dir() {
    let dir = tempfile::tempdir().unwrap();
    let doc_path = dir.path().join("session.xml");
    std::fs::write(&doc_path, r#"<root><pics><pic>img_ok.png</pic></pics></root>"#).unwrap();

    let loader = RecordingLoader::new();
    let input = Input::from_path(&doc_path, &loader).unwrap();
    assert_eq!(input.sources.len(), 1);

    let seen = loader.seen.borrow();
    assert_eq!(seen[0].file_name().unwrap(), "img_ok.png");
    assert_eq!(
        std::fs::canonicalize(seen[0].parent().unwrap()).unwrap(),
        std::fs::canonicalize(dir.path()).unwrap()
    );
}

#[test]
fn from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Input::from_path(dir.path().join("nope.xml"), &RecordingLoader::new()).unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
}
