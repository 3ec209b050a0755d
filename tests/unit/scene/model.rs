use super::*;

#[test]
fn click_type_only_matches_exact_attribute() {
    assert_eq!(ClickType::from_attr(Some("left")), ClickType::Left);
    assert_eq!(ClickType::from_attr(Some("right")), ClickType::Right);
    assert_eq!(ClickType::from_attr(Some("Left")), ClickType::None);
    assert_eq!(ClickType::from_attr(Some("middle")), ClickType::None);
    assert_eq!(ClickType::from_attr(Some("")), ClickType::None);
    assert_eq!(ClickType::from_attr(None), ClickType::None);
}

#[test]
fn real_frame_rect_uses_first_source_bounds() {
    let input = Input::new(
        vec![
            SourceItem::new(RgbaImage::new(100, 80), ClickType::None, IPoint::default()),
            SourceItem::new(RgbaImage::new(100, 80), ClickType::None, IPoint::default()),
        ],
        IRect::new(60, 50, 100, 100),
    );
    assert_eq!(input.source_size(), Some(ISize::new(100, 80)));
    assert_eq!(input.real_frame_rect(), Some(IRect::new(60, 50, 40, 30)));
}

#[test]
fn empty_input_has_no_geometry() {
    let input = Input::default();
    assert_eq!(input.source_size(), None);
    assert_eq!(input.real_frame_rect(), None);
    assert!(!input.is_valid());
}
