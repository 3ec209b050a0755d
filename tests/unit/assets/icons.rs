use super::*;

#[test]
fn builtin_icons_are_centred_on_the_hotspot() {
    let icons = IconSet::builtin();
    for ty in [ClickType::Left, ClickType::Right] {
        let icon = icons.get(ty).unwrap();
        assert_eq!(icon.dimensions(), (BUILTIN_ICON_SIZE, BUILTIN_ICON_SIZE));
        assert_eq!(*icon.get_pixel(5, 5), CENTER);
        assert_eq!(icon.get_pixel(0, 0).0[3], 0);
    }
    assert_ne!(
        icons.get(ClickType::Left).unwrap().get_pixel(5, 4),
        icons.get(ClickType::Right).unwrap().get_pixel(5, 4)
    );
}

#[test]
fn none_never_has_an_icon() {
    let icons = IconSet::builtin().with_icon(ClickType::None, RgbaImage::new(3, 3));
    assert!(icons.get(ClickType::None).is_none());
    assert!(IconSet::empty().get(ClickType::Left).is_none());
}

#[test]
fn with_icon_replaces_one_slot() {
    let custom = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
    let icons = IconSet::builtin().with_icon(ClickType::Right, custom.clone());
    assert_eq!(icons.get(ClickType::Right), Some(&custom));
    assert_eq!(
        icons.get(ClickType::Left).unwrap().dimensions(),
        (BUILTIN_ICON_SIZE, BUILTIN_ICON_SIZE)
    );
}

#[test]
fn from_files_uses_loader_and_keeps_builtin_fallback() {
    let loader = |p: &Path| -> anyhow::Result<RgbaImage> {
        if p.ends_with("left.png") {
            Ok(RgbaImage::new(7, 7))
        } else {
            anyhow::bail!("no such icon")
        }
    };

    let icons = IconSet::from_files(Some(Path::new("left.png")), None, &loader).unwrap();
    assert_eq!(icons.get(ClickType::Left).unwrap().dimensions(), (7, 7));
    assert_eq!(
        icons.get(ClickType::Right).unwrap().dimensions(),
        (BUILTIN_ICON_SIZE, BUILTIN_ICON_SIZE)
    );

    let err = IconSet::from_files(None, Some(Path::new("right.png")), &loader).unwrap_err();
    assert!(format!("{err:#}").contains("right-click icon"));
}
