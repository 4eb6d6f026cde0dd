use super::*;
use crate::foundation::core::Pixel;

fn solid(px: Pixel) -> Image {
    Image::filled(2, 2, px).unwrap()
}

#[test]
fn find_missing_is_not_found() {
    let reg = ImageRegistry::new();
    let err = reg.find("koala").unwrap_err();
    assert!(matches!(err, RasterError::NotFound(ref n) if n == "koala"));
}

#[test]
fn add_overwrites_without_merge() {
    let mut reg = ImageRegistry::new();
    assert!(reg.add("a", solid(Pixel::BLACK)).is_none());
    let prev = reg.add("a", solid(Pixel::WHITE));

    assert_eq!(prev.unwrap().pixel(0, 0), Pixel::BLACK);
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.find("a").unwrap().pixel(1, 1), Pixel::WHITE);
}

#[test]
fn find_shares_the_stored_image() {
    let mut reg = ImageRegistry::new();
    reg.add("a", solid(Pixel::WHITE));
    let x = reg.find("a").unwrap();
    let y = reg.find("a").unwrap();
    assert!(Arc::ptr_eq(&x, &y));
}

#[test]
fn names_are_sorted() {
    let mut reg = ImageRegistry::new();
    reg.add("b", solid(Pixel::WHITE));
    reg.add("a", solid(Pixel::WHITE));
    assert!(reg.contains("a"));
    assert_eq!(reg.names().collect::<Vec<_>>(), vec!["a", "b"]);
}
