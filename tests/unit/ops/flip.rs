use super::*;
use crate::foundation::core::Pixel;

fn numbered(w: u32, h: u32) -> Image {
    Image::from_fn(w, h, |row, col| Pixel::new(row as u8, col as u8, 0)).unwrap()
}

#[test]
fn horizontal_mirrors_columns() {
    let src = numbered(3, 2);
    let out = flip(&src, None, FlipAxis::Horizontal).unwrap();
    assert_eq!(out.pixel(0, 0), Pixel::new(0, 2, 0));
    assert_eq!(out.pixel(1, 2), Pixel::new(1, 0, 0));
    assert_eq!(out.pixel(1, 1), Pixel::new(1, 1, 0));
}

#[test]
fn vertical_mirrors_rows() {
    let src = numbered(2, 3);
    let out = flip(&src, None, FlipAxis::Vertical).unwrap();
    assert_eq!(out.pixel(0, 1), Pixel::new(2, 1, 0));
    assert_eq!(out.pixel(2, 0), Pixel::new(0, 0, 0));
}

#[test]
fn flip_twice_is_identity() {
    let src = numbered(5, 4);
    for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
        let once = flip(&src, None, axis).unwrap();
        assert_ne!(once, src);
        assert_eq!(flip(&once, None, axis).unwrap(), src);
    }
}

#[test]
fn single_column_horizontal_flip_is_noop() {
    let src = numbered(1, 4);
    assert_eq!(flip(&src, None, FlipAxis::Horizontal).unwrap(), src);
}

#[test]
fn masked_flip_only_rewrites_black_positions() {
    let src = numbered(2, 1);
    let mask = Image::from_rows(vec![vec![Pixel::BLACK, Pixel::WHITE]]).unwrap();
    let out = flip(&src, Some(&mask), FlipAxis::Horizontal).unwrap();
    assert_eq!(out.pixel(0, 0), src.pixel(0, 1));
    assert_eq!(out.pixel(0, 1), src.pixel(0, 1));
}
