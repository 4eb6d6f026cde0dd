use super::*;

#[test]
fn pixel_clamped_bounds_each_channel_independently() {
    assert_eq!(Pixel::clamped(-5, 300, 128), Pixel::new(0, 255, 128));
    assert_eq!(Pixel::clamped(i64::MIN, i64::MAX, 0), Pixel::new(0, 255, 0));
}

#[test]
fn only_pure_black_is_black() {
    assert!(Pixel::BLACK.is_black());
    assert!(!Pixel::new(0, 0, 1).is_black());
    assert!(!Pixel::new(1, 0, 0).is_black());
}

#[test]
fn image_new_rejects_bad_shapes() {
    assert!(Image::new(0, 2, vec![]).is_err());
    assert!(Image::new(2, 2, vec![Pixel::BLACK; 3]).is_err());
    assert!(Image::new(2, 2, vec![Pixel::BLACK; 4]).is_ok());
}

#[test]
fn pixel_lookup_is_row_major() {
    let img = Image::from_fn(3, 2, |row, col| Pixel::new(row as u8, col as u8, 0)).unwrap();
    assert_eq!(img.dims(), (3, 2));
    assert_eq!(img.pixel(1, 2), Pixel::new(1, 2, 0));
    assert_eq!(img.pixels()[5], Pixel::new(1, 2, 0));
    assert_eq!(img.rows().count(), 2);
}

#[test]
fn from_rows_requires_rectangular_input() {
    let ok = Image::from_rows(vec![vec![Pixel::BLACK, Pixel::WHITE], vec![Pixel::WHITE; 2]]);
    assert_eq!(ok.unwrap().dims(), (2, 2));

    let ragged = Image::from_rows(vec![vec![Pixel::BLACK, Pixel::WHITE], vec![Pixel::WHITE]]);
    assert!(ragged.is_err());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn pixel_lookup_out_of_bounds_panics() {
    let img = Image::filled(2, 2, Pixel::WHITE).unwrap();
    let _ = img.pixel(0, 2);
}
