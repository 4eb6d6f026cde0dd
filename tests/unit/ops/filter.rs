use super::*;

fn grey(v: u8) -> Pixel {
    Pixel::new(v, v, v)
}

fn uniform(w: u32, h: u32, v: u8) -> Image {
    Image::filled(w, h, grey(v)).unwrap()
}

#[test]
fn blur_weights_by_neighbor_class() {
    let out = filter(&uniform(3, 3, 100), None, Kernel::Blur).unwrap();
    // 25 + 4 * 12 + 4 * 6
    assert_eq!(out.pixel(1, 1), grey(97));
    // corner: 25 + 2 * 12 + 6
    assert_eq!(out.pixel(0, 0), grey(55));
    // edge: 25 + 3 * 12 + 2 * 6
    assert_eq!(out.pixel(0, 1), grey(73));
}

#[test]
fn blur_truncates_each_term() {
    let out = filter(&uniform(3, 3, 7), None, Kernel::Blur).unwrap();
    // 7/4 + 4 * (7/8) + 4 * (7/16) = 1 + 0 + 0
    assert_eq!(out.pixel(1, 1), grey(1));
}

#[test]
fn sharpen_inner_and_outer_rings() {
    let small = filter(&uniform(3, 3, 100), None, Kernel::Sharpen).unwrap();
    assert_eq!(small.pixel(1, 1), grey(225));
    // 25 + 3 * 25 - 5 * 12
    assert_eq!(small.pixel(0, 0), grey(40));

    let big = filter(&uniform(5, 5, 100), None, Kernel::Sharpen).unwrap();
    // 9 * 25 - 16 * 12
    assert_eq!(big.pixel(2, 2), grey(33));
}

#[test]
fn sharpen_negative_terms_truncate_toward_zero() {
    let out = filter(&uniform(5, 5, 5), None, Kernel::Sharpen).unwrap();
    // 9 * (5/4) + 16 * (5 / -8) = 9 + 0
    assert_eq!(out.pixel(2, 2), grey(9));
}

#[test]
fn sharpen_clamps_both_directions() {
    let bright = filter(&uniform(3, 3, 255), None, Kernel::Sharpen).unwrap();
    assert_eq!(bright.pixel(1, 1), grey(255));

    let dark_center = Image::from_fn(5, 5, |row, col| {
        if (1..=3).contains(&row) && (1..=3).contains(&col) {
            grey(0)
        } else {
            grey(255)
        }
    })
    .unwrap();
    let out = filter(&dark_center, None, Kernel::Sharpen).unwrap();
    assert_eq!(out.pixel(2, 2), grey(0));
}

#[test]
fn divisor_table() {
    assert_eq!(Kernel::Blur.divisor(0, 0), 4);
    assert_eq!(Kernel::Blur.divisor(-1, 0), 8);
    assert_eq!(Kernel::Blur.divisor(1, -1), 16);
    assert_eq!(Kernel::Sharpen.divisor(0, 0), 4);
    assert_eq!(Kernel::Sharpen.divisor(1, 1), 4);
    assert_eq!(Kernel::Sharpen.divisor(2, 0), -8);
    assert_eq!(Kernel::Sharpen.divisor(-2, -2), -8);
}

#[test]
fn masked_filter_reads_source_neighbors() {
    let src = Image::from_fn(3, 3, |row, col| grey(((row * 3 + col) * 20) as u8)).unwrap();
    let mask = Image::from_fn(3, 3, |row, col| {
        if row == 1 && col == 1 { Pixel::BLACK } else { Pixel::WHITE }
    })
    .unwrap();
    let out = filter(&src, Some(&mask), Kernel::Blur).unwrap();
    let full = filter(&src, None, Kernel::Blur).unwrap();
    assert_eq!(out.pixel(1, 1), full.pixel(1, 1));
    assert_eq!(out.pixel(0, 0), src.pixel(0, 0));
}
