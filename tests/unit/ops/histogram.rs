use super::*;
use crate::foundation::core::Pixel;

#[test]
fn counts_every_pixel_once_per_table() {
    let img = Image::from_rows(vec![
        vec![Pixel::new(0, 0, 0), Pixel::new(255, 255, 255)],
        vec![Pixel::new(10, 20, 31), Pixel::new(10, 0, 0)],
    ])
    .unwrap();
    let h = histogram(&img);

    for table in [&h.red, &h.green, &h.blue, &h.intensity] {
        assert_eq!(table.len(), 256);
        assert_eq!(table.iter().sum::<u32>(), 4);
    }
    assert_eq!(h.red[10], 2);
    assert_eq!(h.green[0], 2);
    assert_eq!(h.blue[31], 1);
    assert_eq!(h.intensity[20], 1);
    assert_eq!(h.intensity[3], 1);
    assert_eq!(h.intensity[255], 1);
    assert_eq!(h.peak(), 2);
}

#[test]
fn serializes_as_json_tables() {
    let img = Image::filled(1, 1, Pixel::WHITE).unwrap();
    let v = serde_json::to_value(histogram(&img)).unwrap();
    assert_eq!(v["red"][255], 1);
    assert_eq!(v["intensity"].as_array().unwrap().len(), 256);
}
