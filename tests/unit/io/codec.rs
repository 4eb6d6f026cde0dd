use std::io::Cursor;

use super::*;

fn sample() -> Image {
    Image::from_rows(vec![
        vec![Pixel::new(255, 0, 0), Pixel::new(0, 255, 0)],
        vec![Pixel::new(0, 0, 255), Pixel::new(12, 34, 56)],
        vec![Pixel::BLACK, Pixel::WHITE],
    ])
    .unwrap()
}

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("rasterlab_codec_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn png_bytes_decode_to_the_same_image() {
    let img = sample();
    let bytes = encode_png(&img).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    assert_eq!(decode_image(&bytes).unwrap(), img);
}

#[test]
fn alpha_is_discarded_on_decode() {
    let rgba = image::RgbaImage::from_raw(1, 1, vec![100, 50, 200, 10]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let img = decode_image(&buf).unwrap();
    assert_eq!(img.dims(), (1, 1));
    assert_eq!(img.pixel(0, 0), Pixel::new(100, 50, 200));
}

#[test]
fn garbage_bytes_are_an_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, RasterError::Other(_)));
}

#[test]
fn save_creates_parent_dirs_and_load_reads_back() {
    let dir = scratch_dir("roundtrip");
    let path = dir.join("nested").join("out.png");
    save_image(&path, &sample()).unwrap();
    assert_eq!(load_image(&path).unwrap(), sample());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn save_picks_format_from_extension() {
    let dir = scratch_dir("ppm");
    let path = dir.join("out.ppm");
    save_image(&path, &sample()).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"P6");
    assert_eq!(load_image(&path).unwrap(), sample());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ppm_is_a_binary_pixmap() {
    let mut buf = Vec::new();
    encode_ppm(&sample(), &mut buf).unwrap();
    assert_eq!(&buf[..2], b"P6");
    let body: Vec<u8> = sample().pixels().iter().flat_map(|p| p.channels()).collect();
    assert!(buf.ends_with(&body));
    assert_eq!(decode_image(&buf).unwrap(), sample());
}

#[test]
fn uppercase_ppm_extension_is_a_pixmap() {
    let dir = scratch_dir("ppm_upper");
    let path = dir.join("OUT.PPM");
    save_image(&path, &sample()).unwrap();
    assert_eq!(&std::fs::read(&path).unwrap()[..2], b"P6");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn load_missing_file_mentions_path() {
    let err = load_image(Path::new("no/such/file.png")).unwrap_err();
    assert!(err.to_string().contains("no/such/file.png"));
}
