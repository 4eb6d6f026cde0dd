use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use anyhow::Context;
use image::ImageEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};

use crate::foundation::core::{Image, Pixel};
use crate::foundation::error::{RasterError, RasterResult};

/// Decode any format the `image` crate recognizes. Alpha is dropped.
pub fn decode_image(bytes: &[u8]) -> RasterResult<Image> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb
        .pixels()
        .map(|p| Pixel::from_channels(p.0))
        .collect::<Vec<_>>();
    Image::new(width, height, pixels)
}

#[tracing::instrument]
pub fn load_image(path: &Path) -> RasterResult<Image> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img = decode_image(&bytes)?;
    tracing::info!(width = img.width(), height = img.height(), "loaded");
    Ok(img)
}

fn to_rgb8(img: &Image) -> RasterResult<image::RgbImage> {
    let raw = img
        .pixels()
        .iter()
        .flat_map(|p| p.channels())
        .collect::<Vec<u8>>();
    image::RgbImage::from_raw(img.width(), img.height(), raw)
        .ok_or_else(|| RasterError::validation("pixel buffer does not match image dimensions"))
}

pub fn encode_png(img: &Image) -> RasterResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(to_rgb8(img)?)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Encode `img` as a binary PPM pixmap (`P6`).
pub fn encode_ppm(img: &Image, out: impl Write) -> RasterResult<()> {
    let rgb = to_rgb8(img)?;
    PnmEncoder::new(out)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(
            rgb.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .context("encode ppm")?;
    Ok(())
}

fn is_ppm(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"))
}

/// Write `img` to `path`, choosing the format from the extension. Parent directories are created.
///
/// `.ppm` always gets a `P6` pixmap header; the generic PNM path would pick PAM.
#[tracing::instrument(skip(img))]
pub fn save_image(path: &Path, img: &Image) -> RasterResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    if is_ppm(path) {
        let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        encode_ppm(img, &mut w)?;
        w.flush()
            .with_context(|| format!("write image '{}'", path.display()))?;
    } else {
        to_rgb8(img)?
            .save(path)
            .with_context(|| format!("write image '{}'", path.display()))?;
    }
    tracing::info!("saved");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/codec.rs"]
mod tests;
