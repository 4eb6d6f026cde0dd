use rayon::prelude::*;

use crate::foundation::core::{Image, Pixel};
use crate::foundation::error::{RasterError, RasterResult};
use crate::foundation::math::{lerp, truncate_channel};
use crate::ops::mask::{Exec, check_mask};

/// A source coordinate along one axis, split into its neighboring indices and fractional offset.
#[derive(Clone, Copy, Debug)]
struct AxisSample {
    floor: u32,
    ceil: u32,
    frac: f64,
}

impl AxisSample {
    /// Map target index `i` back to the source axis at `pct` percent scale: `i / (pct / 100)`.
    fn new(i: u32, pct: u32, src_len: u32) -> Self {
        let num = u64::from(i) * 100;
        let den = u64::from(pct);
        let floor = (num / den) as u32;
        let rem = num % den;
        let ceil = if rem == 0 { floor } else { (floor + 1).min(src_len - 1) };
        Self {
            floor,
            ceil,
            frac: rem as f64 / den as f64,
        }
    }

    fn is_exact(self) -> bool {
        self.floor == self.ceil
    }
}

/// Target size for `src_len` at `pct` percent, truncated.
pub fn scaled_len(src_len: u32, pct: u32) -> u32 {
    ((u64::from(src_len) * u64::from(pct)) / 100) as u32
}

fn validate_pct(axis: &str, pct: i64) -> RasterResult<u32> {
    if !(1..=100).contains(&pct) {
        return Err(RasterError::out_of_range(format!(
            "downscale {axis} percentage must be between 1 and 100, got {pct}"
        )));
    }
    Ok(pct as u32)
}

/// Resample `src` down to `height_pct`% x `width_pct`% of its size.
///
/// Target positions that map onto whole source coordinates copy that pixel; all others blend the
/// four surrounding source pixels and truncate. The blend builds a top edge from the top-left and
/// top-right pixels and a bottom edge from the bottom pair, both weighted by the row fraction, then
/// mixes the two edges by the column fraction.
///
/// The mask, when present, must match `src` but does not restrict the result: every output pixel
/// is resampled.
pub fn downscale(
    src: &Image,
    mask: Option<&Image>,
    height_pct: i64,
    width_pct: i64,
) -> RasterResult<Image> {
    downscale_with(src, mask, height_pct, width_pct, Exec::Serial)
}

pub(crate) fn downscale_with(
    src: &Image,
    mask: Option<&Image>,
    height_pct: i64,
    width_pct: i64,
    exec: Exec,
) -> RasterResult<Image> {
    check_mask(src, mask)?;
    let hp = validate_pct("height", height_pct)?;
    let wp = validate_pct("width", width_pct)?;

    let out_h = scaled_len(src.height(), hp);
    let out_w = scaled_len(src.width(), wp);
    if out_h == 0 || out_w == 0 {
        return Err(RasterError::out_of_range(format!(
            "downscale of {}x{} to {width_pct}% x {height_pct}% leaves no pixels",
            src.width(),
            src.height()
        )));
    }

    let cols: Vec<AxisSample> = (0..out_w)
        .map(|j| AxisSample::new(j, wp, src.width()))
        .collect();

    let fill_row = |i: u32, dst: &mut [Pixel]| {
        let r = AxisSample::new(i, hp, src.height());
        for (px, &c) in dst.iter_mut().zip(&cols) {
            *px = sample(src, r, c);
        }
    };

    let w = out_w as usize;
    let mut out = vec![Pixel::BLACK; w * out_h as usize];
    match exec {
        Exec::Serial => out
            .chunks_exact_mut(w)
            .enumerate()
            .for_each(|(i, dst)| fill_row(i as u32, dst)),
        Exec::Parallel => out
            .par_chunks_exact_mut(w)
            .enumerate()
            .for_each(|(i, dst)| fill_row(i as u32, dst)),
    }

    Image::new(out_w, out_h, out)
}

fn sample(src: &Image, r: AxisSample, c: AxisSample) -> Pixel {
    if r.is_exact() && c.is_exact() {
        return src.pixel(r.floor, c.floor);
    }

    let tl = src.pixel(r.floor, c.floor).channels();
    let tr = src.pixel(r.floor, c.ceil).channels();
    let bl = src.pixel(r.ceil, c.floor).channels();
    let br = src.pixel(r.ceil, c.ceil).channels();

    let channel = |k: usize| {
        // edges pair left/right corners under the row fraction; edges mix under the column fraction
        let top = lerp(f64::from(tl[k]), f64::from(tr[k]), r.frac);
        let bottom = lerp(f64::from(bl[k]), f64::from(br[k]), r.frac);
        truncate_channel(lerp(top, bottom, c.frac))
    };
    Pixel::new(channel(0), channel(1), channel(2))
}

#[cfg(test)]
#[path = "../../tests/unit/ops/downscale.rs"]
mod tests;
