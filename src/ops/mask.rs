use rayon::prelude::*;

use crate::foundation::core::{Image, Pixel};
use crate::foundation::error::{RasterError, RasterResult};

/// How output rows are computed.
///
/// Both modes produce bit-identical images. `Parallel` splits rows across the rayon pool that is
/// current when the operation runs (see [`crate::Engine`] for a dedicated pool).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Exec {
    #[default]
    Serial,
    Parallel,
}

/// Fail with [`RasterError::DimensionMismatch`] unless `mask` is absent or sized like `src`.
pub fn check_mask(src: &Image, mask: Option<&Image>) -> RasterResult<()> {
    match mask {
        Some(m) if !m.same_dims(src) => Err(RasterError::dimension_mismatch(src.dims(), m.dims())),
        _ => Ok(()),
    }
}

/// Apply `f` at every position of `src` where the mask is pure black, copying `src` elsewhere.
///
/// With no mask, `f` applies everywhere. The mask check runs before any pixel is computed, so a
/// mismatched mask never yields a partial image.
pub fn compose_masked<F>(src: &Image, mask: Option<&Image>, f: F) -> RasterResult<Image>
where
    F: Fn(&Image, u32, u32) -> Pixel + Sync,
{
    compose_masked_with(src, mask, Exec::Serial, f)
}

/// [`compose_masked`] with an explicit row executor.
pub fn compose_masked_with<F>(
    src: &Image,
    mask: Option<&Image>,
    exec: Exec,
    f: F,
) -> RasterResult<Image>
where
    F: Fn(&Image, u32, u32) -> Pixel + Sync,
{
    check_mask(src, mask)?;

    let (width, height) = src.dims();
    let w = width as usize;
    let mut out = vec![Pixel::BLACK; w * height as usize];

    let fill_row = |row: u32, dst: &mut [Pixel]| {
        for (col, px) in (0..width).zip(dst.iter_mut()) {
            let applies = mask.is_none_or(|m| m.pixel(row, col).is_black());
            *px = if applies {
                f(src, row, col)
            } else {
                src.pixel(row, col)
            };
        }
    };

    match exec {
        Exec::Serial => out
            .chunks_exact_mut(w)
            .enumerate()
            .for_each(|(row, dst)| fill_row(row as u32, dst)),
        Exec::Parallel => out
            .par_chunks_exact_mut(w)
            .enumerate()
            .for_each(|(row, dst)| fill_row(row as u32, dst)),
    }

    Image::new(width, height, out)
}

#[cfg(test)]
#[path = "../../tests/unit/ops/mask.rs"]
mod tests;
