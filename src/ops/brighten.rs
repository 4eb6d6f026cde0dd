use crate::foundation::core::{Image, Pixel};
use crate::foundation::error::RasterResult;
use crate::ops::mask::{Exec, compose_masked_with};

/// Add `constant` to every channel, clamping each channel into `[0, 255]` on its own.
///
/// Negative constants darken. Any `i64` is accepted; large magnitudes saturate.
pub fn brighten(src: &Image, mask: Option<&Image>, constant: i64) -> RasterResult<Image> {
    brighten_with(src, mask, constant, Exec::Serial)
}

pub(crate) fn brighten_with(
    src: &Image,
    mask: Option<&Image>,
    constant: i64,
    exec: Exec,
) -> RasterResult<Image> {
    compose_masked_with(src, mask, exec, |img, row, col| {
        let px = img.pixel(row, col);
        Pixel::clamped(
            i64::from(px.r).saturating_add(constant),
            i64::from(px.g).saturating_add(constant),
            i64::from(px.b).saturating_add(constant),
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/ops/brighten.rs"]
mod tests;
