use crate::foundation::core::Image;
use crate::foundation::error::RasterResult;
use crate::ops::mask::{Exec, compose_masked_with};

/// Mirror axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlipAxis {
    /// Left-right mirror: `R[row][col] = S[row][width - 1 - col]`.
    Horizontal,
    /// Top-bottom mirror: `R[row][col] = S[height - 1 - row][col]`.
    Vertical,
}

/// Mirror `src` along `axis`.
///
/// With a mask, output position `(row, col)` takes the mirrored source pixel only where the mask is
/// black at `(row, col)`.
pub fn flip(src: &Image, mask: Option<&Image>, axis: FlipAxis) -> RasterResult<Image> {
    flip_with(src, mask, axis, Exec::Serial)
}

pub(crate) fn flip_with(
    src: &Image,
    mask: Option<&Image>,
    axis: FlipAxis,
    exec: Exec,
) -> RasterResult<Image> {
    compose_masked_with(src, mask, exec, |img, row, col| match axis {
        FlipAxis::Horizontal => img.pixel(row, img.width() - 1 - col),
        FlipAxis::Vertical => img.pixel(img.height() - 1 - row, col),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/ops/flip.rs"]
mod tests;
