use crate::foundation::core::{Image, Pixel};
use crate::foundation::error::RasterResult;
use crate::ops::mask::{Exec, compose_masked_with};

/// Convolution kernels.
///
/// Every kernel is square and odd-sized, centered on the target pixel. Weights are `1 / divisor`
/// and each neighbor's channel is divided by its own divisor (integer division, truncating toward
/// zero) before accumulation. Neighbors outside the image contribute nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kernel {
    /// 3x3: center 1/4, orthogonal 1/8, diagonal 1/16.
    Blur,
    /// 5x5: inner 3x3 (center included) 1/4, outer ring -1/8.
    Sharpen,
}

impl Kernel {
    pub fn radius(self) -> u32 {
        match self {
            Self::Blur => 1,
            Self::Sharpen => 2,
        }
    }

    /// Divisor for the neighbor at row/column offset `(dr, dc)` from the center.
    pub fn divisor(self, dr: i64, dc: i64) -> i64 {
        match self {
            Self::Blur => match (dr == 0, dc == 0) {
                (true, true) => 4,
                (true, false) | (false, true) => 8,
                (false, false) => 16,
            },
            Self::Sharpen => {
                if dr.abs().max(dc.abs()) <= 1 {
                    4
                } else {
                    -8
                }
            }
        }
    }

    /// Convolve the neighborhood of `(row, col)` in `img`.
    pub fn apply_at(self, img: &Image, row: u32, col: u32) -> Pixel {
        let r = i64::from(self.radius());
        let (h, w) = (i64::from(img.height()), i64::from(img.width()));
        let mut acc = [0i64; 3];

        for dr in -r..=r {
            let y = i64::from(row) + dr;
            if y < 0 || y >= h {
                continue;
            }
            for dc in -r..=r {
                let x = i64::from(col) + dc;
                if x < 0 || x >= w {
                    continue;
                }
                let div = self.divisor(dr, dc);
                let px = img.pixel(y as u32, x as u32);
                for (a, c) in acc.iter_mut().zip(px.channels()) {
                    *a += i64::from(c) / div;
                }
            }
        }

        Pixel::clamped(acc[0], acc[1], acc[2])
    }
}

/// Convolve `src` with `kernel`, restricted to the black region of `mask` when present.
///
/// Masked-out pixels are copied, but masked-in pixels still read their unfiltered neighbors from
/// `src`.
pub fn filter(src: &Image, mask: Option<&Image>, kernel: Kernel) -> RasterResult<Image> {
    filter_with(src, mask, kernel, Exec::Serial)
}

pub(crate) fn filter_with(
    src: &Image,
    mask: Option<&Image>,
    kernel: Kernel,
    exec: Exec,
) -> RasterResult<Image> {
    compose_masked_with(src, mask, exec, |img, row, col| {
        kernel.apply_at(img, row, col)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/ops/filter.rs"]
mod tests;
