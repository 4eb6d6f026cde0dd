use crate::foundation::core::{Image, Pixel};
use crate::foundation::error::RasterResult;
use crate::foundation::math::truncate_channel;
use crate::ops::mask::{Exec, compose_masked_with};

/// Row-major 3x3 matrix applied to `(r, g, b)` column vectors.
pub type ColorMatrix = [[f64; 3]; 3];

const LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];
const THIRD: f64 = 1.0 / 3.0;

/// Per-pixel color transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTransform {
    /// Red component replicated to all channels.
    Red,
    /// Green component replicated to all channels.
    Green,
    /// Blue component replicated to all channels.
    Blue,
    /// `max(r, g, b)` replicated to all channels. Not linear; has no matrix.
    Value,
    /// Rec. 709 luma.
    Luma,
    /// Channel average.
    Intensity,
    /// Sepia tone.
    Sepia,
}

impl ColorTransform {
    pub const ALL: [ColorTransform; 7] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Value,
        Self::Luma,
        Self::Intensity,
        Self::Sepia,
    ];

    /// The linear matrix for this transform, or `None` for [`ColorTransform::Value`].
    pub fn matrix(self) -> Option<ColorMatrix> {
        let m = match self {
            Self::Red => [[1.0, 0.0, 0.0]; 3],
            Self::Green => [[0.0, 1.0, 0.0]; 3],
            Self::Blue => [[0.0, 0.0, 1.0]; 3],
            Self::Luma => [LUMA; 3],
            Self::Intensity => [[THIRD; 3]; 3],
            Self::Sepia => [
                [0.393, 0.769, 0.189],
                [0.349, 0.686, 0.168],
                [0.272, 0.534, 0.131],
            ],
            Self::Value => return None,
        };
        Some(m)
    }

    /// Transform a single pixel.
    pub fn apply_pixel(self, px: Pixel) -> Pixel {
        match self.matrix() {
            Some(m) => apply_matrix(&m, px),
            None => {
                let v = px.r.max(px.g).max(px.b);
                Pixel::new(v, v, v)
            }
        }
    }
}

/// `clamp(trunc(M · (r, g, b)))` per output channel.
pub fn apply_matrix(m: &ColorMatrix, px: Pixel) -> Pixel {
    let (r, g, b) = (f64::from(px.r), f64::from(px.g), f64::from(px.b));
    let row = |k: [f64; 3]| truncate_channel(r * k[0] + g * k[1] + b * k[2]);
    Pixel::new(row(m[0]), row(m[1]), row(m[2]))
}

/// Apply a color transform to `src`, restricted to the black region of `mask` when present.
pub fn color_transform(
    src: &Image,
    mask: Option<&Image>,
    kind: ColorTransform,
) -> RasterResult<Image> {
    color_transform_with(src, mask, kind, Exec::Serial)
}

pub(crate) fn color_transform_with(
    src: &Image,
    mask: Option<&Image>,
    kind: ColorTransform,
    exec: Exec,
) -> RasterResult<Image> {
    compose_masked_with(src, mask, exec, |img, row, col| {
        kind.apply_pixel(img.pixel(row, col))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/ops/color.rs"]
mod tests;
