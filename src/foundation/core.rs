use crate::foundation::error::{RasterError, RasterResult};
use crate::foundation::math::clamp_channel;

/// A single RGB color sample.
///
/// Channels are stored as `u8`, so the `[0, 255]` bound holds by construction. Arithmetic that can
/// leave the range goes through [`Pixel::clamped`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a pixel from wide integer channels, clamping each one into `[0, 255]` independently.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    pub const fn from_channels(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `true` when all three channels are zero. This is the mask predicate.
    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Immutable row-major grid of [`Pixel`]s.
///
/// Width and height are positive and fixed at construction. Operations never mutate an `Image`;
/// they build a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Build an image from row-major pixels.
    ///
    /// Fails with [`RasterError::Validation`] when either dimension is zero or `pixels.len()` is not
    /// `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> RasterResult<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::validation(format!(
                "image {width}x{height} expects {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image of uniform color.
    pub fn filled(width: u32, height: u32, px: Pixel) -> RasterResult<Self> {
        let n = pixel_count(width, height)?;
        Self::new(width, height, vec![px; n])
    }

    /// Build an image by evaluating `f(row, col)` for every position in row-major order.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Pixel,
    ) -> RasterResult<Self> {
        let n = pixel_count(width, height)?;
        let mut pixels = Vec::with_capacity(n);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Build an image from a list of equally sized rows.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> RasterResult<Self> {
        let height = u32::try_from(rows.len())
            .map_err(|_| RasterError::validation("image height overflows u32"))?;
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return Err(RasterError::validation("image rows must all have the same length"));
        }
        let width = u32::try_from(width)
            .map_err(|_| RasterError::validation("image width overflows u32"))?;
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn same_dims(&self, other: &Image) -> bool {
        self.dims() == other.dims()
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Out-of-bounds access is a programming error and panics.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> Pixel {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        self.pixels[(row as usize) * (self.width as usize) + (col as usize)]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width as usize)
    }
}

fn pixel_count(width: u32, height: u32) -> RasterResult<usize> {
    if width == 0 || height == 0 {
        return Err(RasterError::validation(format!(
            "image dimensions must be positive, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| RasterError::validation("image pixel count overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
