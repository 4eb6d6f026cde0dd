//! rasterlab is an in-memory raster image transformation engine.
//!
//! Images are rectangular grids of 8-bit RGB [`Pixel`]s held in an [`ImageRegistry`] under string
//! names. Transforms read a source image (and optionally a mask) and produce a new image; the
//! registry only changes when a transform succeeds.
//!
//! # Transforms
//!
//! - **Color**: channel isolation, value, luma, intensity and sepia ([`ColorTransform`])
//! - **Filter**: 3x3 blur and 5x5 sharpen convolution ([`Kernel`])
//! - **Flip**: horizontal or vertical mirror ([`FlipAxis`])
//! - **Brighten**: add a constant to every channel
//! - **Mosaic**: Voronoi quantization around random seed points
//! - **Downscale**: percentage-based bilinear resampling
//!
//! Every transform except downscale accepts a mask: output pixels are transformed where the mask is
//! pure black and copied from the source elsewhere ([`compose_masked`]).
//!
//! # Driving the engine
//!
//! [`Operation`] is a closed set of transforms with typed parameters. An [`Engine`] dispatches a
//! [`Command`] against a registry, optionally splitting rows across a rayon pool. A [`Session`]
//! runs line-oriented scripts (`load`, `save`, `<op> ...`, `histogram`) parsed by
//! [`parse_statement`]. File formats are delegated to the `image` crate in [`load_image`] and
//! [`save_image`].
#![forbid(unsafe_code)]

mod command;
mod foundation;
mod io;
mod ops;
mod registry;

pub use crate::foundation::core::{Image, Pixel};
pub use crate::foundation::error::{RasterError, RasterResult};

pub use crate::registry::store::ImageRegistry;

pub use crate::ops::brighten::brighten;
pub use crate::ops::color::{ColorMatrix, ColorTransform, apply_matrix, color_transform};
pub use crate::ops::downscale::{downscale, scaled_len};
pub use crate::ops::filter::{Kernel, filter};
pub use crate::ops::flip::{FlipAxis, flip};
pub use crate::ops::histogram::{Histogram, histogram};
pub use crate::ops::mask::{Exec, check_mask, compose_masked, compose_masked_with};
pub use crate::ops::mosaic::{
    Seed, fresh_rng_seed, mosaic, mosaic_seeds, mosaic_with_seeds, nearest_seed,
};

pub use crate::command::engine::{Engine, EngineOpts};
pub use crate::command::model::{Command, Operation, Statement};
pub use crate::command::parse::{parse_command, parse_operation, parse_statement};
pub use crate::command::session::{Outcome, Session};

pub use crate::io::codec::{decode_image, encode_png, encode_ppm, load_image, save_image};
