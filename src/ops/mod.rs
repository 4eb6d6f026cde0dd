pub(crate) mod brighten;
pub(crate) mod color;
pub(crate) mod downscale;
pub(crate) mod filter;
pub(crate) mod flip;
pub(crate) mod histogram;
pub(crate) mod mask;
pub(crate) mod mosaic;
