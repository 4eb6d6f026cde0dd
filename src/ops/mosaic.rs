use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::core::Image;
use crate::foundation::error::{RasterError, RasterResult};
use crate::ops::mask::{Exec, check_mask, compose_masked_with};

/// A seed position in `(row, col)` space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Seed {
    pub row: u32,
    pub col: u32,
}

/// Draw `count` distinct seed positions inside a `width x height` grid.
///
/// Positions are sampled uniformly; a duplicate draw is rejected and redrawn, so the result is
/// sampling without replacement in draw order. The same `rng_seed` always yields the same list.
///
/// Fails with [`RasterError::ParameterOutOfRange`] unless `1 <= count <= width * height`.
pub fn mosaic_seeds(
    width: u32,
    height: u32,
    count: i64,
    rng_seed: u64,
) -> RasterResult<Vec<Seed>> {
    let total = u64::from(width) * u64::from(height);
    let count = u64::try_from(count)
        .ok()
        .filter(|&c| c >= 1 && c <= total)
        .ok_or_else(|| {
            RasterError::out_of_range(format!(
                "mosaic seed count must be between 1 and {total}, got {count}"
            ))
        })?;
    let count = usize::try_from(count)
        .map_err(|_| RasterError::out_of_range("mosaic seed count exceeds address space"))?;

    let mut rng = StdRng::seed_from_u64(rng_seed);
    let mut seen = HashSet::with_capacity(count);
    let mut seeds = Vec::with_capacity(count);
    while seeds.len() < count {
        let seed = Seed {
            row: rng.random_range(0..height),
            col: rng.random_range(0..width),
        };
        if seen.insert(seed) {
            seeds.push(seed);
        }
    }
    Ok(seeds)
}

/// Index of the seed nearest to `(row, col)` by Euclidean distance.
///
/// Ties go to the earliest seed in `seeds`. Returns `None` only for an empty list.
pub fn nearest_seed(seeds: &[Seed], row: u32, col: u32) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (idx, s) in seeds.iter().enumerate() {
        let dr = u64::from(s.row.abs_diff(row));
        let dc = u64::from(s.col.abs_diff(col));
        // squared distance orders the same as the true distance
        let d = dr * dr + dc * dc;
        if d == 0 {
            return Some(idx);
        }
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((idx, d));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Time-derived seed for callers that do not supply one.
pub fn fresh_rng_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Quantize `src` into the Voronoi cells of `seed_count` random seeds.
///
/// Each pixel takes the source color at its nearest seed. `rng_seed` makes the seed list
/// reproducible; `None` draws a fresh time-derived seed.
pub fn mosaic(
    src: &Image,
    mask: Option<&Image>,
    seed_count: i64,
    rng_seed: Option<u64>,
) -> RasterResult<Image> {
    mosaic_with(src, mask, seed_count, rng_seed, Exec::Serial)
}

pub(crate) fn mosaic_with(
    src: &Image,
    mask: Option<&Image>,
    seed_count: i64,
    rng_seed: Option<u64>,
    exec: Exec,
) -> RasterResult<Image> {
    check_mask(src, mask)?;
    let (width, height) = src.dims();
    let seeds = mosaic_seeds(
        width,
        height,
        seed_count,
        rng_seed.unwrap_or_else(fresh_rng_seed),
    )?;
    assign_seeds(src, mask, &seeds, exec)
}

/// Quantize `src` around an explicit seed list instead of a random draw.
///
/// Earlier seeds win distance ties. Fails with [`RasterError::ParameterOutOfRange`] when `seeds`
/// is empty or a seed lies outside `src`.
pub fn mosaic_with_seeds(
    src: &Image,
    mask: Option<&Image>,
    seeds: &[Seed],
) -> RasterResult<Image> {
    check_mask(src, mask)?;
    if seeds.is_empty() {
        return Err(RasterError::out_of_range("mosaic needs at least one seed"));
    }
    if let Some(s) = seeds
        .iter()
        .find(|s| s.row >= src.height() || s.col >= src.width())
    {
        return Err(RasterError::out_of_range(format!(
            "mosaic seed ({}, {}) lies outside {}x{}",
            s.row,
            s.col,
            src.width(),
            src.height()
        )));
    }
    assign_seeds(src, mask, seeds, Exec::Serial)
}

fn assign_seeds(
    src: &Image,
    mask: Option<&Image>,
    seeds: &[Seed],
    exec: Exec,
) -> RasterResult<Image> {
    let width = src.width() as usize;

    // index + 1 of the first seed at each position, 0 elsewhere
    let mut seed_at = vec![0usize; src.pixels().len()];
    for (idx, s) in seeds.iter().enumerate().rev() {
        seed_at[(s.row as usize) * width + s.col as usize] = idx + 1;
    }

    compose_masked_with(src, mask, exec, |img, row, col| {
        let own = seed_at[(row as usize) * width + col as usize];
        let idx = match own {
            0 => nearest_seed(seeds, row, col).unwrap_or(0),
            n => n - 1,
        };
        let s = seeds[idx];
        img.pixel(s.row, s.col)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/ops/mosaic.rs"]
mod tests;
