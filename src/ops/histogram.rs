use serde::{Deserialize, Serialize};

use crate::foundation::core::Image;

/// Per-channel value counts of an image.
///
/// `intensity` buckets each pixel by `(r + g + b) / 3`, truncated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    pub red: Vec<u32>,
    pub green: Vec<u32>,
    pub blue: Vec<u32>,
    pub intensity: Vec<u32>,
}

impl Histogram {
    /// Largest bucket across all four tables, used to normalize plots.
    pub fn peak(&self) -> u32 {
        [&self.red, &self.green, &self.blue, &self.intensity]
            .into_iter()
            .flat_map(|t| t.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

pub fn histogram(img: &Image) -> Histogram {
    let mut h = Histogram {
        red: vec![0; 256],
        green: vec![0; 256],
        blue: vec![0; 256],
        intensity: vec![0; 256],
    };
    for px in img.pixels() {
        h.red[px.r as usize] += 1;
        h.green[px.g as usize] += 1;
        h.blue[px.b as usize] += 1;
        let i = (u32::from(px.r) + u32::from(px.g) + u32::from(px.b)) / 3;
        h.intensity[i as usize] += 1;
    }
    h
}

#[cfg(test)]
#[path = "../../tests/unit/ops/histogram.rs"]
mod tests;
