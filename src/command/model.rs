use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ops::color::ColorTransform;
use crate::ops::filter::Kernel;
use crate::ops::flip::FlipAxis;

/// One transform with its parameters.
///
/// Parameters are syntactically valid integers; range checks that depend on the source image (seed
/// count, percentages) run when the operation is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    Color {
        kind: ColorTransform,
    },
    Filter {
        kernel: Kernel,
    },
    Flip {
        axis: FlipAxis,
    },
    Brighten {
        constant: i64,
    },
    Mosaic {
        seeds: i64,
        /// Explicit random seed. `None` falls back to the engine default, then to the clock.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rng_seed: Option<u64>,
    },
    Downscale {
        height_pct: i64,
        width_pct: i64,
    },
}

impl Operation {
    /// Script name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color { kind } => match kind {
                ColorTransform::Red => "red-component",
                ColorTransform::Green => "green-component",
                ColorTransform::Blue => "blue-component",
                ColorTransform::Value => "value-component",
                ColorTransform::Luma => "luma-component",
                ColorTransform::Intensity => "intensity-component",
                ColorTransform::Sepia => "sepia",
            },
            Self::Filter { kernel } => match kernel {
                Kernel::Blur => "blur",
                Kernel::Sharpen => "sharpen",
            },
            Self::Flip { axis } => match axis {
                FlipAxis::Horizontal => "horizontal-flip",
                FlipAxis::Vertical => "vertical-flip",
            },
            Self::Brighten { .. } => "brighten",
            Self::Mosaic { .. } => "mosaic",
            Self::Downscale { .. } => "downscale",
        }
    }

    /// Numeric parameters in script order.
    pub fn params(&self) -> Vec<i64> {
        match *self {
            Self::Brighten { constant } => vec![constant],
            Self::Mosaic { seeds, .. } => vec![seeds],
            Self::Downscale {
                height_pct,
                width_pct,
            } => vec![height_pct, width_pct],
            Self::Color { .. } | Self::Filter { .. } | Self::Flip { .. } => vec![],
        }
    }
}

/// An operation bound to registry names: read `source` (and `mask`), write `dest`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(flatten)]
    pub op: Operation,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    pub dest: String,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.op.name())?;
        for p in self.op.params() {
            write!(f, " {p}")?;
        }
        write!(f, " {}", self.source)?;
        if let Some(mask) = &self.mask {
            write!(f, " {mask}")?;
        }
        write!(f, " {}", self.dest)
    }
}

/// One line of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Load { path: PathBuf, name: String },
    Save { path: PathBuf, name: String },
    Histogram { name: String },
    Apply(Command),
    Quit,
}
