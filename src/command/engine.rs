use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::command::model::{Command, Operation};
use crate::foundation::core::Image;
use crate::foundation::error::{RasterError, RasterResult};
use crate::ops::brighten::brighten_with;
use crate::ops::color::color_transform_with;
use crate::ops::downscale::downscale_with;
use crate::ops::filter::filter_with;
use crate::ops::flip::flip_with;
use crate::ops::mask::Exec;
use crate::ops::mosaic::mosaic_with;
use crate::registry::store::ImageRegistry;

/// Options controlling how an [`Engine`] runs operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOpts {
    /// Compute output rows on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Random seed for mosaic operations that do not carry their own.
    pub mosaic_seed: Option<u64>,
}

impl EngineOpts {
    /// Read options from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> RasterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RasterError::validation(format!("open engine config '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            RasterError::validation(format!("parse engine config '{}': {e}", path.display()))
        })
    }
}

/// Dispatches [`Operation`]s into the transforms and records results in a registry.
///
/// The engine holds no images itself. With `parallel` set it owns a rayon pool for its lifetime, so
/// repeated commands do not pay pool construction.
#[derive(Debug)]
pub struct Engine {
    opts: EngineOpts,
    pool: Option<rayon::ThreadPool>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            opts: EngineOpts::default(),
            pool: None,
        }
    }
}

impl Engine {
    pub fn new(opts: EngineOpts) -> RasterResult<Self> {
        if opts.threads == Some(0) {
            return Err(RasterError::validation("'threads' must be >= 1 when set"));
        }
        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            None
        };
        Ok(Self { opts, pool })
    }

    /// Run `op` on `src` (optionally masked) without touching any registry.
    pub fn apply(&self, op: &Operation, src: &Image, mask: Option<&Image>) -> RasterResult<Image> {
        let run = |exec| dispatch(op, src, mask, exec, self.opts.mosaic_seed);
        match &self.pool {
            Some(pool) => pool.install(|| run(Exec::Parallel)),
            None => run(Exec::Serial),
        }
    }

    /// Resolve `cmd`'s names, apply its operation and store the result under `cmd.dest`.
    ///
    /// The registry is only written after the operation succeeds.
    #[tracing::instrument(
        skip(self, registry, cmd),
        fields(op = cmd.op.name(), source = %cmd.source, dest = %cmd.dest)
    )]
    pub fn execute(&self, registry: &mut ImageRegistry, cmd: &Command) -> RasterResult<Arc<Image>> {
        let src = registry.find(&cmd.source)?;
        let mask = cmd.mask.as_deref().map(|m| registry.find(m)).transpose()?;

        let out = Arc::new(self.apply(&cmd.op, &src, mask.as_deref())?);
        tracing::debug!(width = out.width(), height = out.height(), "applied");
        registry.add(cmd.dest.clone(), Arc::clone(&out));
        Ok(out)
    }
}

fn dispatch(
    op: &Operation,
    src: &Image,
    mask: Option<&Image>,
    exec: Exec,
    default_seed: Option<u64>,
) -> RasterResult<Image> {
    match *op {
        Operation::Color { kind } => color_transform_with(src, mask, kind, exec),
        Operation::Filter { kernel } => filter_with(src, mask, kernel, exec),
        Operation::Flip { axis } => flip_with(src, mask, axis, exec),
        Operation::Brighten { constant } => brighten_with(src, mask, constant, exec),
        Operation::Mosaic { seeds, rng_seed } => {
            mosaic_with(src, mask, seeds, rng_seed.or(default_seed), exec)
        }
        Operation::Downscale {
            height_pct,
            width_pct,
        } => downscale_with(src, mask, height_pct, width_pct, exec),
    }
}

fn build_thread_pool(threads: Option<usize>) -> RasterResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RasterError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/command/engine.rs"]
mod tests;
