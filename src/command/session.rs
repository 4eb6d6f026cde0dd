use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::command::engine::Engine;
use crate::command::model::Statement;
use crate::command::parse::parse_statement;
use crate::foundation::error::RasterResult;
use crate::io::codec::{load_image, save_image};
use crate::ops::histogram::{Histogram, histogram};
use crate::registry::store::ImageRegistry;

/// What a successfully executed statement did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Loaded { name: String },
    Saved { path: PathBuf },
    Applied { dest: String },
    Histogram(Histogram),
    Quit,
}

/// A registry plus an engine, driven one statement at a time.
///
/// Relative `load`/`save` paths resolve against `root`.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    registry: ImageRegistry,
    root: PathBuf,
}

impl Session {
    pub fn new(engine: Engine, root: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            registry: ImageRegistry::new(),
            root: root.into(),
        }
    }

    pub fn registry(&self) -> &ImageRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ImageRegistry {
        &mut self.registry
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Execute one statement. A failing statement leaves the registry as it was.
    pub fn run_statement(&mut self, stmt: &Statement) -> RasterResult<Outcome> {
        match stmt {
            Statement::Load { path, name } => {
                let img = load_image(&self.resolve(path))?;
                self.registry.add(name.clone(), img);
                Ok(Outcome::Loaded { name: name.clone() })
            }
            Statement::Save { path, name } => {
                let img = self.registry.find(name)?;
                let path = self.resolve(path);
                save_image(&path, &img)?;
                Ok(Outcome::Saved { path })
            }
            Statement::Histogram { name } => {
                let img = self.registry.find(name)?;
                Ok(Outcome::Histogram(histogram(&img)))
            }
            Statement::Apply(cmd) => {
                self.engine.execute(&mut self.registry, cmd)?;
                Ok(Outcome::Applied {
                    dest: cmd.dest.clone(),
                })
            }
            Statement::Quit => Ok(Outcome::Quit),
        }
    }

    /// Parse and execute `line`. Blank and comment lines yield `None`.
    pub fn run_line(&mut self, line: &str) -> RasterResult<Option<Outcome>> {
        parse_statement(line)?
            .map(|stmt| self.run_statement(&stmt))
            .transpose()
    }

    /// Execute a script in order, stopping at the first failing line or at `quit`.
    pub fn run_script(&mut self, script: impl BufRead) -> RasterResult<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        for (idx, line) in script.lines().enumerate() {
            let lineno = idx + 1;
            let line = line.with_context(|| format!("read script line {lineno}"))?;
            match self.run_line(&line) {
                Ok(Some(Outcome::Quit)) => {
                    outcomes.push(Outcome::Quit);
                    break;
                }
                Ok(Some(outcome)) => outcomes.push(outcome),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(line = lineno, error = %e, "script stopped");
                    return Err(e);
                }
            }
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/session.rs"]
mod tests;
