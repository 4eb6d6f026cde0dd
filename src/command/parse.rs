use std::path::PathBuf;

use crate::command::model::{Command, Operation, Statement};
use crate::foundation::error::{RasterError, RasterResult};
use crate::ops::color::ColorTransform;
use crate::ops::filter::Kernel;
use crate::ops::flip::FlipAxis;

/// Parse one script line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_statement(line: &str) -> RasterResult<Option<Statement>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let stmt = match tokens.as_slice() {
        ["q" | "quit"] => Statement::Quit,
        ["load", path, name] => Statement::Load {
            path: PathBuf::from(*path),
            name: (*name).to_string(),
        },
        ["save", path, name] => Statement::Save {
            path: PathBuf::from(*path),
            name: (*name).to_string(),
        },
        ["histogram", name] => Statement::Histogram {
            name: (*name).to_string(),
        },
        ["load" | "save", ..] => {
            return Err(RasterError::validation(format!(
                "'{}' expects <path> <name>",
                tokens[0]
            )));
        }
        ["histogram", ..] => {
            return Err(RasterError::validation("'histogram' expects <name>"));
        }
        _ => Statement::Apply(parse_command(&tokens)?),
    };
    Ok(Some(stmt))
}

/// Parse `<op> [params...] <source> [mask] <dest>` from pre-split tokens.
pub fn parse_command(tokens: &[&str]) -> RasterResult<Command> {
    let (&name, rest) = tokens
        .split_first()
        .ok_or_else(|| RasterError::validation("empty command"))?;
    let arity = op_arity(name)
        .ok_or_else(|| RasterError::validation(format!("unknown operation '{name}'")))?;

    if rest.len() < arity + 2 || rest.len() > arity + 3 {
        return Err(RasterError::validation(format!(
            "'{name}' expects {arity} parameter(s) followed by <source> [mask] <dest>"
        )));
    }
    let (params, names) = rest.split_at(arity);
    let op = parse_operation(name, params)?;

    let (source, mask, dest) = match names {
        [source, dest] => (*source, None, *dest),
        [source, mask, dest] => (*source, Some(*mask), *dest),
        _ => {
            return Err(RasterError::validation(format!(
                "'{name}' expects <source> [mask] <dest>"
            )));
        }
    };

    Ok(Command {
        op,
        source: source.to_string(),
        mask: mask.map(str::to_string),
        dest: dest.to_string(),
    })
}

/// Build an [`Operation`] from its script name and numeric parameter tokens.
pub fn parse_operation(name: &str, params: &[&str]) -> RasterResult<Operation> {
    let arity = op_arity(name)
        .ok_or_else(|| RasterError::validation(format!("unknown operation '{name}'")))?;
    if params.len() != arity {
        return Err(RasterError::validation(format!(
            "'{name}' expects {arity} parameter(s), got {}",
            params.len()
        )));
    }

    let op = match name {
        "red-component" => color(ColorTransform::Red),
        "green-component" => color(ColorTransform::Green),
        "blue-component" => color(ColorTransform::Blue),
        "value-component" | "maxvalue-component" => color(ColorTransform::Value),
        "luma-component" => color(ColorTransform::Luma),
        "intensity-component" => color(ColorTransform::Intensity),
        "sepia" | "sepia-tone" => color(ColorTransform::Sepia),
        "blur" => Operation::Filter {
            kernel: Kernel::Blur,
        },
        "sharpen" => Operation::Filter {
            kernel: Kernel::Sharpen,
        },
        "horizontal-flip" => Operation::Flip {
            axis: FlipAxis::Horizontal,
        },
        "vertical-flip" => Operation::Flip {
            axis: FlipAxis::Vertical,
        },
        "brighten" => Operation::Brighten {
            constant: parse_int("brighten constant", params[0])?,
        },
        "mosaic" => Operation::Mosaic {
            seeds: parse_int("mosaic seed count", params[0])?,
            rng_seed: None,
        },
        "downscale" => Operation::Downscale {
            height_pct: parse_int("downscale height percentage", params[0])?,
            width_pct: parse_int("downscale width percentage", params[1])?,
        },
        _ => return Err(RasterError::validation(format!("unknown operation '{name}'"))),
    };
    Ok(op)
}

fn color(kind: ColorTransform) -> Operation {
    Operation::Color { kind }
}

fn op_arity(name: &str) -> Option<usize> {
    match name {
        "red-component" | "green-component" | "blue-component" | "value-component"
        | "maxvalue-component" | "luma-component" | "intensity-component" | "sepia"
        | "sepia-tone" | "blur" | "sharpen" | "horizontal-flip" | "vertical-flip" => Some(0),
        "brighten" | "mosaic" => Some(1),
        "downscale" => Some(2),
        _ => None,
    }
}

fn parse_int(what: &str, token: &str) -> RasterResult<i64> {
    token
        .parse::<i64>()
        .map_err(|_| RasterError::not_numeric(format!("{what} must be an integer, got '{token}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/command/parse.rs"]
mod tests;
