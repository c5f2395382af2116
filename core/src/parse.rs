//! The option-parsing state machine.
//!
//! Classifies each token past the program name as positional, long option,
//! short-option cluster, `--` terminator, or malformed, binds matched
//! options through [`coerce`](crate::coerce), and compacts the argument
//! vector down to the positional remainder.

use tracing::{debug, trace};

use crate::coerce::coerce;
use crate::context::Context;
use crate::error::OptionError;
use crate::types::OptionSpec;
use crate::values::{OptionValue, OptionValues};

/// Parses `args` against the context's option registry.
///
/// On success the bindings are returned and `args` is rewritten to the
/// program name followed by the positionals in original relative order.
/// The first error aborts the scan and leaves `args` unmodified.
pub(crate) fn parse_options(
    ctx: &Context,
    args: &mut Vec<String>,
) -> Result<OptionValues, OptionError> {
    let (values, positionals) = match scan(ctx, args) {
        Ok(outcome) => outcome,
        Err(err) => {
            ctx.report(&err);
            return Err(err);
        }
    };

    let program = args.first().cloned();
    args.clear();
    args.extend(program);
    args.extend(positionals);
    debug!(
        bound = values.len(),
        positionals = args.len().saturating_sub(1),
        "argument vector compacted"
    );
    Ok(values)
}

fn scan(ctx: &Context, args: &[String]) -> Result<(OptionValues, Vec<String>), OptionError> {
    let mut values = OptionValues::new();
    // Flag defaults are visible even when the flag never appears.
    for option in ctx.options() {
        if !option.kind.takes_value() {
            values.insert(option.long.clone(), OptionValue::Bool(false));
        }
    }

    let mut positionals = Vec::new();
    let mut index = 1;
    while index < args.len() {
        let token = args[index].as_str();
        if !token.starts_with('-') {
            trace!(token, "positional retained");
            positionals.push(token.to_string());
            index += 1;
            continue;
        }
        if token == "-" {
            return Err(OptionError::Malformed(token.to_string()));
        }
        if token == "--" {
            // Everything past the terminator is positional, flag-shaped or not.
            positionals.extend(args[index + 1..].iter().cloned());
            break;
        }
        index = if let Some(body) = token.strip_prefix("--") {
            parse_long(ctx, body, args, index, &mut values)?
        } else {
            parse_cluster(ctx, &token[1..], args, index, &mut values)?
        };
    }

    Ok((values, positionals))
}

/// Handles one `--name` or `--name=value` token. Returns the index of the
/// next unconsumed token.
fn parse_long(
    ctx: &Context,
    body: &str,
    args: &[String],
    index: usize,
    values: &mut OptionValues,
) -> Result<usize, OptionError> {
    let (name, inline) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };

    let Some(option) = ctx.find_long(name) else {
        return Err(OptionError::UnknownLong(name.to_string()));
    };

    if !option.kind.takes_value() {
        if inline.is_some() {
            return Err(OptionError::UnexpectedValue(name.to_string()));
        }
        trace!(option = %option.long, "flag set");
        values.insert(option.long.clone(), OptionValue::Bool(true));
        return Ok(index + 1);
    }

    let (raw, next) = match inline {
        Some(value) => (value, index + 1),
        None => (
            next_value(args, index).ok_or_else(|| OptionError::MissingValue(name.to_string()))?,
            index + 2,
        ),
    };
    trace!(option = %option.long, raw, "long option bound");
    bind(option, raw, values)?;
    Ok(next)
}

/// Handles one short-option cluster (the token body after `-`). Returns the
/// index of the next unconsumed token.
///
/// A value-taking option must be the first character of its cluster: the
/// remainder is its attached value (`-ofile`), or the next token is
/// consumed when there is no remainder. Past the first position the value
/// can no longer be attached, so such characters are rejected outright.
fn parse_cluster(
    ctx: &Context,
    cluster: &str,
    args: &[String],
    index: usize,
    values: &mut OptionValues,
) -> Result<usize, OptionError> {
    for (offset, c) in cluster.char_indices() {
        let Some(option) = ctx.find_short(c) else {
            return Err(OptionError::UnknownShort(c));
        };

        if option.kind.takes_value() {
            if offset != 0 {
                return Err(OptionError::ClusteredValueOption(c));
            }
            let rest = &cluster[c.len_utf8()..];
            let (raw, next) = if rest.is_empty() {
                (
                    next_value(args, index)
                        .ok_or_else(|| OptionError::MissingValue(option.long.clone()))?,
                    index + 2,
                )
            } else {
                (rest, index + 1)
            };
            trace!(option = %option.long, raw, "short option bound");
            bind(option, raw, values)?;
            return Ok(next);
        }

        trace!(option = %option.long, short = %c, "flag set");
        values.insert(option.long.clone(), OptionValue::Bool(true));
    }
    Ok(index + 1)
}

/// The next token, if it exists and is not flag-shaped.
fn next_value(args: &[String], index: usize) -> Option<&str> {
    args.get(index + 1)
        .map(String::as_str)
        .filter(|token| !token.starts_with('-'))
}

fn bind(option: &OptionSpec, raw: &str, values: &mut OptionValues) -> Result<(), OptionError> {
    if let Some(value) = coerce(option, raw)? {
        values.insert(option.long.clone(), value);
    }
    Ok(())
}
