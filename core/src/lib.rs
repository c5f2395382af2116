//! Registry-driven command and option parsing.
//!
//! This crate is a small parsing engine for subcommand-style CLIs: callers
//! register descriptors with a [`Context`], hand it the raw argument
//! vector, and get back the invoked command and typed option values.
//!
//! - [`CommandSpec`] / [`OptionSpec`] — descriptors for subcommands and
//!   options (long `--name`, short `-x`, clustered short flags,
//!   `=`-attached or next-token values).
//! - [`Registry`] — ordered, append-only descriptor collection; lookups
//!   scan in registration order, first match wins.
//! - [`Context`] — owns both registries and drives
//!   [`extract_command`](Context::extract_command) and
//!   [`parse_options`](Context::parse_options).
//! - [`OptionValues`] — typed bindings returned by a parse pass, one
//!   [`OptionValue`] per matched option.
//! - [`coerce`] — strict raw-string-to-value conversion.
//!
//! Parsing compacts the argument vector: consumed flag and value tokens
//! are dropped, positionals survive in their original relative order, and
//! everything after a `--` terminator is left untouched.
//!
//! # Example
//!
//! ```
//! use cmdparse_core::*;
//!
//! let mut ctx = Context::new("snapcli", false);
//! ctx.push_commands(&[
//!     CommandSpec::new("snap", "Create a snapshot").with_handler(|_| 0),
//!     CommandSpec::new("restore", "Restore a snapshot"),
//! ]);
//! ctx.push_options(&[
//!     OptionSpec::flag("help", Some('h'), "Show help"),
//!     OptionSpec::with_value("jobs", Some('j'), "Parallel jobs", ArgKind::Int)
//!         .with_arg_name("N"),
//! ]);
//!
//! let mut args: Vec<String> = ["snapcli", "snap", "-j", "4", "srcdir"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! let command = ctx.extract_command(&mut args).unwrap();
//! assert_eq!(command.name, "snap");
//!
//! let values = ctx.parse_options(&mut args).unwrap();
//! assert_eq!(values.get_int("jobs"), Some(4));
//! assert_eq!(values.get_bool("help"), Some(false));
//! assert_eq!(args, ["snapcli", "srcdir"]);
//! ```

mod coerce;
mod context;
mod error;
mod extract;
mod parse;
mod registry;
mod types;
mod values;

pub use coerce::coerce;
pub use context::Context;
pub use error::{CommandError, OptionError};
pub use registry::{Registry, concat};
pub use types::{ArgKind, CommandHandler, CommandSpec, OptionSpec, ValueHandler};
pub use values::{OptionValue, OptionValues};
