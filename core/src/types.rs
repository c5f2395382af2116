//! Descriptor types for command and option registration.
//!
//! This module defines the static metadata callers register with a
//! [`Context`](crate::Context) before parsing: [`CommandSpec`] for
//! subcommands and [`OptionSpec`] for flags/options. Descriptors carry
//! display text (`tip`, `arg_name`) so a frontend can render help output
//! from the registries without a parallel bookkeeping structure.

use std::fmt;
use std::sync::Arc;

use crate::OptionError;

/// Callback invoked when a matched command is run.
///
/// Receives the argument vector left over after
/// [`extract_command`](crate::Context::extract_command) removed the command
/// token, and returns a process-style exit status.
pub type CommandHandler = Arc<dyn Fn(&[String]) -> i32 + Send + Sync>;

/// Callback bound to an [`ArgKind::Handle`] option.
///
/// Invoked with the option's long name and the raw value token. Its result
/// is propagated verbatim as the outcome of the parse step that matched the
/// option.
pub type ValueHandler = Arc<dyn Fn(&str, &str) -> Result<(), OptionError> + Send + Sync>;

/// Value kind accepted by an option.
///
/// `Flag` options take no value and always parse as booleans. `Handle`
/// delegates interpretation of the raw token to a caller-supplied callback.
/// The remaining kinds coerce the raw token with strict whole-string
/// parsing; see [`coerce`](crate::coerce).
#[derive(Clone)]
pub enum ArgKind {
    /// Boolean flag, no value (`--verbose`).
    Flag,
    /// Raw value handed to a [`ValueHandler`] callback.
    Handle(ValueHandler),
    /// Signed integer value.
    Int,
    /// Single-precision float value.
    Float,
    /// Double-precision float value.
    Double,
    /// Arbitrary string value.
    String,
}

impl ArgKind {
    /// Whether options of this kind consume a value token.
    ///
    /// Everything except [`ArgKind::Flag`] does.
    pub fn takes_value(&self) -> bool {
        !matches!(self, ArgKind::Flag)
    }
}

impl fmt::Debug for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::Flag => f.write_str("Flag"),
            ArgKind::Handle(_) => f.write_str("Handle(..)"),
            ArgKind::Int => f.write_str("Int"),
            ArgKind::Float => f.write_str("Float"),
            ArgKind::Double => f.write_str("Double"),
            ArgKind::String => f.write_str("String"),
        }
    }
}

/// Descriptor for one subcommand.
///
/// Identity is `name`. Uniqueness is not enforced: lookup is a linear scan
/// in registration order and the first match wins, so a duplicate name
/// shadows later entries.
///
/// # Examples
///
/// ```
/// use cmdparse_core::CommandSpec;
///
/// let snap = CommandSpec::new("snap", "Create a snapshot")
///     .with_handler(|args| args.len() as i32);
///
/// assert_eq!(snap.name, "snap");
/// assert_eq!(snap.run(&[]), Some(0));
///
/// // Commands may be registered before their handler exists.
/// let restore = CommandSpec::new("restore", "Restore a snapshot");
/// assert_eq!(restore.run(&[]), None);
/// ```
#[derive(Clone)]
pub struct CommandSpec {
    /// Command token matched against the argument vector.
    pub name: String,
    /// One-line description for help output.
    pub tip: String,
    /// Handler run after extraction, if any.
    pub handler: Option<CommandHandler>,
}

impl CommandSpec {
    /// Creates a command descriptor without a handler.
    pub fn new(name: &str, tip: &str) -> Self {
        Self {
            name: name.to_string(),
            tip: tip.to_string(),
            handler: None,
        }
    }

    /// Attaches a handler callback.
    pub fn with_handler(
        mut self,
        handler: impl Fn(&[String]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Runs the handler with the given argument vector.
    ///
    /// Returns `None` when no handler is attached.
    pub fn run(&self, args: &[String]) -> Option<i32> {
        self.handler.as_ref().map(|handler| handler(args))
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("tip", &self.tip)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Descriptor for one option.
///
/// An option always has a long form (`--name`) and may have a single-char
/// short form (`-n`). Short options cluster (`-abc`), and a value-taking
/// short option consumes the cluster remainder as an attached value
/// (`-ofile`).
///
/// # Examples
///
/// ```
/// use cmdparse_core::{ArgKind, OptionSpec};
///
/// let verbose = OptionSpec::flag("verbose", Some('v'), "Enable verbose output");
/// assert!(!verbose.kind.takes_value());
/// assert!(verbose.matches_short('v'));
///
/// let output = OptionSpec::with_value("output", Some('o'), "Output directory", ArgKind::String)
///     .with_arg_name("DIR");
/// assert!(output.kind.takes_value());
/// assert_eq!(output.arg_name.as_deref(), Some("DIR"));
/// ```
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Long form, without the leading `--`.
    pub long: String,
    /// Optional short form, without the leading `-`.
    pub short: Option<char>,
    /// One-line description for help output.
    pub tip: String,
    /// Value kind this option accepts.
    pub kind: ArgKind,
    /// Display name for the value in help output (e.g., `DIR`).
    pub arg_name: Option<String>,
}

impl OptionSpec {
    /// Creates a boolean flag (no value).
    pub fn flag(long: &str, short: Option<char>, tip: &str) -> Self {
        Self {
            long: long.to_string(),
            short,
            tip: tip.to_string(),
            kind: ArgKind::Flag,
            arg_name: None,
        }
    }

    /// Creates an option that takes a value of the given kind.
    pub fn with_value(long: &str, short: Option<char>, tip: &str, kind: ArgKind) -> Self {
        debug_assert!(kind.takes_value(), "use OptionSpec::flag for no-value options");
        Self {
            long: long.to_string(),
            short,
            tip: tip.to_string(),
            kind,
            arg_name: None,
        }
    }

    /// Creates an option whose raw value is handed to `handler`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdparse_core::OptionSpec;
    ///
    /// let config = OptionSpec::with_handler("config", Some('c'), "Config path", |long, raw| {
    ///     assert_eq!(long, "config");
    ///     assert!(!raw.is_empty());
    ///     Ok(())
    /// });
    /// assert!(config.kind.takes_value());
    /// ```
    pub fn with_handler(
        long: &str,
        short: Option<char>,
        tip: &str,
        handler: impl Fn(&str, &str) -> Result<(), OptionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            long: long.to_string(),
            short,
            tip: tip.to_string(),
            kind: ArgKind::Handle(Arc::new(handler)),
            arg_name: None,
        }
    }

    /// Sets the display name for the value in help output.
    pub fn with_arg_name(mut self, arg_name: &str) -> Self {
        self.arg_name = Some(arg_name.to_string());
        self
    }

    /// Checks the long form against a token body (no dashes).
    pub fn matches_long(&self, name: &str) -> bool {
        self.long == name
    }

    /// Checks the short form against a cluster character.
    pub fn matches_short(&self, c: char) -> bool {
        self.short == Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_run_without_handler() {
        let command = CommandSpec::new("list", "List snapshots");
        assert_eq!(command.run(&[]), None);
    }

    #[test]
    fn test_command_handler_sees_args() {
        let command = CommandSpec::new("snap", "Create a snapshot")
            .with_handler(|args| i32::try_from(args.len()).unwrap_or(i32::MAX));

        let args = vec!["prog".to_string(), "extra".to_string()];
        assert_eq!(command.run(&args), Some(2));
    }

    #[test]
    fn test_option_matching() {
        let option = OptionSpec::flag("help", Some('h'), "Show help");

        assert!(option.matches_long("help"));
        assert!(!option.matches_long("h"));
        assert!(option.matches_short('h'));
        assert!(!option.matches_short('x'));
    }

    #[test]
    fn test_short_form_is_optional() {
        let option = OptionSpec::flag("dry-run", None, "Do not write anything");
        assert!(!option.matches_short('d'));
    }

    #[test]
    fn test_kind_takes_value() {
        assert!(!ArgKind::Flag.takes_value());
        assert!(ArgKind::Int.takes_value());
        assert!(ArgKind::String.takes_value());
        assert!(ArgKind::Handle(Arc::new(|_, _| Ok(()))).takes_value());
    }
}
