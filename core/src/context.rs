//! Parsing context: owned registries plus error-reporting policy.

use std::fmt;

use crate::registry::Registry;
use crate::types::{CommandSpec, OptionSpec};
use crate::values::OptionValues;
use crate::{CommandError, OptionError, extract, parse};

/// Owns the command and option registries and mediates parsing.
///
/// A context is created once per invocation, populated by repeated pushes,
/// then consumed by [`extract_command`](Context::extract_command) and/or
/// [`parse_options`](Context::parse_options). `name` prefixes error messages
/// rendered to stderr when `print_errors` is enabled.
///
/// # Examples
///
/// ```
/// use cmdparse_core::{ArgKind, Context, OptionSpec};
///
/// let mut ctx = Context::new("demo", false);
/// ctx.push_options(&[
///     OptionSpec::flag("verbose", Some('v'), "Enable verbose output"),
///     OptionSpec::with_value("output", Some('o'), "Output directory", ArgKind::String),
/// ]);
///
/// let mut args: Vec<String> = ["demo", "-v", "--output=/tmp", "file.txt"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// let values = ctx.parse_options(&mut args).unwrap();
///
/// assert_eq!(values.get_bool("verbose"), Some(true));
/// assert_eq!(values.get_str("output"), Some("/tmp"));
/// assert_eq!(args, ["demo", "file.txt"]); // positional remainder
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    name: String,
    commands: Registry<CommandSpec>,
    options: Registry<OptionSpec>,
    print_errors: bool,
}

impl Context {
    /// Creates an empty context.
    pub fn new(name: &str, print_errors: bool) -> Self {
        Self {
            name: name.to_string(),
            commands: Registry::new(),
            options: Registry::new(),
            print_errors,
        }
    }

    /// Appends commands to the registry, after those already pushed.
    pub fn push_commands(&mut self, commands: &[CommandSpec]) {
        self.commands.push_all(commands);
    }

    /// Appends options to the registry, after those already pushed.
    pub fn push_options(&mut self, options: &[OptionSpec]) {
        self.options.push_all(options);
    }

    /// Resets the command registry to empty.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Resets the option registry to empty.
    pub fn clear_options(&mut self) {
        self.options.clear();
    }

    /// Replaces the display name used as error-message prefix.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Toggles rendering of errors to stderr.
    pub fn set_print_errors(&mut self, print_errors: bool) {
        self.print_errors = print_errors;
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether errors are rendered to stderr.
    pub fn print_errors(&self) -> bool {
        self.print_errors
    }

    /// The registered commands, in registration order.
    pub fn commands(&self) -> &Registry<CommandSpec> {
        &self.commands
    }

    /// The registered options, in registration order.
    pub fn options(&self) -> &Registry<OptionSpec> {
        &self.options
    }

    /// Finds a command by exact name; first match wins.
    pub fn find_command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Finds an option by exact long form; first match wins.
    pub fn find_long(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|option| option.matches_long(name))
    }

    /// Finds an option by short form; first match wins.
    pub fn find_short(&self, c: char) -> Option<&OptionSpec> {
        self.options.iter().find(|option| option.matches_short(c))
    }

    /// Extracts the invoked subcommand from `args`.
    ///
    /// Scans past the program name for the first token not starting with
    /// `-` and matches it against the command registry. On success the
    /// token is removed from `args` and a clone of the descriptor is
    /// returned; on failure `args` is untouched.
    ///
    /// [`CommandError::Missing`] is the normal "no command given" outcome
    /// and is never rendered to stderr; [`CommandError::Unknown`] is
    /// rendered when `print_errors` is on.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdparse_core::{CommandSpec, Context};
    ///
    /// let mut ctx = Context::new("demo", false);
    /// ctx.push_commands(&[CommandSpec::new("snap", "Create a snapshot")]);
    ///
    /// let mut args: Vec<String> = ["demo", "-x", "snap", "extra"]
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// let command = ctx.extract_command(&mut args).unwrap();
    ///
    /// assert_eq!(command.name, "snap");
    /// assert_eq!(args, ["demo", "-x", "extra"]);
    /// ```
    pub fn extract_command(&self, args: &mut Vec<String>) -> Result<CommandSpec, CommandError> {
        extract::extract_command(self, args)
    }

    /// Parses flags and options out of `args`.
    ///
    /// On success, returns the typed bindings and compacts `args` to the
    /// program name plus the positional remainder in original relative
    /// order. On failure `args` is untouched and the error is rendered to
    /// stderr when `print_errors` is on.
    pub fn parse_options(&self, args: &mut Vec<String>) -> Result<OptionValues, OptionError> {
        parse::parse_options(self, args)
    }

    pub(crate) fn report(&self, err: &dyn fmt::Display) {
        if self.print_errors {
            eprintln!("{}: {}", self.name, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArgKind;

    fn spec(long: &str, short: Option<char>) -> OptionSpec {
        OptionSpec::flag(long, short, "")
    }

    #[test]
    fn test_push_preserves_registration_order() {
        let mut ctx = Context::new("test", false);
        ctx.push_commands(&[CommandSpec::new("snap", ""), CommandSpec::new("restore", "")]);
        ctx.push_commands(&[CommandSpec::new("list", "")]);

        let names: Vec<&str> = ctx.commands().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["snap", "restore", "list"]);
    }

    #[test]
    fn test_duplicate_names_shadow_first_match_wins() {
        let mut ctx = Context::new("test", false);
        ctx.push_options(&[
            OptionSpec::with_value("level", Some('l'), "first", ArgKind::Int),
            OptionSpec::with_value("level", Some('l'), "second", ArgKind::String),
        ]);

        assert_eq!(ctx.find_long("level").unwrap().tip, "first");
        assert_eq!(ctx.find_short('l').unwrap().tip, "first");
    }

    #[test]
    fn test_clear_empties_only_one_registry() {
        let mut ctx = Context::new("test", false);
        ctx.push_commands(&[CommandSpec::new("snap", "")]);
        ctx.push_options(&[spec("help", Some('h'))]);

        ctx.clear_commands();
        assert!(ctx.commands().is_empty());
        assert_eq!(ctx.options().len(), 1);

        ctx.clear_options();
        assert!(ctx.options().is_empty());
    }

    #[test]
    fn test_mutators() {
        let mut ctx = Context::new("one", false);
        ctx.set_name("two");
        ctx.set_print_errors(true);

        assert_eq!(ctx.name(), "two");
        assert!(ctx.print_errors());
    }

    #[test]
    fn test_find_misses() {
        let ctx = Context::new("test", false);
        assert!(ctx.find_command("snap").is_none());
        assert!(ctx.find_long("help").is_none());
        assert!(ctx.find_short('h').is_none());
    }
}
