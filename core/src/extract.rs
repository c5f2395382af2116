//! Subcommand extraction from the raw argument vector.

use tracing::debug;

use crate::context::Context;
use crate::error::CommandError;
use crate::types::CommandSpec;

/// Finds the first non-flag token past the program name, matches it against
/// the command registry, and removes it from `args`.
pub(crate) fn extract_command(
    ctx: &Context,
    args: &mut Vec<String>,
) -> Result<CommandSpec, CommandError> {
    let Some(position) = args
        .iter()
        .skip(1)
        .position(|token| !token.starts_with('-'))
        .map(|offset| offset + 1)
    else {
        debug!(argc = args.len(), "no command token in argument vector");
        return Err(CommandError::Missing);
    };

    let token = args[position].as_str();
    let Some(command) = ctx.find_command(token) else {
        let err = CommandError::Unknown(token.to_string());
        ctx.report(&err);
        return Err(err);
    };

    let command = command.clone();
    debug!(command = %command.name, index = position, "command extracted");
    args.remove(position);
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    fn context() -> Context {
        let mut ctx = Context::new("test", false);
        ctx.push_commands(&[
            CommandSpec::new("snap", "Create a snapshot"),
            CommandSpec::new("restore", "Restore a snapshot"),
        ]);
        ctx
    }

    #[test]
    fn test_extracts_first_non_flag_token() {
        let ctx = context();
        let mut argv = args(&["prog", "-x", "snap", "extra"]);

        let command = extract_command(&ctx, &mut argv).unwrap();
        assert_eq!(command.name, "snap");
        assert_eq!(argv, ["prog", "-x", "extra"]);
    }

    #[test]
    fn test_missing_when_only_flags() {
        let ctx = context();
        let mut argv = args(&["prog", "-h", "--version"]);

        assert_eq!(extract_command(&ctx, &mut argv).unwrap_err(), CommandError::Missing);
        assert_eq!(argv, ["prog", "-h", "--version"]);
    }

    #[test]
    fn test_missing_when_empty() {
        let ctx = context();
        let mut argv = args(&["prog"]);

        assert_eq!(extract_command(&ctx, &mut argv).unwrap_err(), CommandError::Missing);
    }

    #[test]
    fn test_unknown_command_leaves_args_untouched() {
        let ctx = context();
        let mut argv = args(&["prog", "snapp", "extra"]);

        assert_eq!(
            extract_command(&ctx, &mut argv).unwrap_err(),
            CommandError::Unknown("snapp".to_string())
        );
        assert_eq!(argv, ["prog", "snapp", "extra"]);
    }

    #[test]
    fn test_program_name_is_never_a_command() {
        let mut ctx = context();
        ctx.push_commands(&[CommandSpec::new("prog", "")]);
        let mut argv = args(&["prog"]);

        assert_eq!(extract_command(&ctx, &mut argv).unwrap_err(), CommandError::Missing);
    }

    #[test]
    fn test_first_registered_command_shadows() {
        let mut ctx = Context::new("test", false);
        ctx.push_commands(&[
            CommandSpec::new("snap", "first"),
            CommandSpec::new("snap", "second"),
        ]);
        let mut argv = args(&["prog", "snap"]);

        let command = extract_command(&ctx, &mut argv).unwrap();
        assert_eq!(command.tip, "first");
    }

    #[test]
    fn test_later_tokens_are_not_considered() {
        // Only the first non-flag token is a command candidate.
        let ctx = context();
        let mut argv = args(&["prog", "notacommand", "snap"]);

        assert_eq!(
            extract_command(&ctx, &mut argv).unwrap_err(),
            CommandError::Unknown("notacommand".to_string())
        );
    }
}
