//! Error types for command extraction and option parsing.
//!
//! Parsing is fail-fast: the first error aborts the scan. When a context
//! has `print_errors` enabled, the same errors are also rendered to stderr
//! with the context's display name as prefix; callers that disable it get
//! only the structured variants below and format their own messages.

use thiserror::Error;

/// Errors from [`extract_command`](crate::Context::extract_command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first non-flag token matched no registered command.
    #[error("command {0:?} is invalid")]
    Unknown(String),

    /// No non-flag token exists after the program name. Not necessarily an
    /// error to the caller; the base option set applies instead.
    #[error("no command given")]
    Missing,
}

/// Errors from [`parse_options`](crate::Context::parse_options).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// A `--name` token matched no registered long form.
    #[error("invalid option --{0}")]
    UnknownLong(String),

    /// A cluster character matched no registered short form.
    #[error("invalid option -{0}")]
    UnknownShort(char),

    /// A value-taking option had no `=`-attached value and the next token
    /// was absent or flag-shaped.
    #[error("argument to option --{0} is missing")]
    MissingValue(String),

    /// A no-value flag was given an `=`-attached value.
    #[error("option --{0} doesn't allow for arguments")]
    UnexpectedValue(String),

    /// Value coercion failed: the raw token is not a valid value of the
    /// option's kind.
    #[error("argument {value:?} to option --{option} is of invalid type")]
    BadValue {
        /// Long name of the option being bound.
        option: String,
        /// Raw token that failed to parse.
        value: String,
    },

    /// A value-taking short option appeared past the first position of a
    /// cluster, where its value can no longer be attached.
    #[error("option -{0} takes an argument and cannot appear inside a cluster")]
    ClusteredValueOption(char),

    /// A token that is option-shaped but not a parseable option, such as a
    /// bare `-`.
    #[error("malformed option token {0:?}")]
    Malformed(String),

    /// A value handler or other collaborator failed.
    #[error("error while parsing: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_dashes() {
        assert_eq!(
            OptionError::UnknownLong("colour".to_string()).to_string(),
            "invalid option --colour"
        );
        assert_eq!(OptionError::UnknownShort('z').to_string(), "invalid option -z");
    }

    #[test]
    fn test_bad_value_names_both_sides() {
        let err = OptionError::BadValue {
            option: "jobs".to_string(),
            value: "12abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "argument \"12abc\" to option --jobs is of invalid type"
        );
    }

    #[test]
    fn test_command_errors() {
        assert_eq!(
            CommandError::Unknown("snapp".to_string()).to_string(),
            "command \"snapp\" is invalid"
        );
        assert_eq!(CommandError::Missing.to_string(), "no command given");
    }
}
