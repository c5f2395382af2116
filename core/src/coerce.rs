//! Raw-token coercion into typed option values.

use crate::error::OptionError;
use crate::types::{ArgKind, OptionSpec};
use crate::values::OptionValue;

/// Converts a raw value token into the option's declared value type.
///
/// Numeric kinds use strict whole-string parsing: an empty string, trailing
/// non-numeric characters, and out-of-range values all fail with
/// [`OptionError::BadValue`]. `Handle` options return `Ok(None)` because
/// the callback consumes the raw value; its error is propagated verbatim.
///
/// # Examples
///
/// ```
/// use cmdparse_core::{ArgKind, OptionError, OptionSpec, OptionValue, coerce};
///
/// let jobs = OptionSpec::with_value("jobs", Some('j'), "Parallel jobs", ArgKind::Int);
///
/// assert_eq!(coerce(&jobs, "12").unwrap(), Some(OptionValue::Int(12)));
/// assert!(matches!(
///     coerce(&jobs, "12abc"),
///     Err(OptionError::BadValue { .. })
/// ));
/// ```
pub fn coerce(option: &OptionSpec, raw: &str) -> Result<Option<OptionValue>, OptionError> {
    match &option.kind {
        ArgKind::Flag => Ok(Some(OptionValue::Bool(true))),
        ArgKind::Handle(handler) => {
            handler(&option.long, raw)?;
            Ok(None)
        }
        ArgKind::Int => raw
            .parse::<i64>()
            .map(|value| Some(OptionValue::Int(value)))
            .map_err(|_| bad_value(option, raw)),
        ArgKind::Float => raw
            .parse::<f32>()
            .map(|value| Some(OptionValue::Float(value)))
            .map_err(|_| bad_value(option, raw)),
        ArgKind::Double => raw
            .parse::<f64>()
            .map(|value| Some(OptionValue::Double(value)))
            .map_err(|_| bad_value(option, raw)),
        ArgKind::String => Ok(Some(OptionValue::String(raw.to_string()))),
    }
}

fn bad_value(option: &OptionSpec, raw: &str) -> OptionError {
    OptionError::BadValue {
        option: option.long.clone(),
        value: raw.to_string(),
    }
}
