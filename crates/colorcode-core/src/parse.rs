//! Parsing of the `name(a, b, c)` functional notations.

use tracing::trace;

use crate::error::{ColorError, Result};

/// Split `name(a, b, c)` into its three trimmed arguments.
///
/// The function name matches case-insensitively and whitespace around the
/// arguments is ignored.
pub(crate) fn function_args<'a>(input: &'a str, name: &str) -> Result<[&'a str; 3]> {
    let trimmed = input.trim();
    let open = trimmed
        .find('(')
        .ok_or_else(|| ColorError::format(format!("expected {name}(...), got {input:?}")))?;

    if !trimmed[..open].trim_end().eq_ignore_ascii_case(name) {
        return Err(ColorError::format(format!(
            "expected {name}(...), got {input:?}"
        )));
    }

    let body = trimmed[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| ColorError::format(format!("missing ')' in {input:?}")))?;

    let args: Vec<&str> = body.split(',').map(str::trim).collect();
    match args.as_slice() {
        &[a, b, c] => {
            trace!(function = name, a, b, c, "split functional notation");
            Ok([a, b, c])
        }
        _ => Err(ColorError::format(format!(
            "{name}() takes 3 components, got {} in {input:?}",
            args.len()
        ))),
    }
}

/// Parse a byte channel such as `222`.
pub(crate) fn byte(component: &str) -> Result<u8> {
    component
        .parse::<u8>()
        .map_err(|_| ColorError::format(format!("{component:?} is not a channel in 0-255")))
}

/// Parse a real number, with or without a trailing `%`.
pub(crate) fn number(component: &str, percent: bool) -> Result<f64> {
    let digits = if percent {
        component.strip_suffix('%').unwrap_or(component).trim_end()
    } else {
        component
    };
    digits
        .parse::<f64>()
        .map_err(|_| ColorError::format(format!("{component:?} is not a number")))
}
