//! `%N` placeholder substitution for command lines.

use crate::error::{GrowlError, Result};

/// Replace every `%N` in `line` with `args[N - 1]`.
///
/// Digits are read greedily, so `%12` is placeholder twelve rather than
/// placeholder one followed by a literal `2`. Placeholders with no matching
/// argument are left untouched, and substituted text is never re-scanned.
pub fn substitute(line: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();

        let arg = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| args.get(i));

        match arg {
            Some(arg) => out.push_str(arg),
            None => {
                out.push('%');
                out.push_str(&after[..digits]);
            }
        }
        rest = &after[digits..];
    }
    out.push_str(rest);

    out
}

/// Whitespace-separated words of `line` that are still `%N` placeholders
pub fn unresolved(line: &str) -> Vec<String> {
    line.split_whitespace()
        .filter(|word| {
            word.strip_prefix('%')
                .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        })
        .map(str::to_string)
        .collect()
}

/// Substitute `args` into `line` and fail if any placeholder is left over.
///
/// The leftover check runs on the rendered line, argument text included, so
/// an argument that is itself a `%N` word is reported as missing too.
pub fn render(line: &str, args: &[String]) -> Result<String> {
    let rendered = substitute(line, args);
    let missing = unresolved(&rendered);
    if !missing.is_empty() {
        return Err(GrowlError::MissingArguments(missing));
    }
    Ok(rendered)
}
