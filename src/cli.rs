//! Command-line helpers shared by the binary.
//!
//! `growl cross` accepts Go-style single-dash long flags (`-os linux`,
//! `-ld="-X a=b"`). clap only understands `--os`, so those words are rewritten
//! before parsing.

/// Flags of `growl cross` that consume the following word as their value
const CROSS_VALUE_FLAGS: &[&str] = &["os", "arch", "a", "ldflags", "ld", "out", "o"];

/// Names `growl cross` answers to
const CROSS_NAMES: &[&str] = &["cross", "c"];

/// Rewrite `-name` to `--name` in the flag section of a `growl cross` call.
///
/// `args` is the full argv, program name included. Anything other than a
/// cross invocation is returned unchanged. Rewriting stops at the first
/// positional word or at `--`, so passthrough arguments for `go build` keep
/// their spelling.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();

    let is_cross = args
        .get(1)
        .is_some_and(|sub| CROSS_NAMES.contains(&sub.as_str()));
    if !is_cross {
        return args;
    }

    let mut i = 2;
    while i < args.len() {
        let word = args[i].as_str();
        if word == "--" || word == "-" || !word.starts_with('-') {
            break;
        }

        let name = word.trim_start_matches('-');
        let name = name.split_once('=').map_or(name, |(name, _)| name);
        let takes_value = CROSS_VALUE_FLAGS.contains(&name) && !word.contains('=');

        // clap's own -h stays short
        if !word.starts_with("--") && word != "-h" {
            let long = format!("-{}", word);
            args[i] = long;
        }

        i += if takes_value { 2 } else { 1 };
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(words: &[&str]) -> Vec<String> {
        normalize_args(words.iter().map(|s| s.to_string()))
    }

    #[test]
    fn rewrites_single_dash_flags() {
        assert_eq!(
            norm(&["growl", "cross", "-os", "windows", "-a", "386", "-s", "-nc"]),
            vec!["growl", "cross", "--os", "windows", "--a", "386", "--s", "--nc"]
        );
    }

    #[test]
    fn keeps_values_that_look_like_flags() {
        assert_eq!(
            norm(&["growl", "c", "-ld", "-X main.v=1", "-light"]),
            vec!["growl", "c", "--ld", "-X main.v=1", "--light"]
        );
    }

    #[test]
    fn handles_equals_form() {
        assert_eq!(
            norm(&["growl", "cross", "-os=linux", "-static"]),
            vec!["growl", "cross", "--os=linux", "--static"]
        );
    }

    #[test]
    fn stops_at_first_positional() {
        assert_eq!(
            norm(&["growl", "cross", "-l", "./cmd/app", "-tags", "prod"]),
            vec!["growl", "cross", "--l", "./cmd/app", "-tags", "prod"]
        );
        assert_eq!(
            norm(&["growl", "cross", "--", "-x"]),
            vec!["growl", "cross", "--", "-x"]
        );
    }

    #[test]
    fn leaves_other_commands_alone() {
        assert_eq!(norm(&["growl", "test", "-os"]), vec!["growl", "test", "-os"]);
        assert_eq!(norm(&["growl"]), vec!["growl"]);
    }
}
