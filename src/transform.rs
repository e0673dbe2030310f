//! The string operation under measurement.
//!
//! Both entry points delegate matching to the `regex` crate. Replacement
//! strings use its syntax, so `$1` / `${name}` expand capture groups.

use regex::Regex;

/// Replaces every match of `pattern` in `input` with `replacement`.
///
/// The pattern is compiled on each call, matching how the routine is used by
/// callers that pass ad-hoc patterns.
pub fn regex_replace(
    input: &str,
    pattern: &str,
    replacement: &str,
) -> Result<String, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(input, replacement).into_owned())
}

/// [`regex_replace`] with the pattern compiled once up front.
#[derive(Clone, Debug)]
pub struct CompiledReplace {
    re: Regex,
    replacement: String,
}

impl CompiledReplace {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    pub fn apply(&self, input: &str) -> String {
        self.re
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_vowels() {
        assert_eq!(regex_replace("hello world", "[aeiou]", "x").unwrap(), "hxllx wxrld");
        assert_eq!(regex_replace("hello", "e", "x").unwrap(), "hxllo");
        assert_eq!(regex_replace("hello", "[aeiou]", "3").unwrap(), "h3ll3");
    }

    #[test]
    fn test_no_match_returns_input() {
        assert_eq!(regex_replace("hello", "z", "x").unwrap(), "hello");
        assert_eq!(regex_replace("", "[aeiou]", "x").unwrap(), "");
    }

    #[test]
    fn test_capture_groups_expand() {
        assert_eq!(
            regex_replace("2024-01-31", r"(\d+)-(\d+)-(\d+)", "$3/$2/$1").unwrap(),
            "31/01/2024"
        );
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(regex_replace("hello", "[unclosed", "x").is_err());
        assert!(CompiledReplace::new("(", "x").is_err());
    }

    #[test]
    fn test_compiled_matches_adhoc() {
        let compiled = CompiledReplace::new("[aeiou]", "x").unwrap();
        for input in ["hello world", "", "rhythm", "aeiou aeiou"] {
            assert_eq!(
                compiled.apply(input),
                regex_replace(input, "[aeiou]", "x").unwrap()
            );
        }
    }
}
