//! Validation of `DMODEL_*` environment values
//!
//! An invalid value never aborts a run: the validator prints a warning with
//! the closest valid spelling and keeps the value configured so far.

use std::io::Write;

/// Validator for one enumerated environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, warning on stderr and returning `fallback` if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value.trim()) {
            return parsed;
        }

        let hint = self
            .suggest(value)
            .map(|s| format!(" (did you mean '{}'?)", s))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "warning: ignoring {}='{}'{}; expected one of: {}",
            self.var_name,
            value,
            hint,
            self.valid_values.join(", ")
        );
        fallback
    }

    /// Closest valid value within two edits
    fn suggest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|&(_, dist)| dist)
            .filter(|&(_, dist)| dist > 0 && dist <= 2)
            .map(|(valid, _)| valid)
    }
}

/// Levenshtein distance for typo suggestions (env values and config keys)
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
