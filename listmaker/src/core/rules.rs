//! Validation rules for console input.
//!
//! A rule turns one raw line into a typed value or a rejection message. Rules
//! never touch the console; [`crate::io::input::InputReader`] does the
//! prompting, printing and retrying.

use std::fmt::Display;
use std::str::FromStr;

use regex::Regex;

/// A constraint over one raw input line.
pub trait Rule {
    type Output;

    /// Suffix appended to the prompt, e.g. `" [1-5]"`.
    fn hint(&self) -> String {
        String::new()
    }

    /// Accept `raw` or explain why it was rejected. The message echoes `raw`
    /// (or the parsed value that failed a range check).
    fn check(&self, raw: &str) -> Result<Self::Output, String>;
}

/// Rejects the empty line. Whitespace-only input is accepted as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty;

impl Rule for NonEmpty {
    type Output = String;

    fn check(&self, raw: &str) -> Result<String, String> {
        if raw.is_empty() {
            return Err("input must not be empty.".to_string());
        }
        Ok(raw.to_string())
    }
}

/// Any value of a numeric type, with `label` naming it in diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Number<T> {
    label: &'static str,
    _marker: std::marker::PhantomData<T>,
}

impl Number<i64> {
    pub fn integer() -> Self {
        Self {
            label: "an integer",
            _marker: std::marker::PhantomData,
        }
    }
}

impl Number<f64> {
    pub fn float() -> Self {
        Self {
            label: "a double",
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T: FromStr> Rule for Number<T> {
    type Output = T;

    fn check(&self, raw: &str) -> Result<T, String> {
        raw.trim()
            .parse::<T>()
            .map_err(|_| format!("input must be {}, not '{}'.", self.label, raw))
    }
}

/// A numeric value within the inclusive range `[lo, hi]`.
///
/// `bounds` is the range as shown to the user, e.g. `1-5` or `0.0-1.5`.
#[derive(Debug, Clone)]
pub struct InRange<T> {
    number: Number<T>,
    kind: &'static str,
    lo: T,
    hi: T,
    bounds: String,
}

impl InRange<i64> {
    pub fn integer(lo: i64, hi: i64) -> Self {
        Self {
            number: Number::integer(),
            kind: "integer",
            lo,
            hi,
            bounds: format!("{}-{}", lo, hi),
        }
    }
}

impl InRange<f64> {
    pub fn float(lo: f64, hi: f64) -> Self {
        Self {
            number: Number::float(),
            kind: "double",
            lo,
            hi,
            bounds: format!("{:?}-{:?}", lo, hi),
        }
    }
}

impl<T> Rule for InRange<T>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    type Output = T;

    fn hint(&self) -> String {
        format!(" [{}]", self.bounds)
    }

    fn check(&self, raw: &str) -> Result<T, String> {
        let value = self.number.check(raw)?;
        // `contains` also rejects NaN.
        if !(self.lo..=self.hi).contains(&value) {
            return Err(format!(
                "input {} must be [{}], not '{}'.",
                self.kind, self.bounds, value
            ));
        }
        Ok(value)
    }
}

/// Case-insensitive `y` / `n`. `true` means yes.
#[derive(Debug, Clone, Copy, Default)]
pub struct YesNo;

impl Rule for YesNo {
    type Output = bool;

    fn hint(&self) -> String {
        " [Y/N]".to_string()
    }

    fn check(&self, raw: &str) -> Result<bool, String> {
        if raw.eq_ignore_ascii_case("y") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("n") {
            Ok(false)
        } else {
            Err(format!("input must be [Y/N], not '{}'.", raw))
        }
    }
}

/// The whole line must match a regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            anchored,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Rule for Pattern {
    type Output = String;

    fn check(&self, raw: &str) -> Result<String, String> {
        if self.anchored.is_match(raw) {
            return Ok(raw.to_string());
        }
        Err(format!(
            "'{}' does not meet the criteria {}.",
            raw, self.source
        ))
    }
}
