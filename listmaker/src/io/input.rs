//! Validated console input.
//!
//! [`InputReader`] prompts, reads one line, and re-prompts until the line
//! satisfies a [`Rule`]. Bad input is consumed and reported on the output;
//! it never reaches the caller. The only ways out are a valid answer,
//! [`ListError::EndOfInput`], or a console I/O failure.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::rules::{InRange, NonEmpty, Number, Pattern, Rule, YesNo};
use crate::error::{ListError, ListResult};

/// Prompting reader over an input/output pair (stdin/stdout in the binary,
/// in-memory buffers in tests).
pub struct InputReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output stream for non-prompt console text (menus, list views).
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt with `rule`'s hint until a line passes `rule`.
    pub fn read<T: Rule>(&mut self, prompt: &str, rule: &T) -> ListResult<T::Output> {
        loop {
            let raw = self.prompt_line(&format!("{}{}: ", prompt, rule.hint()))?;
            match rule.check(&raw) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    debug!(prompt, raw = %raw, "input rejected");
                    writeln!(self.output, "ERROR: {}", message)?;
                }
            }
        }
    }

    /// Prompt once and return the line as typed, including an empty line.
    pub fn read_line(&mut self, prompt: &str) -> ListResult<String> {
        self.prompt_line(&format!("{}: ", prompt))
    }

    pub fn read_non_empty(&mut self, prompt: &str) -> ListResult<String> {
        self.read(prompt, &NonEmpty)
    }

    pub fn read_int(&mut self, prompt: &str) -> ListResult<i64> {
        self.read(prompt, &Number::integer())
    }

    pub fn read_int_in_range(&mut self, prompt: &str, lo: i64, hi: i64) -> ListResult<i64> {
        self.read(prompt, &InRange::integer(lo, hi))
    }

    pub fn read_float(&mut self, prompt: &str) -> ListResult<f64> {
        self.read(prompt, &Number::float())
    }

    pub fn read_float_in_range(&mut self, prompt: &str, lo: f64, hi: f64) -> ListResult<f64> {
        self.read(prompt, &InRange::float(lo, hi))
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> ListResult<bool> {
        self.read(prompt, &YesNo)
    }

    /// Returns the matching line unchanged (case preserved).
    pub fn read_matching(&mut self, prompt: &str, pattern: &Pattern) -> ListResult<String> {
        self.read(prompt, pattern)
    }

    fn prompt_line(&mut self, prompt: &str) -> ListResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ListError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
