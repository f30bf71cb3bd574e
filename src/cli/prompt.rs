//! Line-based prompting over any reader and writer.
//!
//! Sessions read one line per prompt. End of input is reported as
//! [`CliError::InputClosed`] so a session can end cleanly.

use crate::error::{CliError, CliResult};
use crate::output;
use std::io::{BufRead, Write};

/// Prompts on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for everything that is not a prompt.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` and read one line, without the trailing newline.
    pub fn ask(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer, printing its message on rejection.
    pub fn ask_until<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> CliResult<T> {
        loop {
            let answer = self.ask(label)?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(msg) => output::write_error(&mut self.output, &msg)?,
            }
        }
    }

    /// Ask for a number, re-prompting until one is entered.
    pub fn ask_f64(&mut self, label: &str) -> CliResult<f64> {
        self.ask_until(label, parse_amount)
    }

    /// Ask for a non-negative whole number, re-prompting until one is entered.
    pub fn ask_count(&mut self, label: &str, what: &str) -> CliResult<u32> {
        self.ask_until(label, |s| parse_count(s, what))
    }
}

/// Parse a finite decimal amount.
pub fn parse_amount(s: &str) -> Result<f64, String> {
    match s.trim().replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("'{}' is not a number", s.trim())),
    }
}

/// Parse a non-negative whole number, with a distinct message for negatives.
pub fn parse_count(s: &str, what: &str) -> Result<u32, String> {
    match s.trim().parse::<i64>() {
        Ok(v) if v < 0 => Err(format!("{} cannot be negative", what)),
        Ok(v) => u32::try_from(v).map_err(|_| format!("{} is too large", what)),
        Err(_) => Err(format!("{} must be a whole number", what)),
    }
}
