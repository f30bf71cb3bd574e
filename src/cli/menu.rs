//! Numbered menu loop shared by the interactive sessions.

use super::prompt::Prompter;
use crate::error::{CliError, CliResult};
use crate::output;
use console::style;
use std::io::{BufRead, Write};

/// A menu: numbered items plus the key that leaves the loop.
pub struct Menu<'a> {
    pub title: &'a str,
    pub items: &'a [(&'a str, &'a str)],
    pub exit_key: &'a str,
}

impl Menu<'_> {
    fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", style(self.title).cyan().bold())?;
        for (key, label) in self.items {
            writeln!(out, "{:>3}. {}", key, label)?;
        }
        Ok(())
    }

    /// Run the loop until the exit key or end of input.
    ///
    /// Lookup misses are printed and the loop continues. Storage and I/O
    /// failures end the loop with an error.
    pub fn run<R: BufRead, W: Write>(
        &self,
        p: &mut Prompter<R, W>,
        mut action: impl FnMut(&str, &mut Prompter<R, W>) -> CliResult<()>,
    ) -> CliResult<()> {
        loop {
            self.render(p.out())?;
            let choice = match p.ask("Choose an action: ") {
                Ok(choice) => choice,
                Err(CliError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };
            let choice = choice.trim();

            if choice == self.exit_key {
                return Ok(());
            }
            if !self.items.iter().any(|(key, _)| *key == choice) {
                output::write_warning(p.out(), "Unknown option, try again.")?;
                continue;
            }

            match action(choice, p) {
                Ok(()) => {}
                Err(CliError::InputClosed) => return Ok(()),
                Err(CliError::Record(e)) if e.is_not_found() => {
                    output::write_error(p.out(), &e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
