//! Console collaborator - prompts for and displays text.

use crate::errors::{Error, Result};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Line-oriented text interaction with the user
pub trait Console {
    /// Shows `prompt` and reads one line without its line terminator.
    ///
    /// # Errors
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    /// Returns an I/O error if the output is gone.
    fn write_line(&mut self, text: &str) -> Result<()>;
}

/// Console over any buffered reader and writer
#[derive(Debug)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Wraps a reader and writer
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The underlying writer
    pub const fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
