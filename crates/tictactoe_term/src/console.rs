//! Line-based terminal I/O shared by the prompts and the board display.

use anyhow::{Result, bail};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};

/// Blocking prompts and output over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `message`, then blocks for one line of input.
    ///
    /// The trailing line ending is stripped. End of input is an error.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed while waiting for a response");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Clears the screen and homes the cursor.
    pub fn clear(&mut self) -> Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// Gives back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
