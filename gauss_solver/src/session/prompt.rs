use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Line-oriented console on top of any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref()).context("writing to output")
    }

    /// Writes `prompt` and reads one line. `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;
        self.line.clear();
        let read = self
            .input
            .read_line(&mut self.line)
            .context("reading input line")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim().to_string()))
    }

    /// Asks until the answer parses as an integer accepted by `accept`,
    /// printing `complaint` after each rejected answer.
    pub fn ask_integer(
        &mut self,
        prompt: &str,
        complaint: &str,
        accept: impl Fn(i64) -> bool,
    ) -> Result<Option<i64>> {
        self.ask_integer_with(|_| Ok(()), prompt, complaint, accept)
    }

    /// Like [`Console::ask_integer`], running `preamble` before every attempt.
    pub fn ask_integer_with(
        &mut self,
        mut preamble: impl FnMut(&mut Self) -> Result<()>,
        prompt: &str,
        complaint: &str,
        accept: impl Fn(i64) -> bool,
    ) -> Result<Option<i64>> {
        loop {
            preamble(self)?;
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<i64>() {
                Ok(value) if accept(value) => return Ok(Some(value)),
                _ => {
                    log::debug!("rejected input {answer:?}");
                    self.say(complaint)?;
                }
            }
        }
    }
}
