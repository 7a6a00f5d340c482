//! Yes/no confirmation before destructive steps

use std::io::{self, BufRead, Write};

/// Asks the operator a yes/no question
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Line-oriented prompt: writes the question, reads one answer line.
///
/// Only a literal `Y` counts as yes; end of input counts as no.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Prompt bound to the process's stdin and stdout
pub type StdinPrompt = LinePrompt<io::StdinLock<'static>, io::Stdout>;

impl StdinPrompt {
    pub fn stdin() -> Self {
        LinePrompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(line.trim() == "Y")
    }
}

/// Answers yes without asking (`--yes`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(true)
    }
}

/// Answers no without asking (`--keep-existing`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(false)
    }
}
