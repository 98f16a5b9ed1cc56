//! Line-oriented operator prompts.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Write `question` and read one line of answer without its terminator.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before an answer was given",
            ));
        }
        if answer.ends_with('\n') {
            answer.pop();
            if answer.ends_with('\r') {
                answer.pop();
            }
        }
        Ok(answer)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
