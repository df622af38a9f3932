//! Console front end shared by both applications: a numbered menu built from
//! an action enum, line-based prompts and error reporting.

pub mod attendance;
pub mod marks;
pub mod render;

use crate::error::{Error, Result};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Running,
    Terminated,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Choice<A> {
    Action(A),
    Invalid(String),
    EndOfInput,
}

/// Line-oriented input and output. Stdin/stdout in the binaries, buffers in
/// tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Print `label` and read one line without its line ending.
    /// `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Console::prompt`], but running out of input in the middle of an
    /// operation is a console failure.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        self.prompt(label)?.ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended during an operation",
            ))
        })
    }

    pub fn ask_number(&mut self, label: &str, what: &str) -> Result<i64> {
        let text = self.ask(label)?;
        text.trim()
            .parse::<i64>()
            .map_err(|_| Error::input(format!("{what} must be a whole number, got {text:?}")))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Print the numbered menu for `A` and read the user's selection.
pub fn read_choice<A, R, W>(console: &mut Console<R, W>, title: &str) -> io::Result<Choice<A>>
where
    A: IntoEnumIterator + Display,
    R: BufRead,
    W: Write,
{
    console.say("")?;
    console.say(format!("===== {title} ====="))?;
    for (index, action) in A::iter().enumerate() {
        console.say(format!("{}. {action}", index + 1))?;
    }

    Ok(match console.prompt("Enter your choice: ")? {
        None => Choice::EndOfInput,
        Some(line) => match parse_choice::<A>(&line) {
            Some(action) => Choice::Action(action),
            None => Choice::Invalid(line),
        },
    })
}

/// Menu entries are numbered from 1 in declaration order.
pub fn parse_choice<A: IntoEnumIterator>(line: &str) -> Option<A> {
    let n: usize = line.trim().parse().ok()?;
    n.checked_sub(1).and_then(|index| A::iter().nth(index))
}

/// Show a failed operation to the user. Console failures are handed back so
/// the session can end.
pub fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: Error) -> Result<()> {
    match &err {
        Error::Io(_) => return Err(err),
        Error::Persistence(e) => error!(error = %e, "Operation failed in the database"),
        Error::Timestamp { value, reason } => {
            error!(value = %value, reason = %reason, "Stored timestamp is malformed")
        }
        Error::Rule(_) | Error::Input(_) => warn!(error = %err, "Operation rejected"),
    }
    console.say(&err)?;
    Ok(())
}
