//! Terminal helpers: a single-line overwriting printer and a yes/no prompt.

use crate::errors::{Result, UtilError};
use crate::texts;
use std::io::{self, BufRead, Write};

/// Line width used when the terminal size cannot be queried.
pub const DEFAULT_LINE_WIDTH: usize = 120;

/// Prints text over the current terminal line.
///
/// Shorter text is padded with the fill character, longer text is cut to
/// `max_width` display cells.
#[derive(Debug, Clone)]
pub struct LinePrinter {
    max_width: usize,
    fill_char: char,
}

impl Default for LinePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinePrinter {
    /// Creates a printer as wide as the terminal is right now.
    pub fn new() -> Self {
        let max_width = crossterm::terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .ok()
            .filter(|cols| *cols > 0)
            .unwrap_or(DEFAULT_LINE_WIDTH);
        Self::with_width(max_width)
    }

    pub fn with_width(max_width: usize) -> Self {
        Self {
            max_width,
            fill_char: ' ',
        }
    }

    pub fn fill_char(mut self, fill_char: char) -> Self {
        self.fill_char = fill_char;
        self
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Returns the line that [`print`](Self::print) would write, without the
    /// leading carriage return.
    ///
    /// Padding adds one fill character per missing display cell, so text with
    /// wide characters ends up with as many fill characters as a narrow text of
    /// the same display width.
    pub fn render(&self, text: &str) -> String {
        let text_width = texts::width(text);
        if text_width < self.max_width {
            let mut line = String::with_capacity(text.len() + self.max_width - text_width);
            line.push_str(text);
            line.extend(std::iter::repeat(self.fill_char).take(self.max_width - text_width));
            return line;
        }

        let mut line = String::new();
        let mut line_width = 0;
        for c in text.chars() {
            line_width += texts::char_width(c);
            if line_width > self.max_width {
                break;
            }
            line.push(c);
        }
        line
    }

    /// Overwrites the current stdout line with `text`.
    pub fn print(&self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.print_to(&mut out, text)
    }

    pub fn print_to<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        write!(out, "\r{}", self.render(text))?;
        out.flush()
    }
}

/// Blocking yes/no question answered on standard input.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub msg: String,
    pub msg_retry: String,
    pub key_ok: String,
    pub key_ng: String,
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        Self::new("Continue? [y/n]: ", "Please answer y or n: ", "y", "n")
    }
}

impl ConfirmPrompt {
    pub fn new(
        msg: impl Into<String>,
        msg_retry: impl Into<String>,
        key_ok: impl Into<String>,
        key_ng: impl Into<String>,
    ) -> Self {
        Self {
            msg: msg.into(),
            msg_retry: msg_retry.into(),
            key_ok: key_ok.into(),
            key_ng: key_ng.into(),
        }
    }

    /// Asks on stdout and reads answers from stdin.
    pub fn ask(&self) -> Result<bool> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.ask_with(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Asks until a line matches `key_ok` (true) or `key_ng` (false), ignoring case.
    ///
    /// Any other answer prints `msg_retry` and asks again.
    pub fn ask_with<R, W>(&self, input: &mut R, out: &mut W) -> Result<bool>
    where
        R: BufRead,
        W: Write,
    {
        let key_ok = self.key_ok.to_lowercase();
        let key_ng = self.key_ng.to_lowercase();
        let mut prompt = self.msg.as_str();
        let mut line = String::new();

        loop {
            write!(out, "{prompt}").map_err(|err| UtilError::io("<stdout>", err))?;
            out.flush().map_err(|err| UtilError::io("<stdout>", err))?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(|err| UtilError::io("<stdin>", err))?;
            if read == 0 {
                return Err(UtilError::InputClosed);
            }

            let answer = line.trim_end_matches(&['\r', '\n'][..]).to_lowercase();
            if answer == key_ok {
                return Ok(true);
            }
            if answer == key_ng {
                return Ok(false);
            }
            prompt = self.msg_retry.as_str();
        }
    }
}

/// Asks `msg` on the terminal until the answer matches `key_ok` or `key_ng`.
pub fn confirm(msg: &str, msg_retry: &str, key_ok: &str, key_ng: &str) -> Result<bool> {
    ConfirmPrompt::new(msg, msg_retry, key_ok, key_ng).ask()
}
