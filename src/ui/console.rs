//! Line-oriented console I/O over any reader/writer pair.

use super::menu::{Menu, parse_index};
use super::messages::warning;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::parse_time_spent;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say<T: std::fmt::Display>(&mut self, line: T) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its line terminator.
    ///
    /// Returns `AppError::InputClosed` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(buf)
    }

    /// Ask until the answer is one of the menu tokens.
    pub fn choose<T: Copy>(&mut self, menu: &Menu<T>) -> AppResult<T> {
        loop {
            let answer = self.read_line(menu.prompt)?;
            match menu.parse(&answer) {
                Ok(choice) => return Ok(choice),
                Err(AppError::InvalidChoice(_)) => self.invalid_choice()?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask until the answer is an index in `0..len`.
    pub fn choose_index(&mut self, prompt: &str, len: usize) -> AppResult<usize> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse_index(&answer, len) {
                Ok(i) => return Ok(i),
                Err(AppError::InvalidChoice(_)) => self.invalid_choice()?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask until the answer is a non-negative number of minutes.
    pub fn read_minutes(&mut self, prompt: &str) -> AppResult<u32> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse_time_spent(&answer) {
                Ok(mins) => return Ok(mins),
                Err(AppError::InvalidTimeSpent(_)) => {
                    warning(&mut self.output, "Please enter an integer")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn invalid_choice(&mut self) -> AppResult<()> {
        warning(&mut self.output, "Invalid choice try again")?;
        Ok(())
    }
}
