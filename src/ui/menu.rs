//! Menu definitions: an explicit table from accepted token to command.

use crate::errors::{AppError, AppResult};

/// A prompt together with the tokens it accepts.
///
/// Tokens are lowercase; user input is trimmed and case-folded before lookup.
#[derive(Debug, Clone, Copy)]
pub struct Menu<T: 'static> {
    pub prompt: &'static str,
    pub choices: &'static [(&'static str, T)],
}

impl<T: Copy> Menu<T> {
    pub fn parse(&self, input: &str) -> AppResult<T> {
        let token = input.trim().to_lowercase();
        self.choices
            .iter()
            .find(|(accepted, _)| *accepted == token)
            .map(|(_, choice)| *choice)
            .ok_or_else(|| AppError::InvalidChoice(input.trim().to_string()))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.choices.iter().map(|(token, _)| *token)
    }
}

/// Parse a 0-based index into a list of `len` items.
pub fn parse_index(input: &str, len: usize) -> AppResult<usize> {
    match input.trim().parse::<usize>() {
        Ok(i) if i < len => Ok(i),
        _ => Err(AppError::InvalidChoice(input.trim().to_string())),
    }
}
