//! Input parsing helpers.
//!
//! Parsing failures are reported and the same question is asked again; the
//! domain layer only ever sees typed, validated values.

use super::console::Console;
use crate::{
    core::menu::{validate_price, validate_rating},
    errors::{Error, Result},
};
use std::str::FromStr;

/// Parses trimmed `raw` input as `T`.
///
/// # Errors
/// Returns [`Error::InvalidInput`] naming `expected` when parsing fails.
pub fn parse_input<T: FromStr>(raw: &str, expected: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| Error::InvalidInput {
        message: format!("'{}' is not {expected}", raw.trim()),
    })
}

/// Whether `answer` is the affirmative token `y`, ignoring case and whitespace
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Asks until the answer parses and passes `check`.
///
/// # Errors
/// Returns console errors, including [`Error::InputClosed`].
pub fn prompt_validated<C, T, F>(console: &mut C, prompt: &str, expected: &str, check: F) -> Result<T>
where
    C: Console,
    T: FromStr,
    F: Fn(T) -> Result<T>,
{
    loop {
        let raw = console.read_line(prompt)?;
        match parse_input(&raw, expected).and_then(&check) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_user_error() => {
                tracing::debug!("Rejected input {:?}: {}", raw, e);
                console.write_line(&format!("{e}. Please try again."))?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Asks until the answer parses as `T`.
///
/// # Errors
/// Returns console errors, including [`Error::InputClosed`].
pub fn prompt_parse<C: Console, T: FromStr>(console: &mut C, prompt: &str, expected: &str) -> Result<T> {
    prompt_validated(console, prompt, expected, Ok)
}

/// Asks for a price until a finite, non-negative number is given.
///
/// # Errors
/// Returns console errors, including [`Error::InputClosed`].
pub fn prompt_price<C: Console>(console: &mut C, prompt: &str) -> Result<f64> {
    prompt_validated(console, prompt, "a price", validate_price)
}

/// Asks for a rating until a whole number from 1 to 5 is given.
///
/// # Errors
/// Returns console errors, including [`Error::InputClosed`].
pub fn prompt_rating<C: Console>(console: &mut C, prompt: &str) -> Result<u8> {
    prompt_validated(console, prompt, "a rating from 1 to 5", validate_rating)
}

/// Asks a Y/N question.
///
/// # Errors
/// Returns console errors, including [`Error::InputClosed`].
pub fn prompt_yes<C: Console>(console: &mut C, prompt: &str) -> Result<bool> {
    Ok(is_affirmative(&console.read_line(prompt)?))
}

/// Asks until a non-blank line is given, returning it trimmed.
///
/// # Errors
/// Returns console errors, including [`Error::InputClosed`].
pub fn prompt_non_empty<C: Console>(console: &mut C, prompt: &str) -> Result<String> {
    loop {
        let raw = console.read_line(prompt)?;
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        console.write_line("A value is required. Please try again.")?;
    }
}
