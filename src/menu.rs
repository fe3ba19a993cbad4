//! Numbered menus for picking a category, a subcategory and a question count.

use std::io::Write;

use crate::console::Console;
use crate::error::QuizError;
use crate::ui;

/// Shows `options` as a numbered list and waits for a valid 1-based pick.
///
/// Re-prompts for as long as it takes. Fails only if there is nothing to
/// pick from or input ends.
pub async fn select_option<'a, W: Write>(
    console: &mut Console<W>,
    title: &str,
    options: &[&'a str],
) -> Result<&'a str, QuizError> {
    if options.is_empty() {
        return Err(QuizError::NothingToSelect);
    }

    loop {
        for line in ui::menu_lines(title, options) {
            console.say(line)?;
        }
        console.prompt(ui::menu_prompt(options.len()))?;

        let line = console.read_line().await.ok_or(QuizError::InputClosed)?;
        match parse_in_range(&line, options.len()) {
            Ok(choice) => return Ok(options[choice - 1]),
            Err(message) => console.say(message)?,
        }
    }
}

/// Asks how many questions to play, between 1 and `max`.
pub async fn select_count<W: Write>(
    console: &mut Console<W>,
    max: usize,
) -> Result<usize, QuizError> {
    if max == 0 {
        return Err(QuizError::NothingToSelect);
    }

    loop {
        console.prompt(ui::count_prompt(max))?;

        let line = console.read_line().await.ok_or(QuizError::InputClosed)?;
        match parse_in_range(&line, max) {
            Ok(count) => return Ok(count),
            Err(ChoiceError::OutOfRange) => console.say(ui::count_out_of_range(max))?,
            Err(ChoiceError::NotANumber) => console.say(ui::NOT_A_NUMBER)?,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ChoiceError {
    NotANumber,
    OutOfRange,
}

impl AsRef<str> for ChoiceError {
    fn as_ref(&self) -> &str {
        match self {
            ChoiceError::NotANumber => ui::NOT_A_NUMBER,
            ChoiceError::OutOfRange => ui::INVALID_CHOICE,
        }
    }
}

fn parse_in_range(input: &str, max: usize) -> Result<usize, ChoiceError> {
    let value: i64 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
    match usize::try_from(value) {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(ChoiceError::OutOfRange),
    }
}
