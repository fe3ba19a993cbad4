use crossterm::style::Color;

use crate::models::{AnswerOutcome, Score};

pub const NO_QUESTIONS_LOADED: &str = "No questions loaded. Exiting.";
pub const NO_QUESTIONS_SELECTED: &str =
    "No questions available for the selected category and subcategory.";
pub const CLOSING: &str = "Thanks for playing!";

/// Verdict line for an outcome and the colour it is shown in.
pub fn verdict(outcome: &AnswerOutcome) -> (String, Color) {
    match outcome {
        AnswerOutcome::Correct => ("Correct!\n".to_string(), Color::Green),
        AnswerOutcome::Wrong { correct_key } => (
            format!("Wrong! The correct answer was: {}\n", correct_key),
            Color::Red,
        ),
        AnswerOutcome::TimedOut { correct_key } => (
            format!("\nTime's up! The correct answer was: {}\n", correct_key),
            Color::Yellow,
        ),
    }
}

pub fn final_score(score: &Score) -> String {
    format!("\nQuiz completed! Your final score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts_disclose_the_key() {
        let (text, color) = verdict(&AnswerOutcome::TimedOut {
            correct_key: "D".to_string(),
        });
        assert!(text.contains("Time's up! The correct answer was: D"));
        assert_eq!(color, Color::Yellow);

        let (text, _) = verdict(&AnswerOutcome::Wrong {
            correct_key: "A".to_string(),
        });
        assert!(text.starts_with("Wrong! The correct answer was: A"));
    }

    #[test]
    fn test_final_score() {
        let score = Score { correct: 2, asked: 2 };
        assert_eq!(final_score(&score), "\nQuiz completed! Your final score: 2/2");
    }
}
