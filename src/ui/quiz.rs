use std::time::Duration;

use crate::models::{Question, OPTION_LABELS};

pub const START: &str = "\nStarting the quiz! Good luck!\n";
pub const INVALID_OPTION: &str = "Please enter a valid option (A, B, C, or D).";

/// The question heading followed by its lettered options.
pub fn question_lines(question: &Question, index: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(OPTION_LABELS.len() + 1);
    lines.push(format!("\nQuestion {}: {}", index + 1, question.prompt()));
    lines.extend(
        OPTION_LABELS
            .iter()
            .zip(question.options())
            .map(|(label, option)| format!("{}. {}", label, option)),
    );
    lines
}

pub fn answer_prompt(limit: Duration) -> String {
    format!(
        "Your answer (A, B, C, or D) [Time limit: {}s]: ",
        limit.as_secs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_lines() {
        let question = Question::new(
            "Math",
            "Algebra",
            "1+1?",
            ["1".into(), "2".into(), "3".into(), "4".into()],
            "B",
        );
        assert_eq!(
            question_lines(&question, 0),
            vec!["\nQuestion 1: 1+1?", "A. 1", "B. 2", "C. 3", "D. 4"]
        );
    }

    #[test]
    fn test_answer_prompt_shows_whole_seconds() {
        assert_eq!(
            answer_prompt(Duration::from_secs(15)),
            "Your answer (A, B, C, or D) [Time limit: 15s]: "
        );
    }
}
