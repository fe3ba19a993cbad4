//! Asks one question against a countdown.
//!
//! The countdown and the next input line are raced in a `select!`. Whichever
//! finishes first resolves the question and the other is dropped, so a
//! question resolves exactly once and an early answer cancels the countdown
//! along with its time's-up notice.

use std::io::Write;
use std::time::Duration;

use log::debug;
use tokio::time::{self, Instant};

use crate::console::Console;
use crate::error::QuizError;
use crate::models::{parse_choice, AnswerOutcome, Question};
use crate::ui;

pub struct TimedQuestion<'a> {
    question: &'a Question,
    index: usize,
    limit: Duration,
}

impl<'a> TimedQuestion<'a> {
    pub fn new(question: &'a Question, index: usize, limit: Duration) -> Self {
        Self {
            question,
            index,
            limit,
        }
    }

    /// Displays the question and waits for a valid letter or the deadline.
    ///
    /// Invalid letters re-prompt without moving the deadline. If input has
    /// ended the question just runs out its time.
    pub async fn ask<W: Write>(
        &self,
        console: &mut Console<W>,
    ) -> Result<AnswerOutcome, QuizError> {
        for line in ui::question_lines(self.question, self.index) {
            console.say(line)?;
        }

        // `sleep` saturates instead of overflowing on huge limits.
        let countdown = time::sleep(self.limit);
        let deadline = countdown.deadline();
        tokio::pin!(countdown);

        let mut input_open = true;
        console.prompt(ui::answer_prompt(self.limit))?;

        let outcome = loop {
            let line = tokio::select! {
                biased;

                _ = &mut countdown => break self.timed_out(),
                line = console.read_line(), if input_open => line,
            };

            let Some(line) = line else {
                debug!("Input closed during question {}", self.index + 1);
                input_open = false;
                continue;
            };

            // A line can land in the same instant the countdown fires.
            if Instant::now() >= deadline {
                break self.timed_out();
            }

            match parse_choice(&line) {
                Some(letter) => break self.judge(letter),
                None => {
                    console.say(ui::INVALID_OPTION)?;
                    console.prompt(ui::answer_prompt(self.limit))?;
                }
            }
        };

        let (text, color) = ui::verdict(&outcome);
        console.say_colored(text, color)?;
        Ok(outcome)
    }

    fn judge(&self, letter: char) -> AnswerOutcome {
        if self.question.check_correct(letter.encode_utf8(&mut [0; 4])) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong {
                correct_key: self.question.correct_key().to_string(),
            }
        }
    }

    fn timed_out(&self) -> AnswerOutcome {
        AnswerOutcome::TimedOut {
            correct_key: self.question.correct_key().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{memory_console, printed};

    const LIMIT: Duration = Duration::from_secs(15);

    fn assert_elapsed_limit(started: Instant) {
        let elapsed = started.elapsed();
        assert!(elapsed >= LIMIT && elapsed < LIMIT + Duration::from_secs(1), "{:?}", elapsed);
    }

    fn question() -> Question {
        Question::new(
            "Math",
            "Algebra",
            "1+1?",
            ["1".into(), "2".into(), "3".into(), "4".into()],
            "b",
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_answer_cancels_countdown() {
        let (tx, mut console) = memory_console();
        let question = question();

        let feeder = tokio::spawn(async move {
            time::sleep(Duration::from_secs(3)).await;
            tx.send(" b ".to_string()).unwrap();
            tx
        });

        let outcome = TimedQuestion::new(&question, 0, LIMIT).ask(&mut console).await.unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);

        // Let the full limit pass; nothing else may be printed.
        let _tx = feeder.await.unwrap();
        let before = printed(&console);
        time::sleep(LIMIT * 2).await;
        assert_eq!(printed(&console), before);
        assert!(before.contains("Correct!"));
        assert!(!before.contains("Time's up"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answer_discloses_key() {
        let (tx, mut console) = memory_console();
        let question = question();

        tokio::spawn(async move {
            time::sleep(Duration::from_secs(1)).await;
            tx.send("c".to_string()).unwrap();
            time::sleep(LIMIT).await;
        });

        let outcome = TimedQuestion::new(&question, 0, LIMIT).ask(&mut console).await.unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome::Wrong {
                correct_key: "B".to_string()
            }
        );
        let output = printed(&console);
        assert!(output.contains("Wrong! The correct answer was: B"));
        assert!(!output.contains("Time's up"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_answer_times_out_once() {
        let (_tx, mut console) = memory_console();
        let question = question();

        let started = Instant::now();
        let outcome = TimedQuestion::new(&question, 2, LIMIT).ask(&mut console).await.unwrap();

        assert_eq!(
            outcome,
            AnswerOutcome::TimedOut {
                correct_key: "B".to_string()
            }
        );
        assert_elapsed_limit(started);
        let output = printed(&console);
        assert!(output.contains("Question 3: 1+1?"));
        assert_eq!(output.matches("Time's up! The correct answer was: B").count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_input_does_not_extend_deadline() {
        let (tx, mut console) = memory_console();
        let question = question();

        tokio::spawn(async move {
            time::sleep(Duration::from_secs(10)).await;
            tx.send("z".to_string()).unwrap();
            time::sleep(Duration::from_secs(10)).await;
            let _ = tx.send("b".to_string());
        });

        let started = Instant::now();
        let outcome = TimedQuestion::new(&question, 0, LIMIT).ask(&mut console).await.unwrap();

        assert!(matches!(outcome, AnswerOutcome::TimedOut { .. }));
        assert_elapsed_limit(started);
        let output = printed(&console);
        assert_eq!(output.matches(ui::INVALID_OPTION).count(), 1);
        assert_eq!(output.matches("Your answer").count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_input_waits_out_the_countdown() {
        let (tx, mut console) = memory_console();
        drop(tx);
        let question = question();

        let started = Instant::now();
        let outcome = TimedQuestion::new(&question, 0, LIMIT).ask(&mut console).await.unwrap();

        assert!(matches!(outcome, AnswerOutcome::TimedOut { .. }));
        assert_elapsed_limit(started);
    }

    #[tokio::test(start_paused = true)]
    async fn test_answer_queued_before_display_counts() {
        let (tx, mut console) = memory_console();
        tx.send("B".to_string()).unwrap();
        let question = question();

        let outcome = TimedQuestion::new(&question, 0, LIMIT).ask(&mut console).await.unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_limit_does_not_overflow() {
        let (tx, mut console) = memory_console();
        let question = question();

        tokio::spawn(async move {
            time::sleep(Duration::from_secs(1)).await;
            tx.send("b".to_string()).unwrap();
            time::sleep(LIMIT).await;
        });

        let limit = Duration::from_secs(u64::MAX);
        let outcome = TimedQuestion::new(&question, 0, limit).ask(&mut console).await.unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);
    }
}
