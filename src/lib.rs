//! # timed-quiz
//!
//! A console multiple-choice quiz with a countdown on every question.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Missing or broken files give an empty quiz, never an error
//!     let quiz = Quiz::from_csv("question.csv");
//!
//!     // Play on stdin/stdout
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod console;
mod data;
mod error;
mod menu;
mod models;
mod runner;
mod settings;
mod ui;

use std::path::Path;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use app::{App, SessionEnd};
pub use console::Console;
pub use data::{load_questions_from_csv, read_questions, LoadError, DEFAULT_QUESTIONS_PATH};
pub use error::QuizError;
pub use menu::{select_count, select_option};
pub use models::{AnswerOutcome, Question, QuestionPool, Score};
pub use runner::TimedQuestion;
pub use settings::{Settings, DEFAULT_TIME_LIMIT};

/// A quiz ready to be played in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from already loaded questions.
    pub fn new(pool: QuestionPool) -> Self {
        Self {
            app: App::new(pool, Settings::default()),
        }
    }

    /// Load a quiz from a CSV file.
    ///
    /// Rows that cannot be used are skipped and logged. A file that cannot
    /// be read at all gives a quiz with no questions.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use timed_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_csv("question.csv");
    /// println!("{} questions", quiz.app().pool().len());
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Self {
        Self::new(load_questions_from_csv(path))
    }

    /// Set the per-question time limit.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.app = self.app.with_settings(Settings { time_limit });
        self
    }

    /// Play one session on stdin/stdout.
    pub async fn run(self) -> Result<SessionEnd, QuizError> {
        let mut console = Console::stdio();
        let mut rng = StdRng::from_entropy();
        self.app.run(&mut console, &mut rng).await
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }
}
