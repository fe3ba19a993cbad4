use std::io::Write;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::console::Console;
use crate::error::QuizError;
use crate::menu;
use crate::models::{AnswerOutcome, Question, QuestionPool, Score};
use crate::runner::TimedQuestion;
use crate::settings::Settings;
use crate::ui;

/// How a session ended. Both are normal endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed(Score),
    NoQuestions,
}

/// Drives one play-through: select, shuffle, ask, score.
pub struct App {
    pool: QuestionPool,
    settings: Settings,
}

impl App {
    pub fn new(pool: QuestionPool, settings: Settings) -> Self {
        Self { pool, settings }
    }

    pub fn with_settings(self, settings: Settings) -> Self {
        Self { settings, ..self }
    }

    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn run<W: Write, R: Rng + ?Sized>(
        &self,
        console: &mut Console<W>,
        rng: &mut R,
    ) -> Result<SessionEnd, QuizError> {
        if self.pool.is_empty() {
            console.say(ui::NO_QUESTIONS_LOADED)?;
            return Ok(SessionEnd::NoQuestions);
        }

        let categories = self.pool.categories();
        let category = menu::select_option(console, "Available categories:", &categories).await?;

        let subcategories = self.pool.subcategories(category);
        let title = format!("Available subcategories for '{}':", category);
        let subcategory = menu::select_option(console, &title, &subcategories).await?;

        self.run_selected(console, rng, category, subcategory).await
    }

    /// Plays the questions in `category`/`subcategory`, asking for a count first.
    pub async fn run_selected<W: Write, R: Rng + ?Sized>(
        &self,
        console: &mut Console<W>,
        rng: &mut R,
        category: &str,
        subcategory: &str,
    ) -> Result<SessionEnd, QuizError> {
        let mut selected = self.pool.filter(category, subcategory);
        if selected.is_empty() {
            console.say(ui::NO_QUESTIONS_SELECTED)?;
            return Ok(SessionEnd::NoQuestions);
        }

        selected.shuffle(rng);
        let count = menu::select_count(console, selected.len()).await?;
        selected.truncate(count);
        info!("Asking {} question(s) from {}/{}", count, category, subcategory);

        console.say(ui::START)?;
        let score = self.ask_all(console, &selected).await?;

        console.say(ui::final_score(&score))?;
        console.say(ui::CLOSING)?;
        Ok(SessionEnd::Completed(score))
    }

    async fn ask_all<W: Write>(
        &self,
        console: &mut Console<W>,
        questions: &[&Question],
    ) -> Result<Score, QuizError> {
        let mut score = Score::default();
        let mut previous: Option<AnswerOutcome> = None;
        for (index, question) in questions.iter().enumerate() {
            let outcome = self
                .ask_one(console, question, index, previous.as_ref())
                .await?;
            debug!("Question {} resolved as {:?}", index + 1, outcome);
            score.record(&outcome);
            previous = Some(outcome);
        }
        Ok(score)
    }

    /// Asks one question. After a timeout, lines already typed are late
    /// answers to the expired question and are dropped first.
    async fn ask_one<W: Write>(
        &self,
        console: &mut Console<W>,
        question: &Question,
        index: usize,
        previous: Option<&AnswerOutcome>,
    ) -> Result<AnswerOutcome, QuizError> {
        if let Some(AnswerOutcome::TimedOut { .. }) = previous {
            console.discard_pending();
        }
        TimedQuestion::new(question, index, self.settings.time_limit)
            .ask(console)
            .await
    }
}
