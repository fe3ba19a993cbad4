use std::fmt;

/// How a single timed question was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong { correct_key: String },
    TimedOut { correct_key: String },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Running tally for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub asked: usize,
}

impl Score {
    pub fn record(&mut self, outcome: &AnswerOutcome) {
        self.asked += 1;
        if outcome.is_correct() {
            self.correct += 1;
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.asked)
    }
}
