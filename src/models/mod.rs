mod outcome;
mod pool;
mod question;

pub use outcome::{AnswerOutcome, Score};
pub use pool::QuestionPool;
pub use question::{parse_choice, Question, OPTION_LABELS};
