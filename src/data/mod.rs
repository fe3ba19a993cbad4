mod loader;

pub use loader::{load_questions_from_csv, read_questions, LoadError, DEFAULT_QUESTIONS_PATH};
