use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use log::{debug, error, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Question, QuestionPool};

pub const DEFAULT_QUESTIONS_PATH: &str = "question.csv";

/// Columns every row needs: category, subcategory, prompt, four options, key.
const FIELD_COUNT: usize = 8;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Deserialize)]
struct RawQuestion {
    category: String,
    subcategory: String,
    question: String,
    option_a: String,
    option_b: String,
    option_c: String,
    option_d: String,
    correct_answer: String,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        Question::new(
            raw.category,
            raw.subcategory,
            raw.question,
            [raw.option_a, raw.option_b, raw.option_c, raw.option_d],
            &raw.correct_answer,
        )
    }
}

/// Loads the question pool from a CSV file.
///
/// Never fails: a missing or unreadable file is logged and gives an empty
/// pool, and the caller decides what an empty pool means.
pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> QuestionPool {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            let err = LoadError::Open {
                path: path.to_path_buf(),
                source,
            };
            error!("{}", err);
            return QuestionPool::default();
        }
    };

    let pool = read_questions(file);
    debug!("Loaded {} questions from {}", pool.len(), path.display());
    pool
}

/// Reads questions from any CSV source. The first row is a header.
///
/// Short rows and undecodable rows are skipped. An I/O failure stops
/// reading and keeps whatever was read before it.
pub fn read_questions<R: Read>(reader: R) -> QuestionPool {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => {
                error!("{}", LoadError::from(err));
                break;
            }
            Err(err) => {
                warn!("Skipping unreadable row {}: {}", index + 1, err);
                continue;
            }
        };

        match parse_record(&record) {
            Ok(question) => questions.push(question),
            Err(reason) => warn!("Skipping invalid row {:?}: {}", record_fields(&record), reason),
        }
    }

    QuestionPool::new(questions)
}

fn parse_record(record: &StringRecord) -> Result<Question, String> {
    if record.len() < FIELD_COUNT {
        return Err(format!(
            "expected at least {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }

    let fields: StringRecord = record.iter().take(FIELD_COUNT).collect();
    let raw: RawQuestion = fields.deserialize(None).map_err(|err| err.to_string())?;
    Ok(raw.into())
}

fn record_fields(record: &StringRecord) -> Vec<&str> {
    record.iter().collect()
}
