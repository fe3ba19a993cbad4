/// Letters the four options are shown under, in option order.
pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// A single multiple-choice question.
///
/// The correct key is trimmed and upper-cased on construction. It is not
/// checked against [`OPTION_LABELS`]: a key outside `A`-`D` makes the question
/// unanswerable but still playable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    category: String,
    subcategory: String,
    prompt: String,
    options: [String; 4],
    correct_key: String,
}

impl Question {
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        prompt: impl Into<String>,
        options: [String; 4],
        correct_key: &str,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            prompt: prompt.into(),
            options,
            correct_key: normalize(correct_key),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    pub fn correct_key(&self) -> &str {
        &self.correct_key
    }

    /// Case- and whitespace-insensitive comparison against the correct key.
    pub fn check_correct(&self, answer: &str) -> bool {
        normalize(answer) == self.correct_key
    }

    pub fn is_in(&self, category: &str, subcategory: &str) -> bool {
        self.category == category && self.subcategory == subcategory
    }
}

/// Parses a typed answer into one of the option letters.
pub fn parse_choice(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    OPTION_LABELS.contains(&letter).then_some(letter)
}

fn normalize(answer: &str) -> String {
    answer.trim().to_uppercase()
}
