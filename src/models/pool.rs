use std::collections::BTreeSet;

use super::Question;

/// All loaded questions, in file order.
///
/// Read-only once loaded: filtering hands out new collections of references.
#[derive(Debug, Clone, Default)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.questions.iter().map(Question::category))
    }

    /// Distinct subcategories within `category`, sorted.
    pub fn subcategories(&self, category: &str) -> Vec<&str> {
        distinct(
            self.questions
                .iter()
                .filter(|q| q.category() == category)
                .map(Question::subcategory),
        )
    }

    pub fn filter(&self, category: &str, subcategory: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.is_in(category, subcategory))
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(category: &str, subcategory: &str, prompt: &str) -> Question {
        Question::new(
            category,
            subcategory,
            prompt,
            ["a".into(), "b".into(), "c".into(), "d".into()],
            "A",
        )
    }

    fn pool() -> QuestionPool {
        QuestionPool::new(vec![
            question("Science", "Physics", "q1"),
            question("Math", "Geometry", "q2"),
            question("Math", "Algebra", "q3"),
            question("Math", "Algebra", "q4"),
        ])
    }

    #[test]
    fn test_categories_are_distinct() {
        assert_eq!(pool().categories(), vec!["Math", "Science"]);
    }

    #[test]
    fn test_subcategories_follow_category() {
        let pool = pool();
        assert_eq!(pool.subcategories("Math"), vec!["Algebra", "Geometry"]);
        assert_eq!(pool.subcategories("Science"), vec!["Physics"]);
        assert!(pool.subcategories("History").is_empty());
    }

    #[test]
    fn test_filter_keeps_file_order() {
        let pool = pool();
        let prompts: Vec<&str> = pool
            .filter("Math", "Algebra")
            .iter()
            .map(|q| q.prompt())
            .collect();
        assert_eq!(prompts, vec!["q3", "q4"]);
        assert!(pool.filter("Science", "Algebra").is_empty());
        assert_eq!(pool.len(), 4);
    }
}
