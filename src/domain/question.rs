//! Question records and the validated payload used to create them.

use serde::{Deserialize, Serialize};

use super::primitives::{CategoryId, QuestionId};

/// A stored trivia question.
///
/// The serialized form is the public shape returned by every endpoint:
/// `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

impl Question {
    /// Whether the question text contains `term`, ignoring case (Unicode-aware).
    pub fn mentions(&self, term: &str) -> bool {
        self.question
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

/// A question that has passed request validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Attach the id assigned by the store.
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_formatted_shape() {
        let q = NewQuestion::new("What is the sign of 2020?", "Covid19", CategoryId::new(1), 1)
            .with_id(QuestionId::new(24));

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 24,
                "question": "What is the sign of 2020?",
                "answer": "Covid19",
                "category": 1,
                "difficulty": 1
            })
        );
    }

    #[test]
    fn test_mentions_folds_non_ascii_case() {
        let q = NewQuestion::new("Wer malte ÄPFEL im Café?", "Cézanne", CategoryId::new(2), 3)
            .with_id(QuestionId::new(1));

        assert!(q.mentions("äpfel"));
        assert!(q.mentions("CAFÉ"));
        assert!(!q.mentions("birnen"));
    }
}
