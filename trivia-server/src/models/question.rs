//! Question records and validated input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::CategoryId;
use super::ValidationError;

/// Maximum length for question and answer text
const MAX_TEXT_LEN: usize = 1000;

/// Lowest difficulty score
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest difficulty score
pub const MAX_DIFFICULTY: i32 = 5;

/// Question identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct QuestionId(pub i32);

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Question record, serialized exactly as the API returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Validated input for a question that doesn't exist yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate raw input.
    ///
    /// # Rules
    /// - question and answer are trimmed, non-empty, at most 1000 characters
    /// - difficulty is within 1..=5
    /// - category id is positive (existence is checked against the store)
    pub fn new(
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = validate_text("question", question)?;
        let answer = validate_text("answer", answer)?;

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY.into(),
                max: MAX_DIFFICULTY.into(),
                value: difficulty.into(),
            });
        }

        if category < 1 {
            return Err(ValidationError::UnknownReference {
                field: "category",
                id: category.into(),
            });
        }

        Ok(Self {
            question,
            answer,
            category: CategoryId(category),
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach the id assigned by the store.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn validate_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(trimmed.to_owned())
}
