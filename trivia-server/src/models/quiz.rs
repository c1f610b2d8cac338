//! Quiz rounds: request shape and random selection

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer};

use super::category::CategoryId;
use super::de::{int_or_string, IntOrString};
use super::question::{Question, QuestionId};
use super::ValidationError;

/// Category id the frontend sends for "All"
pub const ALL_CATEGORIES: i32 = 0;

/// POST /quizzes body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown in this round
    #[serde(default, deserialize_with = "nullable_ids")]
    pub previous_questions: Vec<QuestionId>,

    /// Category to draw from; absent means all categories
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector as sent by the frontend (`{"id": 3, "type": "Geography"}`)
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "int_or_string")]
    pub id: i32,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizRequest {
    /// Category to draw from, or `None` for all of them.
    pub fn scope(&self) -> Result<Option<CategoryId>, ValidationError> {
        match &self.quiz_category {
            None => Ok(None),
            Some(c) if c.id == ALL_CATEGORIES => Ok(None),
            Some(c) if c.id < 0 => Err(ValidationError::UnknownReference {
                field: "quiz_category",
                id: c.id.into(),
            }),
            Some(c) => Ok(Some(CategoryId(c.id))),
        }
    }

    pub fn previous(&self) -> HashSet<QuestionId> {
        self.previous_questions.iter().copied().collect()
    }
}

/// Pick a random candidate that hasn't been seen yet.
///
/// Returns `None` once every candidate is in `previous`.
pub fn pick_next<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<&'a Question> {
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    unseen.choose(rng).copied()
}

/// Accept `null`, numbers and numeric strings in the id list.
fn nullable_ids<'de, D>(deserializer: D) -> Result<Vec<QuestionId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<IntOrString>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|id| id.into_int().map(QuestionId))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i32) -> Question {
        Question {
            id: QuestionId(id),
            question: format!("question {}", id),
            answer: "answer".into(),
            category: CategoryId(1),
            difficulty: 1,
        }
    }

    #[test]
    fn never_returns_previous() {
        let candidates: Vec<Question> = (1..=6).map(question).collect();
        let previous: HashSet<QuestionId> = [1, 2, 3, 5].into_iter().map(QuestionId).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let picked = pick_next(&candidates, &previous, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn exhausted_pool_returns_none() {
        let candidates: Vec<Question> = (1..=3).map(question).collect();
        let previous: HashSet<QuestionId> = [1, 2, 3].into_iter().map(QuestionId).collect();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(pick_next(&candidates, &previous, &mut rng).is_none());
        assert!(pick_next(&[], &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn reaches_every_unseen_candidate() {
        let candidates: Vec<Question> = (1..=4).map(question).collect();
        let previous: HashSet<QuestionId> = [QuestionId(2)].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<QuestionId> = (0..200)
            .filter_map(|_| pick_next(&candidates, &previous, &mut rng))
            .map(|q| q.id)
            .collect();
        let expected: HashSet<QuestionId> = [1, 3, 4].into_iter().map(QuestionId).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn parses_frontend_body() {
        let req: QuizRequest = serde_json::from_value(serde_json::json!({
            "previous_questions": [5, "9"],
            "quiz_category": {"id": "3", "type": "Geography"}
        }))
        .unwrap();

        assert_eq!(req.previous_questions, vec![QuestionId(5), QuestionId(9)]);
        assert_eq!(req.scope().unwrap(), Some(CategoryId(3)));
    }

    #[test]
    fn zero_or_missing_category_means_all() {
        let req: QuizRequest = serde_json::from_value(serde_json::json!({
            "previous_questions": null,
            "quiz_category": {"id": 0, "type": "click"}
        }))
        .unwrap();
        assert!(req.previous_questions.is_empty());
        assert_eq!(req.scope().unwrap(), None);

        let req: QuizRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(req.scope().unwrap(), None);
    }

    #[test]
    fn rejects_garbage_ids() {
        let result: Result<QuizRequest, _> = serde_json::from_value(serde_json::json!({
            "quiz_category": {"id": "science"}
        }));
        assert!(result.is_err());

        let req: QuizRequest = serde_json::from_value(serde_json::json!({
            "quiz_category": {"id": -2}
        }))
        .unwrap();
        assert!(req.scope().is_err());
    }
}
