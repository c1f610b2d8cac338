//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod search;

use serde::Serialize;

use crate::models::{Paginated, Question};

/// Page of questions as every listing endpoint returns it
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<i32>,
}

impl QuestionPage {
    pub fn new(page: Paginated<Question>, current_category: Option<i32>) -> Self {
        Self {
            success: true,
            questions: page.items,
            total_questions: page.total,
            current_category,
        }
    }
}
