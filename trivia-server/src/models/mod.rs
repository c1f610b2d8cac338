//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod de;
pub mod category;
pub mod question;
pub mod search;
pub mod quiz;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{category_map, Category, CategoryId, CategoryMap};
pub use question::{NewQuestion, Question, QuestionId};
pub use search::SearchTerm;
pub use quiz::{pick_next, QuizCategory, QuizRequest};
pub use pagination::{Paginated, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
