//! Pagination types

use serde::Deserialize;

use super::ValidationError;

/// Questions returned per page on every listing endpoint
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination for a 1-indexed page.
    ///
    /// Page zero is rejected rather than clamped so a client asking for it
    /// learns about the mistake.
    pub fn new(page: u32, per_page: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::OutOfRange {
                field: "page",
                min: 1,
                max: i64::from(u32::MAX),
                value: 0,
            });
        }

        Ok(Self {
            page,
            per_page: per_page.max(1),
        })
    }

    /// The last page of `paged`, with the same page size.
    pub fn last_of<T>(paged: &Paginated<T>) -> Self {
        Self {
            page: paged.total_pages(),
            per_page: paged.per_page.max(1),
        }
    }

    /// First page of questions.
    pub fn first() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.per_page)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first()
    }
}

/// Paginated result: one page of items plus the size of the whole set
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T: Clone> Paginated<T> {
    /// Slice one page out of a fully materialised result set.
    pub fn from_slice(all: &[T], page: Pagination) -> Self {
        let start = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = all
            .iter()
            .skip(start)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Self {
            items,
            total: all.len() as i64,
            page: page.page,
            per_page: page.per_page,
        }
    }
}

impl<T> Paginated<T> {
    /// Calculate total number of pages (at least one).
    pub fn total_pages(&self) -> u32 {
        if self.total <= 0 {
            1
        } else {
            let per_page = i64::from(self.per_page.max(1));
            u32::try_from((self.total + per_page - 1) / per_page).unwrap_or(u32::MAX)
        }
    }

    /// True when a page past the first holds nothing.
    ///
    /// The first page is never out of range, even for an empty set.
    pub fn is_out_of_range(&self) -> bool {
        self.items.is_empty() && self.page > 1
    }
}

/// Query parameters for pagination (`?page=N`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ValidationError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        Self::new(params.page.unwrap_or(1), QUESTIONS_PER_PAGE)
    }
}
