//! Substring search over question text

use super::ValidationError;

/// Maximum length for a search term
const MAX_TERM_LEN: usize = 200;

/// Validated search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    term: String,
    case_sensitive: bool,
}

impl SearchTerm {
    /// Create a search term. Surrounding whitespace is dropped; a blank
    /// term is a substring of everything and matches every question.
    pub fn new(raw: &str, case_sensitive: bool) -> Result<Self, ValidationError> {
        let term = raw.trim();
        if term.chars().count() > MAX_TERM_LEN {
            return Err(ValidationError::TooLong {
                field: "searchTerm",
                max: MAX_TERM_LEN,
            });
        }

        Ok(Self {
            term: term.to_owned(),
            case_sensitive,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.term
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// True when `text` contains the term.
    pub fn matches(&self, text: &str) -> bool {
        if self.case_sensitive {
            text.contains(&self.term)
        } else {
            text.to_lowercase().contains(&self.term.to_lowercase())
        }
    }

    /// `%term%` with LIKE metacharacters escaped (backslash is the default
    /// escape character in Postgres).
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_matches_everything() {
        let term = SearchTerm::new("  ", true).unwrap();
        assert_eq!(term.as_str(), "");
        assert!(term.matches("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"));
        assert_eq!(term.like_pattern(), "%%");
    }

    #[test]
    fn rejects_overlong() {
        let err = SearchTerm::new(&"a".repeat(MAX_TERM_LEN + 1), false).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "searchTerm", .. }));
    }

    #[test]
    fn case_insensitive_match() {
        let term = SearchTerm::new("title", false).unwrap();
        assert!(term.matches("What movie earned the TITLE?"));
        assert!(!term.matches("Who invented Peanut Butter?"));
    }

    #[test]
    fn case_sensitive_match() {
        let term = SearchTerm::new("Title", true).unwrap();
        assert!(term.matches("Title of the book"));
        assert!(!term.matches("title of the book"));
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        let term = SearchTerm::new("100%_sure\\", false).unwrap();
        assert_eq!(term.like_pattern(), r"%100\%\_sure\\%");
    }

    #[test]
    fn trims_term() {
        let term = SearchTerm::new("  lake ", false).unwrap();
        assert_eq!(term.as_str(), "lake");
    }
}
