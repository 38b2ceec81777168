//! Completed-course set

use super::course::normalize_code;
use std::collections::BTreeSet;

/// The normalized codes of every course a student has completed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    codes: BTreeSet<String>,
}

impl CompletionSet {
    /// Create an empty completion set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated code list such as `"CPS100, cps210,MAT320"`.
    /// Blank items are ignored.
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Mark a course as completed. Blank codes are ignored.
    pub fn insert(&mut self, code: &str) {
        let code = normalize_code(code);
        if !code.is_empty() {
            self.codes.insert(code);
        }
    }

    /// Whether a course has been completed (case-insensitive)
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(&normalize_code(code))
    }

    /// Number of completed courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether nothing has been completed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Completed codes in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for code in iter {
            set.insert(code.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_normalized() {
        let set: CompletionSet = ["cps100", " CPS210 "].into_iter().collect();

        assert!(set.contains("CPS100"));
        assert!(set.contains("cps210"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_list_skips_blanks() {
        let set = CompletionSet::parse_list("CPS100, ,cps210,,MAT320 ");

        let codes: Vec<&str> = set.iter().collect();
        assert_eq!(codes, vec!["CPS100", "CPS210", "MAT320"]);
    }

    #[test]
    fn test_empty_set() {
        let set = CompletionSet::parse_list("");
        assert!(set.is_empty());
        assert!(!set.contains(""));
    }
}
