//! Selection predicates for tea queries.

use std::collections::HashSet;

use crate::tea::Tea;

/// Describes which teas a query should return.
///
/// A fresh filter matches everything. Each setter narrows it and hands the
/// filter back so calls can be chained:
///
/// ```
/// use hgtea_core::Filter;
///
/// let mut filter = Filter::new();
/// filter.stocked_only().with_types(["Green", "", "oolong"]);
/// assert!(!filter.is_unrestricted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    stocked_only: bool,
    samples_only: bool,
    types: HashSet<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only teas currently on the shelf.
    pub const fn stocked_only(&mut self) -> &mut Self {
        self.stocked_only = true;
        self
    }

    /// Only teas whose size marks them as a sample.
    pub const fn samples_only(&mut self) -> &mut Self {
        self.samples_only = true;
        self
    }

    /// Allows teas of type `kind`, compared case-insensitively.
    pub fn with_type(&mut self, kind: impl AsRef<str>) -> &mut Self {
        self.types.insert(kind.as_ref().to_lowercase());
        self
    }

    /// Allows each non-empty type in `kinds`.
    pub fn with_types<I, S>(&mut self, kinds: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for kind in kinds {
            if !kind.as_ref().is_empty() {
                self.with_type(kind);
            }
        }
        self
    }

    /// True when no predicate is enabled.
    pub fn is_unrestricted(&self) -> bool {
        !self.stocked_only && !self.samples_only && self.types.is_empty()
    }

    /// Whether `tea` passes every enabled predicate.
    pub fn matches(&self, tea: &Tea) -> bool {
        if self.stocked_only && !tea.storage.stocked {
            return false;
        }
        if self.samples_only && !tea.is_sample() {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(&tea.kind.to_lowercase()) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea(kind: &str, stocked: bool, size: &str) -> Tea {
        let mut tea = Tea::new(1, "t");
        tea.kind = kind.to_string();
        tea.storage.stocked = stocked;
        tea.size = size.to_string();
        tea
    }

    #[test]
    fn new_filter_matches_everything() {
        let filter = Filter::new();
        assert!(filter.is_unrestricted());
        assert!(filter.matches(&tea("black", false, "")));
        assert!(filter.matches(&tea("", true, "1kg")));
    }

    #[test]
    fn with_type_is_case_insensitive() {
        let mut filter = Filter::new();
        filter.with_type("GREEN");
        assert!(filter.matches(&tea("Green", false, "")));
        assert!(filter.matches(&tea("green", false, "")));
        assert!(!filter.matches(&tea("black", false, "")));
    }

    #[test]
    fn with_types_skips_empty_strings() {
        let mut filter = Filter::new();
        filter.with_types(["", ""]);
        assert!(filter.is_unrestricted());

        filter.with_types(vec!["Black".to_string(), String::new()]);
        assert_eq!(filter.types, HashSet::from(["black".to_string()]));
    }

    #[test]
    fn setters_chain() {
        let mut filter = Filter::new();
        filter.stocked_only().samples_only().with_type("oolong");

        assert!(filter.matches(&tea("Oolong", true, "25g Sample")));
        assert!(!filter.matches(&tea("Oolong", false, "25g Sample")));
        assert!(!filter.matches(&tea("Oolong", true, "100g")));
        assert!(!filter.matches(&tea("Green", true, "25g Sample")));
    }

    #[test]
    fn type_match_is_exact_not_substring() {
        let mut filter = Filter::new();
        filter.with_type("black");
        assert!(!filter.matches(&tea("Black Flavored", false, "")));
    }
}
