use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::models::{Category, Complaint, ParseEnumError, Status};

/// Category selector; `All` passes every complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.label()),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Current board criteria. Predicates run in order: category, status, search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplaintFilter {
    pub category: CategoryFilter,
    pub status: Option<Status>,
    pub search: String,
}

impl ComplaintFilter {
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Status card click: picking the active status clears it.
    pub fn toggle_status(&mut self, status: Status) {
        self.status = if self.status == Some(status) {
            None
        } else {
            Some(status)
        };
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn matches(&self, complaint: &Complaint) -> bool {
        if !self.category.matches(complaint.category) {
            return false;
        }
        if let Some(status) = self.status {
            if complaint.status != status {
                return false;
            }
        }
        title_matches(&complaint.title, &self.search)
    }

    pub fn apply<'a>(&self, complaints: &'a [Complaint]) -> Vec<&'a Complaint> {
        complaints.iter().filter(|c| self.matches(c)).collect()
    }

    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || self.status.is_some() || !self.search.is_empty()
    }
}

/// Case-insensitive substring test that ignores punctuation, so `wifi`
/// finds `Wi-Fi`. Whitespace runs count as a single word separator.
pub fn title_matches(title: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let folded_query = fold(query);
    if folded_query.is_empty() {
        return title.to_lowercase().contains(&query.to_lowercase());
    }
    fold(title).contains(&folded_query)
}

fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() {
            if !folded.ends_with(' ') {
                folded.push(' ');
            }
        } else if c.is_alphanumeric() {
            folded.extend(c.to_lowercase());
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn titles(records: &[&Complaint]) -> Vec<String> {
        records.iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn default_filter_passes_everything_in_order() {
        let complaints = seed::sample_complaints();
        let filtered = ComplaintFilter::default().apply(&complaints);
        let ids: Vec<u32> = filtered.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_is_case_insensitive_and_ignores_hyphens() {
        let complaints = seed::sample_complaints();
        let mut filter = ComplaintFilter::default();
        filter.set_search("wifi");
        assert_eq!(
            titles(&filter.apply(&complaints)),
            vec!["Wi-Fi connectivity issues"]
        );

        filter.set_search("LIBRARY ac");
        assert_eq!(titles(&filter.apply(&complaints)), vec!["Library AC not working"]);
    }

    #[test]
    fn search_does_not_match_across_word_boundaries() {
        let complaints = seed::sample_complaints();
        let mut filter = ComplaintFilter::default();
        filter.set_search("a c");
        assert!(titles(&filter.apply(&complaints)).is_empty());

        filter.set_search("space  shortage");
        assert_eq!(titles(&filter.apply(&complaints)), vec!["Parking space shortage"]);
        assert!(!title_matches("Parking space shortage", "gspace"));
    }

    #[test]
    fn search_without_hits_is_empty_not_error() {
        let complaints = seed::sample_complaints();
        let mut filter = ComplaintFilter::default();
        filter.set_search("elevator");
        assert!(filter.apply(&complaints).is_empty());
    }

    #[test]
    fn punctuation_only_query_uses_plain_substring() {
        assert!(title_matches("Wi-Fi connectivity issues", "-"));
        assert!(!title_matches("Library AC not working", "-"));
    }

    #[test]
    fn predicates_combine_with_and() {
        let complaints = seed::sample_complaints();
        let filter = ComplaintFilter {
            category: CategoryFilter::Only(Category::Facilities),
            status: Some(Status::InProgress),
            search: "parking".to_string(),
        };
        assert_eq!(titles(&filter.apply(&complaints)), vec!["Parking space shortage"]);

        let filter = ComplaintFilter {
            category: CategoryFilter::Only(Category::Facilities),
            status: Some(Status::Resolved),
            search: String::new(),
        };
        assert!(filter.apply(&complaints).is_empty());
    }

    #[test]
    fn adding_a_predicate_never_grows_the_result() {
        let complaints = seed::sample_complaints();
        let searches = ["", "o", "wifi", "zzz"];
        let statuses = [None, Some(Status::Pending), Some(Status::InProgress), Some(Status::Resolved)];

        for search in searches {
            let base = ComplaintFilter {
                search: search.to_string(),
                ..ComplaintFilter::default()
            };
            let base_len = base.apply(&complaints).len();

            for status in statuses {
                let narrowed = ComplaintFilter { status, ..base.clone() };
                assert!(narrowed.apply(&complaints).len() <= base_len);

                for category in Category::ALL {
                    let narrower = ComplaintFilter {
                        category: CategoryFilter::Only(category),
                        ..narrowed.clone()
                    };
                    assert!(narrower.apply(&complaints).len() <= narrowed.apply(&complaints).len());
                }
            }
        }
    }

    #[test]
    fn toggling_the_active_status_clears_it() {
        let mut filter = ComplaintFilter::default();
        filter.toggle_status(Status::Pending);
        assert_eq!(filter.status, Some(Status::Pending));
        filter.toggle_status(Status::Resolved);
        assert_eq!(filter.status, Some(Status::Resolved));
        filter.toggle_status(Status::Resolved);
        assert_eq!(filter.status, None);
        assert!(!filter.is_active());
    }

    #[test]
    fn category_filter_parses_all() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Equipment".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Equipment))
        );
        assert!("Sports".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn serializes_filter_with_display_names() {
        let mut filter = ComplaintFilter::default();
        filter.set_category(CategoryFilter::Only(Category::FoodAndDining));
        filter.toggle_status(Status::InProgress);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "Food & Dining", "status": "in-progress", "search": ""})
        );
    }

    #[test]
    fn filtering_does_not_mutate_records() {
        let complaints = seed::sample_complaints();
        let before = complaints.clone();
        let mut filter = ComplaintFilter::default();
        filter.toggle_status(Status::Pending);
        let _ = filter.apply(&complaints);
        assert_eq!(complaints, before);
    }
}
