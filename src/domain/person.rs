//! Person domain model and the roster search filter.
//!
//! This module defines the core `Person` type shared by both roster sections
//! (confirmed friends and inbound pending requests), together with the
//! case-insensitive substring filter the search box applies to first names.

use serde::{Deserialize, Serialize};

/// A person appearing in the roster.
///
/// The same wire shape is used for confirmed friends and pending requests;
/// which section a person belongs to is determined by list membership, not by
/// a field. `sender_email` identifies the sender of an inbound request and is
/// the key the accept flow matches on. The server may omit it for friends
/// that were never accepted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
}

impl Person {
    /// Creates a person with the given names and no sender email.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
            sender_email: None,
        }
    }

    /// Returns "First Last" for row display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the character range of `query` within this person's first
    /// name, compared case-insensitively, or `None` if it does not occur.
    ///
    /// The range is `(start, end)` in character indices (exclusive end),
    /// suitable for the highlight renderer which operates on characters.
    #[must_use]
    pub fn match_span(&self, query: &str) -> Option<(usize, usize)> {
        if query.is_empty() {
            return None;
        }
        let haystack = self.first_name.to_lowercase();
        let needle = query.to_lowercase();
        haystack.find(&needle).map(|byte_start| {
            let start = haystack[..byte_start].chars().count();
            (start, start + needle.chars().count())
        })
    }
}

/// Filters a person list by the search query.
///
/// Keeps exactly the entries whose `first_name`, case-folded, contains the
/// case-folded query as a substring, preserving the original relative order.
/// An empty query is the identity.
#[must_use]
pub fn filter_people(people: &[Person], query: &str) -> Vec<Person> {
    if query.is_empty() {
        return people.to_vec();
    }
    let needle = query.to_lowercase();
    people
        .iter()
        .filter(|person| person.first_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Person> {
        vec![
            Person::new("Alice", "Anders", "alice_a"),
            Person::new("bob", "Marley", "bobm"),
            Person::new("Alicia", "Keys", "akeys"),
            Person::new("Carol", "Danvers", "cd"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let people = roster();
        assert_eq!(filter_people(&people, ""), people);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let people = roster();
        let filtered = filter_people(&people, "ALI");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].first_name, "Alice");
        assert_eq!(filtered[1].first_name, "Alicia");
    }

    #[test]
    fn filter_preserves_relative_order() {
        let people = roster();
        let filtered = filter_people(&people, "o");
        let names: Vec<&str> = filtered.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["bob", "Carol"]);
    }

    #[test]
    fn filter_only_matches_first_name() {
        let people = roster();
        // "Marley" is a last name; must not match.
        assert!(filter_people(&people, "marley").is_empty());
    }

    #[test]
    fn match_span_locates_substring() {
        let person = Person::new("Alicia", "Keys", "akeys");
        assert_eq!(person.match_span("LIC"), Some((1, 4)));
        assert_eq!(person.match_span("zzz"), None);
        assert_eq!(person.match_span(""), None);
    }
}
