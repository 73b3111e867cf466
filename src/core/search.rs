use crate::core::errors::DirectoryError;
use crate::core::models::user::{SearchField, User, UserId, UserSummary};
use crate::infrastructure::storage::Storage;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(Vec<UserSummary>),
    NoMatches,
}

impl SearchOutcome {
    pub fn into_results(self) -> Vec<UserSummary> {
        match self {
            SearchOutcome::Matches(results) => results,
            SearchOutcome::NoMatches => Vec::new(),
        }
    }
}

/// Case folding used by every store, so `Ärger` and `ärger` compare equal
/// whichever backend holds the record.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

/// Runs one substring lookup per searchable field and ORs the results.
///
/// A user matching on both name and email is reported once. Results come back
/// in ascending id order regardless of the order the store returned them.
pub async fn search_users<S: Storage + ?Sized>(storage: &S, query: &str) -> Result<SearchOutcome, DirectoryError> {
    let mut matched: BTreeMap<UserId, User> = BTreeMap::new();
    for field in SearchField::ALL {
        for user in storage.find_by_substring(field, query).await? {
            matched.entry(user.id).or_insert(user);
        }
    }

    if matched.is_empty() {
        return Ok(SearchOutcome::NoMatches);
    }
    Ok(SearchOutcome::Matches(
        matched.into_values().map(UserSummary::from).collect(),
    ))
}
