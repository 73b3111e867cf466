//! Input checks run at the API boundary, before any store call.

use crate::core::errors::{DirectoryError, FieldError};
use crate::core::models::user::NewUser;

/// Checks a raw search query and returns the trimmed text to match on.
///
/// Absent, empty and whitespace-only input is `EmptyQuery`. Input with no
/// alphanumeric character at all (`"!!"`, `"@-."`) is `SymbolOnlyQuery`.
pub fn validate_query(query: Option<&str>) -> Result<&str, DirectoryError> {
    let query = query.map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(DirectoryError::EmptyQuery);
    }
    if !query.chars().any(char::is_alphanumeric) {
        return Err(DirectoryError::SymbolOnlyQuery);
    }
    Ok(query)
}

/// Presence check for create input. No format or uniqueness rules apply.
pub fn validate_new_user(
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<NewUser, DirectoryError> {
    Ok(NewUser {
        name: required("name", name)?,
        email: required("email", email)?,
        password: required("password", password)?,
    })
}

fn required(field: &str, value: Option<String>) -> Result<String, DirectoryError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DirectoryError::InvalidInput(field.to_string(), FieldError::missing(field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        assert_eq!(validate_query(Some("  ann ")).unwrap(), "ann");
    }

    #[test]
    fn empty_and_blank_queries_are_rejected() {
        for q in [None, Some(""), Some("   ")] {
            assert!(matches!(validate_query(q), Err(DirectoryError::EmptyQuery)));
        }
    }

    #[test]
    fn symbol_only_queries_are_rejected() {
        for q in ["!", "@.", "%%", "-/:[{~", "「」"] {
            assert!(
                matches!(validate_query(Some(q)), Err(DirectoryError::SymbolOnlyQuery)),
                "{q} should be symbol-only"
            );
        }
    }

    #[test]
    fn mixed_queries_pass() {
        for q in ["a@x.com", "@x", "Bob!", "田中", "42"] {
            assert!(validate_query(Some(q)).is_ok(), "{q} should be accepted");
        }
    }

    #[test]
    fn missing_field_is_named() {
        let err = validate_new_user(Some("Anna".into()), Some(" ".into()), Some("pw".into())).unwrap_err();
        match err {
            DirectoryError::InvalidInput(field, detail) => {
                assert_eq!(field, "email");
                assert_eq!(detail.field, "email");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(validate_new_user(Some("Anna".into()), Some("a@x.com".into()), None).is_err());
    }

    #[test]
    fn values_are_kept_as_given() {
        let user = validate_new_user(Some(" Anna ".into()), Some("a@x.com".into()), Some(" pw".into())).unwrap();
        assert_eq!(user.name, " Anna ");
        assert_eq!(user.password, " pw");
    }
}
