//! Validation helpers for DTOs.

use std::collections::HashSet;

use validator::ValidationError;

use crate::dao::models::Genre;

/// Validates that a genre list carries no duplicate tags.
///
/// The count bound (1 to 4 entries) is enforced by the derive-level `length`
/// rule; this helper only checks uniqueness.
pub fn validate_genres(genres: &[Genre]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for genre in genres {
        if !seen.insert(genre) {
            let mut err = ValidationError::new("genres_duplicate");
            err.message = Some(format!("genre {genre:?} appears more than once").into());
            return Err(err);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_genres_unique() {
        assert!(validate_genres(&[Genre::Action]).is_ok());
        assert!(validate_genres(&[Genre::Action, Genre::Adventure]).is_ok());
        assert!(validate_genres(&[]).is_ok());
    }

    #[test]
    fn test_validate_genres_duplicates() {
        assert!(validate_genres(&[Genre::Action, Genre::Action]).is_err());
        assert!(validate_genres(&[Genre::Sandbox, Genre::Adventure, Genre::Sandbox]).is_err());
    }
}
