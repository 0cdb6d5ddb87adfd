//! Submission validation

use crate::complaint::NewComplaint;
use fixline_core::{Error, Result};

/// Minimum title length in characters
pub const MIN_TITLE_LEN: usize = 3;

/// Minimum description length in characters
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Validate a submission before routing.
///
/// Lengths are counted in characters, not bytes, so multibyte scripts are
/// not penalized.
pub fn validate(complaint: &NewComplaint) -> Result<()> {
    if complaint.title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(Error::validation(format!(
            "title must be at least {} characters",
            MIN_TITLE_LEN
        )));
    }

    if complaint.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
        return Err(Error::validation(format!(
            "description must be at least {} characters",
            MIN_DESCRIPTION_LEN
        )));
    }

    if complaint.department_id.trim().is_empty() {
        return Err(Error::validation("department_id must not be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_minimal_valid_complaint() {
        let complaint = NewComplaint::new("Tap", "dripping all night", "d1");
        validate(&complaint).unwrap();
    }

    #[test]
    fn test_rejects_short_title() {
        let complaint = NewComplaint::new("No", "dripping all night long", "d1");
        let err = validate(&complaint).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_rejects_short_description() {
        let complaint = NewComplaint::new("Leaky tap", "drip", "d1");
        assert!(validate(&complaint).is_err());
    }

    #[test]
    fn test_rejects_whitespace_padding() {
        // Padding must not be able to satisfy the minimum
        let complaint = NewComplaint::new("ab        ", "short     ", "d1");
        assert!(validate(&complaint).is_err());
    }

    #[test]
    fn test_rejects_missing_department() {
        let complaint = NewComplaint::new("Leaky tap", "dripping all night", "  ");
        assert!(validate(&complaint).is_err());
    }
}
