//! Display-name rules shared by directors and genres.

use crate::error::CoreError;

/// Upper bound on a director or genre name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Normalize a user-supplied display name.
///
/// Surrounding whitespace is stripped. Blank names and names longer than
/// [`MAX_NAME_LEN`] are rejected.
///
/// ```
/// use moviedb_core::naming::normalize_name;
///
/// assert_eq!(normalize_name("  Nolan ").unwrap(), "Nolan");
/// assert!(normalize_name("   ").is_err());
/// ```
pub fn normalize_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be blank".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}
