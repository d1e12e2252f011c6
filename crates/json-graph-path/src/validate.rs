//! Path validation.

use crate::types::PathStep;
use crate::PathError;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a path.
///
/// # Errors
///
/// Returns `PathError::PathTooLong` if the path is deeper than 256 steps.
pub fn validate_path(path: &[PathStep]) -> Result<(), PathError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::PathTooLong);
    }
    Ok(())
}
