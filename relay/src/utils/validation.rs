use crate::error::AppError;

/// Trim surrounding whitespace and leading/trailing separators from the
/// destination subpath supplied by the client.
// Substring check: any occurrence of ".." rejects, even inside a single name.
pub fn sanitize_subpath(raw: &str) -> Result<String, AppError> {
    let cleaned = raw.trim().trim_matches('/');
    if cleaned.contains("..") {
        return Err(AppError::InvalidPath(raw.to_string()));
    }
    Ok(cleaned.to_string())
}

pub fn is_valid_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}
