//! Log truncation for response bodies
//!
//! Catalogue listings can be large; only a bounded prefix of any body is
//! written to debug/error logs.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary not past `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}

/// Truncate a body for logging.
///
/// Bodies within the limit are returned unchanged; longer ones are cut on a
/// UTF-8 boundary and suffixed with their total size.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= TRUNCATE_LIMIT {
        return body.to_string();
    }
    let cut = floor_char_boundary(body, TRUNCATE_LIMIT);
    format!("{}... [{} bytes total]", &body[..cut], body.len())
}
