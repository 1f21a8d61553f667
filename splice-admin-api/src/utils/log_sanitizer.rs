//! Keeps response bodies from flooding the log.

/// Maximum number of bytes of a body written to the log.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging, cutting on a char boundary and noting the
/// full length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
