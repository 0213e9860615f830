/*!
 * Name normalization for comparison keys.
 */

/// Reduce a raw title or file name to its canonical comparison key.
///
/// Strips every character outside `[A-Za-z0-9]` and lowercases the rest.
/// The transformation is deterministic, total and lossy: two names that
/// differ only in punctuation, case or spacing produce the same key.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
