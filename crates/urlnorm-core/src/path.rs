//! Path canonicalization: segment collapse followed by selective unescaping.

use crate::schemes;
use crate::unquote::unquote_path;

/// Normalizes the path of a URL with the given (lowercase) scheme.
///
/// For relative schemes, `.`, empty and duplicate-slash segments are dropped
/// and `..` removes the previous segment. A `..` with nothing left to remove
/// is kept literally, so `/a/../../b` becomes `/../b`. Other schemes keep the
/// path as is apart from unescaping. The result is never empty.
pub fn normalize_path(scheme: &str, path: &str) -> String {
    let decoded = if schemes::is_relative(scheme) {
        unquote_path(&collapse_segments(path))
    } else {
        unquote_path(path)
    };
    if decoded.is_empty() {
        "/".to_string()
    } else {
        decoded
    }
}

/// Splits `path` into chunks ending at `/` and folds them onto a stack.
fn collapse_segments(path: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for chunk in path.split_inclusive('/') {
        match chunk {
            "/" | "." | "./" => {}
            ".." | "../" => {
                if kept.pop().is_none() {
                    kept.push(chunk);
                }
            }
            _ => kept.push(chunk),
        }
    }

    let mut out = String::with_capacity(path.len() + 1);
    out.push('/');
    out.extend(kept);
    out
}
