//! [`UrlParts`] → URL string.

use super::UrlParts;
use crate::schemes;

/// Joins components back into a URL. Empty params, query and fragment are
/// omitted along with their delimiters.
pub fn recompose(parts: &UrlParts) -> String {
    let mut url = parts.path.clone();
    if !parts.params.is_empty() {
        url.push(';');
        url.push_str(&parts.params);
    }

    let netloc_scheme =
        !parts.scheme.is_empty() && schemes::uses_netloc(&parts.scheme) && !url.starts_with("//");
    if !parts.authority.is_empty() || netloc_scheme {
        if !url.is_empty() && !url.starts_with('/') {
            url.insert(0, '/');
        }
        url = format!("//{}{}", parts.authority, url);
    }

    if !parts.scheme.is_empty() {
        url = format!("{}:{}", parts.scheme, url);
    }
    if !parts.query.is_empty() {
        url.push('?');
        url.push_str(&parts.query);
    }
    if !parts.fragment.is_empty() {
        url.push('#');
        url.push_str(&parts.fragment);
    }
    url
}
