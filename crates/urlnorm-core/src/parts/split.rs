//! URL string → [`UrlParts`].

use super::UrlParts;
use crate::error::InvalidUrl;
use crate::schemes;

/// Splits `url` into its six components.
///
/// Leading spaces and C0 controls are stripped and embedded TAB/CR/LF removed
/// first. The scheme is lowercased. Fails only when the authority holds an
/// unbalanced `[` or `]`.
pub fn split(url: &str) -> Result<UrlParts, InvalidUrl> {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let (scheme, rest) = split_scheme(&cleaned);

    let (authority, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            let authority = &after[..end];
            if authority.contains('[') != authority.contains(']') {
                return Err(InvalidUrl::no_host(authority));
            }
            (authority, &after[end..])
        }
        None => ("", rest),
    };

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    let (path, params) = if schemes::uses_params(&scheme) && path.contains(';') {
        split_params(path)
    } else {
        (path, "")
    };

    Ok(UrlParts {
        scheme,
        authority: authority.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    })
}

/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`, then `:`.
fn split_scheme(url: &str) -> (String, &str) {
    if let Some((candidate, rest)) = url.split_once(':') {
        let starts_alpha = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        let valid = candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if starts_alpha && valid {
            return (candidate.to_ascii_lowercase(), rest);
        }
    }
    (String::new(), url)
}

/// Params start at the first `;` of the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(i) => {
            let at = last_segment + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}
