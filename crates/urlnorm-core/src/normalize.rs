//! Whole-URL normalization: split, normalize each component, recompose.

use crate::authority::normalize_authority;
use crate::error::InvalidUrl;
use crate::parts::{self, UrlParts};
use crate::path::normalize_path;
use crate::unquote::{unquote_fragment, unquote_params, unquote_qs};

/// Returns the canonical form of `url`.
///
/// # Examples
///
/// ```
/// use urlnorm_core::normalize;
///
/// assert_eq!(normalize("HTTP://www.Foo.com:80/a/./b/../c").unwrap(), "http://www.foo.com/a/c");
/// assert!(normalize("asdf").is_err());
/// ```
pub fn normalize(url: &str) -> Result<String, InvalidUrl> {
    let result = parts::split(url).and_then(normalize_parts);
    match result {
        Ok(normalized) => Ok(parts::recompose(&normalized)),
        Err(err) => {
            tracing::debug!(url, reason = err.kind.as_str(), "rejected URL: {}", err.message);
            Err(err)
        }
    }
}

/// Normalizes already-split components. Scheme and authority are mandatory.
pub fn normalize_parts(parts: UrlParts) -> Result<UrlParts, InvalidUrl> {
    let scheme = parts.scheme.to_ascii_lowercase();
    if scheme.is_empty() {
        return Err(InvalidUrl::missing_scheme());
    }
    let authority = normalize_authority(&scheme, &parts.authority)?;
    if authority.is_empty() {
        return Err(InvalidUrl::missing_authority());
    }
    let path = normalize_path(&scheme, &parts.path);

    Ok(UrlParts {
        scheme,
        authority,
        path,
        params: unquote_params(&parts.params),
        query: unquote_qs(&parts.query),
        fragment: unquote_fragment(&parts.fragment),
    })
}

/// True when both URLs normalize to the same string.
pub fn urls_equivalent(a: &str, b: &str) -> Result<bool, InvalidUrl> {
    Ok(normalize(a)? == normalize(b)?)
}
