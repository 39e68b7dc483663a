//! Error type for URL normalization failures.

use std::fmt;

/// Why a URL could not be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidUrlKind {
    /// No scheme before the first `:`.
    MissingScheme,
    /// Authority (netloc) is absent or normalized to nothing.
    MissingAuthority,
    /// Authority does not match `[userinfo@]host[:port]`.
    NoHost,
    /// Host is neither dotted nor a bracketed IPv6 literal.
    InvalidHost,
    /// Digit-only host does not fit in 32 bits.
    BadDwordIp,
    /// A `xn--` label failed punycode decoding.
    IdnaError,
}

impl InvalidUrlKind {
    /// Short reason tag, stable for logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidUrlKind::MissingScheme => "missing_scheme",
            InvalidUrlKind::MissingAuthority => "missing_authority",
            InvalidUrlKind::NoHost => "no_host",
            InvalidUrlKind::InvalidHost => "invalid_host",
            InvalidUrlKind::BadDwordIp => "bad_dword_ip",
            InvalidUrlKind::IdnaError => "idna_error",
        }
    }
}

impl fmt::Display for InvalidUrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL that cannot be normalized. Carries the reason and a message naming the offending part.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid URL ({kind}): {message}")]
pub struct InvalidUrl {
    pub kind: InvalidUrlKind,
    pub message: String,
}

impl InvalidUrl {
    pub fn new(kind: InvalidUrlKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn missing_scheme() -> Self {
        Self::new(InvalidUrlKind::MissingScheme, "missing URL scheme")
    }

    pub(crate) fn missing_authority() -> Self {
        Self::new(InvalidUrlKind::MissingAuthority, "missing netloc")
    }

    pub(crate) fn no_host(authority: &str) -> Self {
        Self::new(
            InvalidUrlKind::NoHost,
            format!("no host in netloc {authority:?}"),
        )
    }

    pub(crate) fn invalid_host(host: &str) -> Self {
        Self::new(
            InvalidUrlKind::InvalidHost,
            format!("host {host:?} is not valid"),
        )
    }

    pub(crate) fn bad_dword_ip(host: &str) -> Self {
        Self::new(
            InvalidUrlKind::BadDwordIp,
            format!("host {host:?} does not escape to a valid ip"),
        )
    }

    pub(crate) fn idna(label: &str) -> Self {
        Self::new(
            InvalidUrlKind::IdnaError,
            format!("error converting subdomain {label:?} to IDN"),
        )
    }
}
