//! Authority (netloc) canonicalization.
//!
//! Parses `[userinfo@]host[:port]`, rewrites dword hosts to dotted quads,
//! drops the root-label dot, lowercases the host, decodes punycode labels and
//! elides the scheme's default port.

mod host;

pub use host::dword_to_ipv4;

use host::{decode_idn, dword_host};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::InvalidUrl;
use crate::schemes;

/// `[userinfo@]` then a bracketed IPv6 literal or a host without `:[]`, then `[:port]`.
static AUTHORITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([^@]+)@)?([^:\[\]]+|\[[a-fA-F0-9:.]+\])(?::(.*?))?$")
        .expect("authority pattern is valid")
});

/// Normalizes `authority` for a URL with the given (lowercase) scheme.
///
/// An empty authority is returned unchanged; the caller decides whether that
/// is an error.
pub fn normalize_authority(scheme: &str, authority: &str) -> Result<String, InvalidUrl> {
    if authority.is_empty() {
        return Ok(String::new());
    }
    let caps = AUTHORITY
        .captures(authority)
        .ok_or_else(|| InvalidUrl::no_host(authority))?;
    let userinfo = caps.get(1).map(|m| m.as_str());
    let mut host = caps.get(2).map_or("", |m| m.as_str()).to_string();
    let port = caps.get(3).map_or("", |m| m.as_str());

    if host.bytes().all(|b| b.is_ascii_digit()) {
        host = dword_host(&host)?;
    }
    if host.ends_with('.') {
        host.pop();
    }

    let bracketed = host.starts_with('[') && host.ends_with(']');
    if !host.contains('.') && !bracketed {
        return Err(InvalidUrl::invalid_host(&host));
    }

    host.make_ascii_lowercase();
    if host.contains("xn--") {
        host = decode_idn(&host)?;
    }

    let mut out = String::with_capacity(authority.len());
    if let Some(userinfo) = userinfo {
        out.push_str(userinfo);
        out.push('@');
    }
    out.push_str(&host);
    if !port.is_empty() && schemes::default_port(scheme) != Some(port) {
        out.push(':');
        out.push_str(port);
    }
    tracing::trace!(authority, normalized = %out, "normalized authority");
    Ok(out)
}
