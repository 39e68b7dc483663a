//! Host rewrites: dword IPs and punycode labels.

use std::net::Ipv4Addr;

use crate::error::InvalidUrl;

/// Formats a 32-bit integer IP as a dotted quad.
///
/// Fails with `bad_dword_ip` when `n` exceeds `0xFFFFFFFF`.
pub fn dword_to_ipv4(n: u64) -> Result<String, InvalidUrl> {
    let ip = u32::try_from(n).map_err(|_| InvalidUrl::bad_dword_ip(&n.to_string()))?;
    Ok(Ipv4Addr::from(ip).to_string())
}

/// Rewrites a digit-only host. Values too large for any integer type are out of range too.
pub(super) fn dword_host(host: &str) -> Result<String, InvalidUrl> {
    let n: u64 = host.parse().map_err(|_| InvalidUrl::bad_dword_ip(host))?;
    dword_to_ipv4(n).map_err(|_| InvalidUrl::bad_dword_ip(host))
}

/// Decodes every `xn--` label of a lowercase host to Unicode.
pub(super) fn decode_idn(host: &str) -> Result<String, InvalidUrl> {
    let labels = host
        .split('.')
        .map(decode_label)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(labels.join("."))
}

fn decode_label(label: &str) -> Result<String, InvalidUrl> {
    if !label.starts_with("xn--") {
        return Ok(label.to_string());
    }
    let (decoded, result) = idna::domain_to_unicode(label);
    if result.is_err() || decoded.is_empty() {
        tracing::debug!(label, "punycode label rejected");
        return Err(InvalidUrl::idna(label));
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidUrlKind;

    #[test]
    fn dword_bounds() {
        assert_eq!(dword_to_ipv4(0).unwrap(), "0.0.0.0");
        assert_eq!(dword_to_ipv4(1113982867).unwrap(), "66.102.7.147");
        assert_eq!(dword_to_ipv4(0xFFFF_FFFF).unwrap(), "255.255.255.255");
        assert_eq!(
            dword_to_ipv4(0x1_0000_0000).unwrap_err().kind,
            InvalidUrlKind::BadDwordIp
        );
    }

    #[test]
    fn dword_host_with_leading_zeros() {
        assert_eq!(dword_host("0000000001").unwrap(), "0.0.0.1");
    }

    #[test]
    fn plain_labels_untouched() {
        assert_eq!(decode_idn("www.example.com").unwrap(), "www.example.com");
    }

    #[test]
    fn only_prefixed_labels_decode() {
        assert_eq!(decode_idn("axn--q-bga.com").unwrap(), "axn--q-bga.com");
        assert_eq!(decode_idn("xn--q-bga.com").unwrap(), "q\u{e9}.com");
    }

    #[test]
    fn malformed_punycode_fails() {
        let err = decode_idn("www.xn--zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz.com").unwrap_err();
        assert_eq!(err.kind, InvalidUrlKind::IdnaError);
    }
}
