//! Selective percent-decoding.
//!
//! An escape is replaced by its literal byte unless the byte is a control
//! character or belongs to the unsafe set of the URL part being decoded; kept
//! escapes are rewritten with uppercase hex digits. Escapes are decoded at the
//! byte level and the result is reassembled as UTF-8 text.

/// Bytes that stay escaped inside a path.
pub const PATH_UNSAFE: &[u8] = b"/?;%+#";
/// Bytes that stay escaped inside `;params`.
pub const PARAMS_UNSAFE: &[u8] = b"?=+%#;";
/// Bytes that stay escaped inside a query string.
pub const QUERY_UNSAFE: &[u8] = b"?&=+%#";
/// Bytes that stay escaped inside a fragment.
pub const FRAGMENT_UNSAFE: &[u8] = b"+%#";

pub fn unquote_path(s: &str) -> String {
    unquote_safe(s, PATH_UNSAFE)
}

pub fn unquote_params(s: &str) -> String {
    unquote_safe(s, PARAMS_UNSAFE)
}

pub fn unquote_qs(s: &str) -> String {
    unquote_safe(s, QUERY_UNSAFE)
}

pub fn unquote_fragment(s: &str) -> String {
    unquote_safe(s, FRAGMENT_UNSAFE)
}

/// Decodes every `%XX` escape in `s` except those that decode to a control
/// character or to a byte in `unsafe_bytes`.
///
/// A `%` not followed by two hex digits is left as is. Decoded bytes that do
/// not form valid UTF-8 are each mapped to the code point of the same value.
///
/// ```
/// use urlnorm_core::unquote::{unquote_safe, PATH_UNSAFE};
///
/// assert_eq!(unquote_safe("abcde%20def", PATH_UNSAFE), "abcde def");
/// assert_eq!(unquote_safe("%3f", b"?"), "%3F");
/// ```
pub fn unquote_safe(s: &str, unsafe_bytes: &[u8]) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some((high, low)) = hex_pair(&bytes[i + 1..]) {
                let value = high << 4 | low;
                if value < 0x20 || unsafe_bytes.contains(&value) {
                    out.push(b'%');
                    out.push(bytes[i + 1].to_ascii_uppercase());
                    out.push(bytes[i + 2].to_ascii_uppercase());
                } else {
                    out.push(value);
                }
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    decode_utf8_or_raw(&out)
}

fn hex_pair(rest: &[u8]) -> Option<(u8, u8)> {
    match rest {
        [h, l, ..] => Some((hex_digit(*h)?, hex_digit(*l)?)),
        _ => None,
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// UTF-8 decode where each byte of an invalid sequence becomes `char::from(byte)`.
fn decode_utf8_or_raw(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        out.extend(chunk.invalid().iter().map(|&b| char::from(b)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_decoded_everywhere() {
        assert_eq!(unquote_safe("%20", b""), " ");
        assert_eq!(unquote_path("abcde%20def"), "abcde def");
        assert_eq!(unquote_qs("que%20ry=str%20ing"), "que ry=str ing");
        assert_eq!(unquote_fragment("frag%20ment"), "frag ment");
    }

    #[test]
    fn unsafe_escape_kept_and_uppercased() {
        assert_eq!(unquote_safe("%3f", b"?"), "%3F");
        assert_eq!(unquote_qs("a=%26&b=%2b"), "a=%26&b=%2B");
        assert_eq!(unquote_fragment("test-%23-val%25"), "test-%23-val%25");
        assert_eq!(unquote_params("x%3b%3dy"), "x%3B%3Dy");
    }

    #[test]
    fn tilde_decodes_in_either_case() {
        assert_eq!(unquote_path("/%7ebar"), "/~bar");
        assert_eq!(unquote_path("/%7Ebar"), "/~bar");
    }

    #[test]
    fn percent_never_decodes_to_literal() {
        assert_eq!(unquote_path("/%25/"), "/%25/");
        assert_eq!(unquote_qs("p=val%25ue"), "p=val%25ue");
        assert_eq!(unquote_fragment("%25"), "%25");
    }

    #[test]
    fn control_characters_stay_escaped() {
        assert_eq!(unquote_safe("a%0ab%1Fc%00", b""), "a%0Ab%1Fc%00");
        assert_eq!(unquote_safe("%7f", b""), "\u{7f}");
    }

    #[test]
    fn multibyte_sequences_decode_to_text() {
        assert_eq!(unquote_safe("%E3%82%AD", b""), "\u{30ad}");
        assert_eq!(unquote_qs("a=%e3%82%82%26"), "a=\u{3082}%26");
    }

    #[test]
    fn not_an_escape_is_untouched() {
        assert_eq!(unquote_safe("100%", b""), "100%");
        assert_eq!(unquote_safe("%2", b""), "%2");
        assert_eq!(unquote_safe("%zz%41", b""), "%zzA");
        assert_eq!(unquote_safe("%%41", b""), "%A");
    }

    #[test]
    fn plus_is_never_altered() {
        assert_eq!(unquote_path("a+b"), "a+b");
        assert_eq!(unquote_qs("a=b+c"), "a=b+c");
        assert_eq!(unquote_path("a%2bb"), "a%2Bb");
    }

    #[test]
    fn invalid_utf8_falls_back_to_raw_code_points() {
        assert_eq!(unquote_safe("%FF", b""), "\u{ff}");
        assert_eq!(unquote_safe("caf%E9", b""), "caf\u{e9}");
        assert_eq!(unquote_safe("%E3%82x", b""), "\u{e3}\u{82}x");
    }
}
