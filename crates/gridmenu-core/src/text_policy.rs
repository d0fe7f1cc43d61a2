//! Text shaping and truncation for the title line and counters.

use core::str;

pub const TITLE_BUFFER_BYTES: usize = 160;
pub const POSITION_BUFFER_BYTES: usize = 24;

/// Copy at most `max_chars` characters of `source` into `out`, appending
/// `...` when anything was cut. Never splits a UTF-8 sequence.
pub fn title_limited<'a>(source: &str, out: &'a mut [u8], max_chars: usize) -> &'a str {
    let source = source.trim();
    if out.is_empty() || max_chars == 0 {
        return "";
    }

    let mut len = 0usize;
    let mut truncated = false;

    for (char_count, ch) in source.chars().enumerate() {
        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).as_bytes();
        if char_count >= max_chars || len + encoded.len() > out.len() {
            truncated = true;
            break;
        }

        out[len..len + encoded.len()].copy_from_slice(encoded);
        len += encoded.len();
    }

    if truncated {
        // Make room for the ellipsis on a char boundary.
        while len > 0 && len + 3 > out.len() {
            len -= 1;
            while len > 0 && (out[len] & 0xC0) == 0x80 {
                len -= 1;
            }
        }
        if len + 3 <= out.len() {
            out[len..len + 3].copy_from_slice(b"...");
            len += 3;
        }
    }

    str::from_utf8(&out[..len]).unwrap_or("?")
}

/// `"<index + 1>/<total>"`.
pub fn position_label(index: usize, total: usize, out: &mut [u8]) -> &str {
    let mut len = write_usize_ascii(index.saturating_add(1), out);
    if len < out.len() {
        out[len] = b'/';
        len += 1;
        len += write_usize_ascii(total, &mut out[len..]);
    }

    str::from_utf8(&out[..len]).unwrap_or("")
}

pub fn write_usize_ascii(mut value: usize, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 20];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_pass_through() {
        let mut out = [0u8; TITLE_BUFFER_BYTES];
        assert_eq!(title_limited("  Crazy Taxi ", &mut out, 48), "Crazy Taxi");
    }

    #[test]
    fn long_titles_get_an_ellipsis() {
        let mut out = [0u8; TITLE_BUFFER_BYTES];
        assert_eq!(
            title_limited("Sonic Adventure 2", &mut out, 5),
            "Sonic..."
        );
    }

    #[test]
    fn truncation_respects_multibyte_chars() {
        let mut out = [0u8; 8];
        let title = title_limited("ソウルキャリバー", &mut out, 48);
        assert_eq!(title, "ソ...");
    }

    #[test]
    fn position_is_one_based() {
        let mut out = [0u8; POSITION_BUFFER_BYTES];
        assert_eq!(position_label(0, 7, &mut out), "1/7");
        assert_eq!(position_label(119, 120, &mut out), "120/120");
    }
}
