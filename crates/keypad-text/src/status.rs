//! Compact numeric labels for the editor header.

use core::str;

/// Fits `65535:65535`.
pub const POSITION_LABEL_BYTES: usize = 12;

/// `line:column` label, both 1-based.
pub fn cursor_position_label(
    line: u16,
    column: u16,
    out: &mut [u8; POSITION_LABEL_BYTES],
) -> &str {
    let mut len = write_u16_ascii(line, out);
    out[len] = b':';
    len += 1;
    len += write_u16_ascii(column, &mut out[len..]);

    str::from_utf8(&out[..len]).unwrap_or("?")
}

/// Writes `value` in decimal and returns the byte count. Writes nothing and
/// returns 0 when `out` cannot hold every digit.
pub fn write_u16_ascii(mut value: u16, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 5];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    if n > out.len() {
        return 0;
    }

    for i in 0..n {
        out[i] = tmp[n - 1 - i];
    }
    n
}
