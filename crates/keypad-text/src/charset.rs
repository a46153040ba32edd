//! Per-key multi-tap character sets.

/// Cycle order for keys `0`..=`9`: Latin letters, the digit itself, then the
/// Ukrainian letters printed on the keycaps.
const KEY_CHARSETS: [&str; 10] = [
    " 0",
    ".,?!1",
    "abc2абвгґ",
    "def3деєжз",
    "ghi4иіїйкл",
    "jkl5мноп",
    "mno6рсту",
    "pqrs7фхцч",
    "tuv8шщ",
    "wxyz9ьюя",
];

/// Characters cycled by `digit`, or `None` for anything outside `0..=9`.
pub fn charset(digit: u8) -> Option<&'static str> {
    KEY_CHARSETS.get(digit as usize).copied()
}

/// Number of codepoints in the set for `digit` (`0` for unknown keys).
pub fn charset_len(digit: u8) -> usize {
    charset(digit).map_or(0, |set| set.chars().count())
}

/// Character at `cycle_index` for `digit`, wrapping around the set.
pub fn char_at(digit: u8, cycle_index: usize) -> Option<char> {
    let set = charset(digit)?;
    let len = set.chars().count();
    if len == 0 {
        return None;
    }
    set.chars().nth(cycle_index % len)
}

/// Shift only flips ASCII letters. Cyrillic and punctuation pass through
/// unchanged; the device has no case tables for other scripts.
pub fn apply_shift(ch: char) -> char {
    if ch.is_ascii_lowercase() {
        ch.to_ascii_uppercase()
    } else if ch.is_ascii_uppercase() {
        ch.to_ascii_lowercase()
    } else {
        ch
    }
}
