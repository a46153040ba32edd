//! Text width measurement supplied by the display/font side.

/// Pixel width of a UTF-8 run in the font the host draws with.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> u32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> u32,
{
    fn text_width(&self, text: &str) -> u32 {
        self(text)
    }
}

/// Fixed-advance font metrics (every codepoint is `advance_px` wide).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_px: u16,
}

impl MonospaceMetrics {
    /// 6x13 Cyrillic font used by the editor body text.
    pub const FONT_6X13: Self = Self::new(6);

    pub const fn new(advance_px: u16) -> Self {
        Self { advance_px }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn text_width(&self, text: &str) -> u32 {
        let glyphs = text.chars().filter(|ch| *ch != '\n').count() as u32;
        glyphs.saturating_mul(self.advance_px as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_counts_codepoints_not_bytes() {
        let font = MonospaceMetrics::FONT_6X13;
        assert_eq!(font.text_width(""), 0);
        assert_eq!(font.text_width("abc"), 18);
        assert_eq!(font.text_width("\u{0436}\u{0436}"), 12);
    }

    #[test]
    fn closures_measure_too() {
        let bytes = |text: &str| text.len() as u32;
        assert_eq!(bytes.text_width("\u{0436}"), 2);
    }
}
