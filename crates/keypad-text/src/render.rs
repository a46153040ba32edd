//! Editor view model consumed by the board renderer.

use crate::layout::VisualLine;

/// Candidate character drawn underlined at the cursor while a multi-tap cycle
/// is in progress.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CandidateView {
    pub ch: char,
    /// Display offset of the candidate.
    pub byte_start: usize,
    /// Share of the multi-tap window left, 0..=100, for the timeout bar.
    pub remaining_pct: u8,
}

/// Everything the renderer needs for one editor frame.
#[derive(Clone, Copy, Debug)]
pub struct EditorScreen<'a> {
    pub title: &'a str,
    /// `paragraph:column` of the cursor, both 1-based.
    pub position: &'a str,
    /// Laid-out text, candidate included. Line ranges index into it.
    pub text: &'a str,
    /// Lines inside the scroll window, top to bottom.
    pub lines: &'a [VisualLine],
    /// Index of `lines[0]` among all visual lines.
    pub first_line_index: usize,
    pub cursor_line: usize,
    /// Cursor display offset.
    pub cursor: usize,
    pub cursor_visible: bool,
    pub candidate: Option<CandidateView>,
}

impl<'a> EditorScreen<'a> {
    pub fn line_text(&self, line: &VisualLine) -> &'a str {
        self.text.get(line.range()).unwrap_or("")
    }

    /// Text between the start of the cursor's line and the cursor; its
    /// measured width is the cursor's x offset.
    pub fn text_before_cursor(&self) -> &'a str {
        let Some(line) = self
            .cursor_line
            .checked_sub(self.first_line_index)
            .and_then(|idx| self.lines.get(idx))
        else {
            return "";
        };

        let end = self.cursor.clamp(line.byte_start, line.byte_end());
        self.text.get(line.byte_start..end).unwrap_or("")
    }
}
