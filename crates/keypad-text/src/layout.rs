//! Pixel-budget line wrapping, cursor tracking and auto-scroll.
//!
//! The layout reads the engine's text, cursor and pending candidate and
//! rebuilds a list of visual lines whenever the engine revision moves. Offsets
//! in [`VisualLine`] refer to the display text: the engine text with the
//! candidate character spliced in at the cursor, so an in-progress character
//! wraps exactly like a committed one.

use core::ops::Range;

use heapless::Vec;
use log::{debug, warn};

use crate::{
    DISPLAY_CAPACITY, MAX_VISUAL_LINES,
    engine::InputEngine,
    measure::TextMeasure,
    utf8::{self, Utf8Buffer},
};

/// Direction for vertical cursor movement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineStep {
    Up,
    Down,
}

/// One wrapped line of the display text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VisualLine {
    /// 1-based paragraph number on the first line of a paragraph, `None` on
    /// wrap continuations.
    pub logical_line: Option<u16>,
    pub byte_start: usize,
    pub byte_len: usize,
    /// Line closes its paragraph (followed by `\n` or end of text).
    pub ends_paragraph: bool,
    pub has_cursor: bool,
}

impl VisualLine {
    pub const fn byte_end(&self) -> usize {
        self.byte_start + self.byte_len
    }

    pub const fn range(&self) -> Range<usize> {
        self.byte_start..self.byte_end()
    }

    /// A wrap point belongs to the start of the following line; only a
    /// paragraph's last line owns its end offset.
    fn owns(&self, offset: usize) -> bool {
        (self.byte_start <= offset && offset < self.byte_end())
            || (offset == self.byte_end() && self.ends_paragraph)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollWindow {
    pub visible_count: usize,
    pub first_visible: usize,
}

impl ScrollWindow {
    pub const fn new(visible_count: usize) -> Self {
        Self {
            visible_count,
            first_visible: 0,
        }
    }

    /// Indices of the lines currently on screen.
    pub fn range(&self, line_count: usize) -> Range<usize> {
        let start = self.first_visible.min(line_count);
        let end = start
            .saturating_add(self.visible_count.max(1))
            .min(line_count);
        start..end
    }

    fn follow(&mut self, line: usize, line_count: usize) {
        let visible = self.visible_count.max(1);
        self.first_visible = self
            .first_visible
            .min(line_count.saturating_sub(visible));

        if line < self.first_visible {
            self.first_visible = line;
        } else if line > self.first_visible + visible - 1 {
            self.first_visible = line + 1 - visible;
        }
    }
}

#[derive(Clone, Debug)]
pub struct LineLayout {
    width_budget_px: u32,
    display: Utf8Buffer<DISPLAY_CAPACITY>,
    display_cursor: usize,
    lines: Vec<VisualLine, MAX_VISUAL_LINES>,
    cursor_line: usize,
    window: ScrollWindow,
    last_revision: Option<u32>,
}

impl LineLayout {
    pub const fn new(width_budget_px: u32, visible_count: usize) -> Self {
        Self {
            width_budget_px,
            display: Utf8Buffer::new(),
            display_cursor: 0,
            lines: Vec::new(),
            cursor_line: 0,
            window: ScrollWindow::new(visible_count),
            last_revision: None,
        }
    }

    pub fn width_budget_px(&self) -> u32 {
        self.width_budget_px
    }

    pub fn set_width_budget_px(&mut self, width_budget_px: u32) {
        if self.width_budget_px != width_budget_px {
            self.width_budget_px = width_budget_px;
            self.invalidate();
        }
    }

    pub fn set_visible_count(&mut self, visible_count: usize) {
        if self.window.visible_count != visible_count {
            self.window.visible_count = visible_count;
            self.invalidate();
        }
    }

    /// Forces the next [`refresh`](Self::refresh) to rebuild, e.g. after the
    /// host switched fonts.
    pub fn invalidate(&mut self) {
        self.last_revision = None;
    }

    /// Rebuilds lines, cursor ownership and scroll window if the engine
    /// changed since the last call. Returns whether a rebuild happened.
    ///
    /// A layout tracks one engine; revisions of different engines are not
    /// comparable.
    pub fn refresh<M>(&mut self, engine: &InputEngine, measure: &M) -> bool
    where
        M: TextMeasure + ?Sized,
    {
        if self.last_revision == Some(engine.revision()) {
            return false;
        }

        self.rebuild(engine, measure);
        self.last_revision = Some(engine.revision());
        true
    }

    /// Moves the cursor to the neighbouring visual line, keeping its byte
    /// column where the target line is long enough.
    pub fn move_cursor_vertical<M>(
        &mut self,
        engine: &mut InputEngine,
        measure: &M,
        step: LineStep,
    ) where
        M: TextMeasure + ?Sized,
    {
        // Committing first makes display offsets equal to engine offsets.
        engine.commit();
        self.refresh(engine, measure);

        if let Some(target) = self.vertical_target(step) {
            debug!(
                "layout: vertical {:?} line={} cursor={} -> {}",
                step, self.cursor_line, self.display_cursor, target
            );
            engine.set_cursor(target);
        }
        self.refresh(engine, measure);
    }

    /// Display offset the cursor would land on after a vertical step.
    pub fn vertical_target(&self, step: LineStep) -> Option<usize> {
        let current = self.lines.get(self.cursor_line)?;
        let column = self.display_cursor.saturating_sub(current.byte_start);

        let target_index = match step {
            LineStep::Up => self.cursor_line.saturating_sub(1),
            LineStep::Down => (self.cursor_line + 1).min(self.lines.len().saturating_sub(1)),
        };
        let target = self.lines.get(target_index)?;
        let bytes = self.display.as_bytes();

        // A wrap point is owned by the next line, so stop one codepoint short.
        if column >= target.byte_len && !target.ends_paragraph {
            return Some(utf8::prev_boundary(bytes, target.byte_end()));
        }

        let offset = target.byte_start + column.min(target.byte_len);
        Some(utf8::snap_back(bytes, offset))
    }

    pub fn lines(&self) -> &[VisualLine] {
        &self.lines
    }

    pub fn line_text(&self, line: &VisualLine) -> &str {
        self.display.as_str().get(line.range()).unwrap_or("")
    }

    /// Text that was laid out: engine text plus the spliced candidate.
    pub fn display_text(&self) -> &str {
        self.display.as_str()
    }

    /// Cursor position in display coordinates (after the candidate, if any).
    pub fn display_cursor(&self) -> usize {
        self.display_cursor
    }

    pub fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    /// 1-based paragraph number and 0-based codepoint column of the cursor.
    pub fn cursor_position(&self) -> (u16, usize) {
        let Some(head) = self.lines.get(..=self.cursor_line) else {
            return (1, 0);
        };

        let (number, paragraph_start) = head
            .iter()
            .rev()
            .find_map(|line| line.logical_line.map(|number| (number, line.byte_start)))
            .unwrap_or((1, 0));
        let column = self
            .display
            .as_str()
            .get(paragraph_start..self.display_cursor)
            .map_or(0, |text| text.chars().count());

        (number, column)
    }

    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    pub fn visible_lines(&self) -> &[VisualLine] {
        &self.lines[self.window.range(self.lines.len())]
    }

    fn rebuild<M>(&mut self, engine: &InputEngine, measure: &M)
    where
        M: TextMeasure + ?Sized,
    {
        let text = engine.text();
        let cursor = utf8::snap_back(text.as_bytes(), engine.cursor());
        let (head, tail) = text.split_at(cursor);

        self.display.clear();
        self.display.push_str(head);
        let mut candidate_len = 0;
        if let Some(ch) = engine.candidate_char() {
            let mut utf8 = [0u8; 4];
            let encoded = ch.encode_utf8(&mut utf8);
            if self.display.push_str(encoded) {
                candidate_len = encoded.len();
            }
        }
        if !self.display.push_str(tail) {
            warn!("layout: display text overflow, tail dropped");
        }
        self.display_cursor = cursor + candidate_len;

        self.lines.clear();
        wrap_into(
            self.display.as_str(),
            self.width_budget_px,
            measure,
            &mut self.lines,
        );

        self.cursor_line = self
            .lines
            .iter()
            .position(|line| line.owns(self.display_cursor))
            .unwrap_or(self.lines.len().saturating_sub(1));
        if let Some(line) = self.lines.get_mut(self.cursor_line) {
            line.has_cursor = true;
        }

        self.window.follow(self.cursor_line, self.lines.len());
    }
}

/// Greedy per-codepoint packing of each paragraph of `text`.
fn wrap_into<M>(
    text: &str,
    budget_px: u32,
    measure: &M,
    lines: &mut Vec<VisualLine, MAX_VISUAL_LINES>,
) where
    M: TextMeasure + ?Sized,
{
    let bytes = text.as_bytes();
    let mut paragraph_start = 0usize;
    let mut logical_line = 1u16;

    loop {
        let paragraph_end = bytes[paragraph_start..]
            .iter()
            .position(|&byte| byte == b'\n')
            .map_or(bytes.len(), |idx| paragraph_start + idx);

        let mut line_start = paragraph_start;
        let mut first = true;
        let mut pos = paragraph_start;
        while pos < paragraph_end {
            let next = utf8::next_boundary(bytes, pos);
            let candidate_run = text.get(line_start..next).unwrap_or("");
            if pos > line_start && measure.text_width(candidate_run) > budget_px {
                push_line(
                    lines,
                    VisualLine {
                        logical_line: first.then_some(logical_line),
                        byte_start: line_start,
                        byte_len: pos - line_start,
                        ends_paragraph: false,
                        has_cursor: false,
                    },
                );
                first = false;
                line_start = pos;
                continue;
            }
            pos = next;
        }

        push_line(
            lines,
            VisualLine {
                logical_line: first.then_some(logical_line),
                byte_start: line_start,
                byte_len: paragraph_end - line_start,
                ends_paragraph: true,
                has_cursor: false,
            },
        );

        if paragraph_end >= bytes.len() {
            break;
        }
        paragraph_start = paragraph_end + 1;
        logical_line = logical_line.saturating_add(1);
    }
}

fn push_line(lines: &mut Vec<VisualLine, MAX_VISUAL_LINES>, line: VisualLine) {
    if lines.push(line).is_err() {
        warn!("layout: visual line capacity reached");
    }
}
