//! Multi-tap input engine.
//!
//! Sole owner of the edited text and its cursor. Key events select characters
//! by cycling a digit's character set; the selection stays pending until a
//! timeout, a different key or any navigation commits it.

use log::{debug, warn};

use crate::{
    TEXT_CAPACITY, charset,
    utf8::{self, Utf8Buffer},
};

pub const DEFAULT_MULTITAP_TIMEOUT_MS: u64 = 800;

/// Key identities the engine understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    /// Numeric key `0..=9`. Larger values behave like [`Key::Other`].
    Digit(u8),
    Shift,
    Space,
    Newline,
    Backspace,
    /// Any other key: commits the pending candidate and nothing else.
    Other,
}

/// In-progress multi-tap selection, not yet written to the text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PendingCandidate {
    pub key: u8,
    pub cycle_index: usize,
    pub last_press_ms: u64,
    pub shift: bool,
}

impl PendingCandidate {
    /// Character this candidate commits to, with shift applied.
    pub fn resolve(&self) -> Option<char> {
        let ch = charset::char_at(self.key, self.cycle_index)?;
        Some(if self.shift {
            charset::apply_shift(ch)
        } else {
            ch
        })
    }
}

#[derive(Clone, Debug)]
pub struct InputEngine {
    text: Utf8Buffer<TEXT_CAPACITY>,
    cursor: usize,
    pending: Option<PendingCandidate>,
    /// Shift pressed while nothing was pending; consumed by the next candidate.
    shift_armed: bool,
    timeout_ms: u64,
    revision: u32,
}

impl Default for InputEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MULTITAP_TIMEOUT_MS)
    }
}

impl InputEngine {
    pub const fn new(timeout_ms: u64) -> Self {
        Self {
            text: Utf8Buffer::new(),
            cursor: 0,
            pending: None,
            shift_armed: false,
            timeout_ms,
            revision: 0,
        }
    }

    /// Engine preloaded with `text` (truncated to capacity), cursor at the end.
    pub fn with_text(text: &str, timeout_ms: u64) -> Self {
        let mut engine = Self::new(timeout_ms);
        engine.text.set_truncated(text);
        engine.cursor = engine.text.len();
        if engine.text.len() < text.len() {
            warn!(
                "t9: seed text truncated {} -> {} bytes",
                text.len(),
                engine.text.len()
            );
        }
        engine
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pending(&self) -> Option<PendingCandidate> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Rendered form of the pending candidate.
    pub fn candidate_char(&self) -> Option<char> {
        self.pending.and_then(|pending| pending.resolve())
    }

    pub fn shift_armed(&self) -> bool {
        self.shift_armed
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Bumped on every change to text, cursor or candidate.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Share of the multi-tap window still left for the pending candidate,
    /// `0..=100`.
    pub fn candidate_remaining_pct(&self, now_ms: u64) -> Option<u8> {
        let pending = self.pending?;
        let window = self.timeout_ms.max(1);
        let elapsed = now_ms.saturating_sub(pending.last_press_ms);
        let remaining = window.saturating_sub(elapsed);
        Some(((remaining * 100) / window).min(100) as u8)
    }

    pub fn handle_key(&mut self, key: Key, now_ms: u64) {
        match key {
            Key::Digit(digit) => self.press_digit(digit, now_ms),
            Key::Shift => {
                match self.pending.as_mut() {
                    Some(pending) => pending.shift = !pending.shift,
                    None => self.shift_armed = !self.shift_armed,
                }
                self.bump();
            }
            Key::Space => self.insert_literal(' '),
            Key::Newline => self.insert_literal('\n'),
            Key::Backspace => self.backspace(),
            Key::Other => self.commit(),
        }
    }

    /// Commits the pending candidate once its window has lapsed. Returns
    /// whether a commit happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };

        if now_ms.saturating_sub(pending.last_press_ms) > self.timeout_ms {
            debug!(
                "t9: timeout commit key={} cycle={}",
                pending.key, pending.cycle_index
            );
            self.commit();
            return true;
        }

        false
    }

    /// Writes the pending candidate at the cursor. No-op when nothing is pending.
    pub fn commit(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        if let Some(ch) = pending.resolve() {
            debug!(
                "t9: commit {:?} key={} cycle={} shift={}",
                ch, pending.key, pending.cycle_index, pending.shift
            );
            self.insert_at_cursor(ch);
        }
        self.bump();
    }

    /// Steps the cursor by whole codepoints after committing.
    pub fn move_cursor(&mut self, delta_codepoints: isize) {
        self.commit();
        let next = utf8::step_codepoints(self.text.as_bytes(), self.cursor, delta_codepoints);
        self.place_cursor(next);
    }

    /// Places the cursor at `byte_offset` after committing, clamped into the
    /// text and snapped back to a codepoint boundary.
    pub fn set_cursor(&mut self, byte_offset: usize) {
        self.commit();
        let next = utf8::snap_back(self.text.as_bytes(), byte_offset);
        self.place_cursor(next);
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.pending = None;
        self.shift_armed = false;
        self.bump();
    }

    fn press_digit(&mut self, digit: u8, now_ms: u64) {
        let len = charset::charset_len(digit);
        if len == 0 {
            debug!("t9: digit {} has no charset, treating as commit", digit);
            self.commit();
            return;
        }

        if let Some(pending) = self.pending.as_mut()
            && pending.key == digit
            && now_ms.saturating_sub(pending.last_press_ms) < self.timeout_ms
        {
            pending.cycle_index = (pending.cycle_index + 1) % len;
            pending.last_press_ms = now_ms;
            self.bump();
            return;
        }

        self.commit();
        let shift = core::mem::take(&mut self.shift_armed);
        self.pending = Some(PendingCandidate {
            key: digit,
            cycle_index: 0,
            last_press_ms: now_ms,
            shift,
        });
        self.bump();
    }

    fn backspace(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("t9: cancel candidate key={}", pending.key);
            self.bump();
            return;
        }

        if self.cursor == 0 {
            return;
        }

        let start = utf8::prev_boundary(self.text.as_bytes(), self.cursor);
        self.text.remove(start..self.cursor);
        self.cursor = start;
        self.bump();
    }

    fn insert_literal(&mut self, ch: char) {
        self.commit();
        self.insert_at_cursor(ch);
    }

    fn insert_at_cursor(&mut self, ch: char) {
        if self.text.insert_char(self.cursor, ch) {
            self.cursor += ch.len_utf8();
            self.bump();
        } else {
            warn!(
                "t9: text full ({} bytes), dropped {:?}",
                self.text.capacity(),
                ch
            );
        }
    }

    fn place_cursor(&mut self, next: usize) {
        if next != self.cursor {
            self.cursor = next;
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
