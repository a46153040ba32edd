//! Frame-driven multi-tap text editor.
//!
//! Each frame drains the input provider into the engine first and only then
//! runs the multi-tap timeout check, so a key arriving in the same frame can
//! still extend or replace a cycling candidate before it is force-committed.

use log::{debug, warn};

use crate::{
    engine::{DEFAULT_MULTITAP_TIMEOUT_MS, InputEngine},
    input::{InputProvider, KeyEvent},
    layout::{LineLayout, LineStep},
    measure::TextMeasure,
    render::{CandidateView, EditorScreen},
    status::{POSITION_LABEL_BYTES, cursor_position_label},
};

pub const DEFAULT_CURSOR_BLINK_MS: u64 = 500;
/// 128 px panel minus a 2 px margin on each side.
pub const DEFAULT_CONTENT_WIDTH_PX: u32 = 124;
/// 13 px text rows below the header.
pub const DEFAULT_VISIBLE_LINES: u8 = 4;

/// Full width of the multi-tap timeout bar.
const TIMEOUT_BAR_PX: u8 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
    /// Escape was pressed; the host should leave the editor.
    ExitRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EditorConfig {
    pub multitap_timeout_ms: u64,
    pub cursor_blink_ms: u64,
    pub content_width_px: u32,
    pub visible_lines: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            multitap_timeout_ms: DEFAULT_MULTITAP_TIMEOUT_MS,
            cursor_blink_ms: DEFAULT_CURSOR_BLINK_MS,
            content_width_px: DEFAULT_CONTENT_WIDTH_PX,
            visible_lines: DEFAULT_VISIBLE_LINES,
        }
    }
}

impl EditorConfig {
    pub const fn with_multitap_timeout_ms(mut self, multitap_timeout_ms: u64) -> Self {
        self.multitap_timeout_ms = multitap_timeout_ms;
        self
    }

    pub const fn with_cursor_blink_ms(mut self, cursor_blink_ms: u64) -> Self {
        self.cursor_blink_ms = cursor_blink_ms;
        self
    }

    pub const fn with_content_width_px(mut self, content_width_px: u32) -> Self {
        self.content_width_px = content_width_px;
        self
    }

    pub const fn with_visible_lines(mut self, visible_lines: u8) -> Self {
        self.visible_lines = visible_lines;
        self
    }
}

/// Time-dependent decoration last handed to the renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Cue {
    TimeoutBar(u8),
    Cursor(bool),
}

pub struct EditorApp<IN, M>
where
    IN: InputProvider,
    M: TextMeasure,
{
    input: IN,
    measure: M,
    config: EditorConfig,
    title: &'static str,
    engine: InputEngine,
    layout: LineLayout,
    pending_redraw: bool,
    last_cue: Option<Cue>,
    exit_requested: bool,
    position_label: [u8; POSITION_LABEL_BYTES],
}

include!("input.rs");
include!("view.rs");

impl<IN, M> EditorApp<IN, M>
where
    IN: InputProvider,
    M: TextMeasure,
{
    pub fn new(input: IN, measure: M, config: EditorConfig, title: &'static str) -> Self {
        Self {
            input,
            measure,
            config,
            title,
            engine: InputEngine::new(config.multitap_timeout_ms),
            layout: LineLayout::new(config.content_width_px, config.visible_lines as usize),
            pending_redraw: true,
            last_cue: None,
            exit_requested: false,
            position_label: [0u8; POSITION_LABEL_BYTES],
        }
    }

    /// Replaces the edited text, cursor at the end.
    pub fn load_text(&mut self, text: &str) {
        self.engine = InputEngine::with_text(text, self.config.multitap_timeout_ms);
        self.layout.invalidate();
        self.pending_redraw = true;
    }

    pub fn clear(&mut self) {
        self.engine.reset();
        self.pending_redraw = true;
    }

    pub fn text(&self) -> &str {
        self.engine.text()
    }

    pub fn engine(&self) -> &InputEngine {
        &self.engine
    }

    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }

    pub fn config(&self) -> EditorConfig {
        self.config
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        self.engine.tick(now_ms);
        let relaid = self.layout.refresh(&self.engine, &self.measure);

        if core::mem::take(&mut self.exit_requested) {
            self.pending_redraw = true;
            return TickResult::ExitRequested;
        }

        let cue_changed = self.refresh_cue(now_ms);
        let forced = core::mem::take(&mut self.pending_redraw);
        if relaid || cue_changed || forced {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn move_cursor(&mut self, delta_codepoints: isize) {
        self.engine.move_cursor(delta_codepoints);
    }

    pub fn set_cursor(&mut self, byte_offset: usize) {
        self.engine.set_cursor(byte_offset);
    }

    pub fn move_cursor_vertical(&mut self, step: LineStep) {
        self.layout
            .move_cursor_vertical(&mut self.engine, &self.measure, step);
    }

    fn refresh_cue(&mut self, now_ms: u64) -> bool {
        let cue = match self.engine.candidate_remaining_pct(now_ms) {
            Some(pct) => Cue::TimeoutBar(pct / (100 / TIMEOUT_BAR_PX)),
            None => Cue::Cursor(self.cursor_visible(now_ms)),
        };

        let changed = self.last_cue != Some(cue);
        self.last_cue = Some(cue);
        changed
    }

    fn cursor_visible(&self, now_ms: u64) -> bool {
        if self.engine.is_pending() {
            return false;
        }
        match self.config.cursor_blink_ms {
            0 => true,
            period => (now_ms / period) % 2 == 0,
        }
    }
}

#[cfg(test)]
mod tests;
