#![cfg_attr(not(test), no_std)]

//! Multi-tap keypad text entry and pixel-width line layout for the handheld
//! editor.

pub mod charset;
pub mod editor;
pub mod engine;
pub mod input;
pub mod layout;
pub mod measure;
pub mod render;
pub mod status;
pub mod utf8;

pub use editor::{EditorApp, EditorConfig, TickResult};
pub use engine::{InputEngine, Key, PendingCandidate};
pub use input::{InputProvider, KeyEvent};
pub use layout::{LineLayout, LineStep, ScrollWindow, VisualLine};
pub use measure::{MonospaceMetrics, TextMeasure};

/// Byte capacity of the edited text.
pub const TEXT_CAPACITY: usize = 512;

/// Longest UTF-8 encoding a candidate character can add to the display text.
pub const MAX_CANDIDATE_BYTES: usize = 4;

/// Byte capacity of the laid-out text (buffer plus spliced candidate).
pub const DISPLAY_CAPACITY: usize = TEXT_CAPACITY + MAX_CANDIDATE_BYTES;

/// Upper bound on visual lines: every line holds at least one byte or is the
/// single line of an empty paragraph.
pub const MAX_VISUAL_LINES: usize = DISPLAY_CAPACITY + 1;
