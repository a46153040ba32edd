use heapless::Deque;
use log::debug;

use super::{InputProvider, KeyEvent};

/// Scripted fault reported in place of a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MockInputError {
    Scan,
}

/// Replays a fixed keypad script, for bring-up without the key matrix.
#[derive(Debug, Clone)]
pub struct MockInput<const N: usize> {
    script: Deque<Result<KeyEvent, MockInputError>, N>,
}

impl<const N: usize> Default for MockInput<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MockInput<N> {
    pub const fn new() -> Self {
        Self {
            script: Deque::new(),
        }
    }

    /// Script from raw matrix scan codes; codes the keypad never emits are
    /// skipped.
    pub fn from_codes(codes: &[u8]) -> Self {
        let mut input = Self::new();
        for &value in codes {
            match KeyEvent::from_code(value) {
                Some(event) => {
                    input.push_key(event);
                }
                None => debug!("input: mock skips unknown code {}", value),
            }
        }
        input
    }

    /// Queues a key. Returns `false` when the script is full.
    pub fn push_key(&mut self, event: KeyEvent) -> bool {
        self.script.push_back(Ok(event)).is_ok()
    }

    /// Queues a scan fault that the next poll reports.
    pub fn push_fault(&mut self) -> bool {
        self.script.push_back(Err(MockInputError::Scan)).is_ok()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<const N: usize> InputProvider for MockInput<N> {
    type Error = MockInputError;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error> {
        self.script.pop_front().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::code;

    #[test]
    fn replays_decoded_codes_in_order() {
        let mut input = MockInput::<8>::from_codes(&[b'2', 0xff, code::SHIFT, code::ESC]);
        assert_eq!(input.remaining(), 3);

        assert_eq!(input.poll_event(), Ok(Some(KeyEvent::Digit(2))));
        assert_eq!(input.poll_event(), Ok(Some(KeyEvent::Shift)));
        assert_eq!(input.poll_event(), Ok(Some(KeyEvent::Escape)));
        assert_eq!(input.poll_event(), Ok(None));
    }

    #[test]
    fn faults_are_reported_once_in_sequence() {
        let mut input = MockInput::<4>::new();
        input.push_fault();
        input.push_key(KeyEvent::Up);

        assert_eq!(input.poll_event(), Err(MockInputError::Scan));
        assert_eq!(input.poll_event(), Ok(Some(KeyEvent::Up)));
    }

    #[test]
    fn full_script_rejects_more_keys() {
        let mut input = MockInput::<1>::new();
        assert!(input.push_key(KeyEvent::Tab));
        assert!(!input.push_key(KeyEvent::Enter));
        assert!(!input.push_fault());
    }
}
