//! A finite, non-restartable iterator over `[start, stop)`.

use std::iter::FusedIterator;

/// Yields every `u32` from `start` (inclusive) up to `stop` (exclusive),
/// ascending, each exactly once.
///
/// An inverted span (`start >= stop`) is simply empty. Once `next` returns
/// `None` it keeps returning `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedRange {
    start: u32,
    stop: u32,
    current: u32,
}

impl BoundedRange {
    pub fn new(start: u32, stop: u32) -> Self {
        BoundedRange {
            start,
            stop,
            current: start,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn stop(&self) -> u32 {
        self.stop
    }

    /// The next value to be produced, or the resting position once exhausted.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Number of values not yet produced.
    pub fn remaining(&self) -> u32 {
        self.stop.saturating_sub(self.current)
    }
}

impl Iterator for BoundedRange {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        // current < stop <= u32::MAX, so the increment cannot overflow
        if self.current < self.stop {
            let value = self.current;
            self.current += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundedRange {}

impl FusedIterator for BoundedRange {}
