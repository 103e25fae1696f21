//! Ring buffer of recent zone transitions.
//!
//! Keeps the last few [`ZoneChange`]s as short text lines so they can be
//! shown or dumped without an allocator.

use core::fmt::Write;

use heapless::{Deque, String};

use crate::tracker::ZoneChange;

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of events kept.
pub const EVENT_BUFFER_SIZE: usize = 6;

/// Maximum characters per event line.
pub const EVENT_LINE_LENGTH: usize = 32;

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Last `EVENT_BUFFER_SIZE` zone transitions, oldest first.
pub struct EventLog {
    buffer: Deque<String<EVENT_LINE_LENGTH>, EVENT_BUFFER_SIZE>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Record a transition. The oldest entry is dropped when full.
    pub fn push(
        &mut self,
        change: &ZoneChange,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(format_change(change)).ok();
    }

    /// Iterate over entries (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&str> { self.buffer.back().map(heapless::string::StringInner::as_str) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

/// One-line description of a transition, e.g. `"YELLOW > RED 0.45"`.
///
/// Lines longer than [`EVENT_LINE_LENGTH`] are cut short.
pub fn format_change(change: &ZoneChange) -> String<EVENT_LINE_LENGTH> {
    let mut line = String::new();
    let arrow = if change.is_closer() { '>' } else { '<' };
    let _ = write!(line, "{} {arrow} {} {:.2}", change.from.label(), change.to.label(), change.distance);
    line
}

// =============================================================================
// Tests
// =============================================================================
