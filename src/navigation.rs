/*!
 * Line navigation within a loaded story.
 *
 * Explicit value-typed state: callers hold a `Navigator` and step or jump
 * it; nothing here touches the parsing or display layers.
 */

use crate::errors::NavigationError;

/// Navigation position within a story, using 1-based line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    line: usize,
    total: usize,
}

impl Navigator {
    /// Start at line 1 of a story with `total` lines.
    ///
    /// A zero-line story still yields a navigator pinned at line 1; callers
    /// guard against empty stories before rendering.
    pub fn new(total: usize) -> Self {
        Navigator { line: 1, total }
    }

    /// Current 1-based line number
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of lines in the story
    pub fn total(&self) -> usize {
        self.total
    }

    /// Current 0-based index into the line vector
    pub fn selected_index(&self) -> usize {
        self.line.saturating_sub(1)
    }

    /// Step back one line, clamped at the first
    pub fn back(&mut self) {
        self.line = self.line.saturating_sub(1).max(1);
    }

    /// Step back five lines, clamped at the first
    pub fn back5(&mut self) {
        self.line = self.line.saturating_sub(5).max(1);
    }

    /// Step forward one line, clamped at the last
    pub fn forward(&mut self) {
        self.line = (self.line + 1).min(self.total.max(1));
    }

    /// Step forward five lines, clamped at the last
    pub fn forward5(&mut self) {
        self.line = (self.line + 5).min(self.total.max(1));
    }

    /// Jump to an exact line, rejecting out-of-range requests
    pub fn jump(&mut self, line: usize) -> Result<(), NavigationError> {
        if line < 1 || line > self.total {
            return Err(NavigationError::OutOfRange {
                requested: line,
                total: self.total,
            });
        }
        self.line = line;
        Ok(())
    }
}
