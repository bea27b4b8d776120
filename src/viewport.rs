//! Pure scrolling-viewport state for the pager.
//!
//! Keeps the cursor math separate from terminal effects so the bounds and
//! footer rules can be tested directly.

/// Footer label the pager should show for the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterKind {
    /// The viewport cannot scroll further down.
    End,
    /// At the top with more content below.
    More,
    /// Somewhere in the middle; show the position marker.
    Position,
}

/// Viewport over a fixed line buffer: top visible line (`cursor`) and page
/// height (`step`). `cursor` stays in `[0, cursor_max]` under all inputs.
#[derive(Debug, Clone)]
pub struct ViewportState {
    lines: Vec<String>,
    cursor: usize,
    step: usize,
}

impl ViewportState {
    pub fn new(text: &str, step: usize) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            cursor: 0,
            step: step.max(1),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total(&self) -> usize {
        self.lines.len()
    }

    /// Largest valid cursor: `max(0, total - step - 1)`.
    pub fn cursor_max(&self) -> usize {
        self.total().saturating_sub(self.step + 1)
    }

    /// Lines rendered in the current frame: `[cursor, cursor + step)`, or
    /// to the end once the tail fits.
    pub fn visible(&self) -> &[String] {
        let end = if self.cursor + self.step < self.total() {
            self.cursor + self.step
        } else {
            self.total()
        };
        &self.lines[self.cursor..end]
    }

    /// Scroll down one line; returns whether the cursor moved.
    pub fn scroll_down(&mut self) -> bool {
        if self.cursor < self.cursor_max() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Scroll up one line; returns whether the cursor moved.
    pub fn scroll_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn footer(&self) -> FooterKind {
        if self.cursor >= self.cursor_max() {
            FooterKind::End
        } else if self.cursor == 0 {
            FooterKind::More
        } else {
            FooterKind::Position
        }
    }
}
