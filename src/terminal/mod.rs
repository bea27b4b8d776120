//! Terminal capability surface consumed by the prompt and pager engines.
//!
//! Every interactive function in this crate takes the terminal as an
//! injected `&mut dyn Terminal` rather than touching process-global state,
//! so the same code drives the crossterm-backed [`AnsiTerminal`] in
//! production and a scripted fake in tests. Behavior splits exactly once
//! per call on [`Terminal::is_interactive`]: raw key events plus updatable
//! display regions when true, line-buffered read/print when false.

mod ansi;

pub use ansi::AnsiTerminal;

use std::io;

/// One logical keypress decoded from the raw terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A literal character, including space and digits.
    Char(char),
    Enter,
    Backspace,
    Delete,
    Esc,
    Up,
    Down,
    Left,
    Right,
    CtrlUp,
    CtrlDown,
    /// Any key this crate does not route anywhere specific.
    Other,
}

/// Handle for a display region on the terminal's live surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

impl RegionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub(crate) fn raw(self) -> u64 {
        self.0
    }
}

/// Injected terminal capability.
///
/// Regions form a "live surface" at the bottom of the screen: an ordered
/// set of text blocks that can be updated or removed in place while
/// [`Terminal::print`] output scrolls past above them. Deleting a floating
/// region erases it; deleting an in-flow region commits its final text to
/// the scrollback. That split lets every prompt and pager release every
/// region it created on every exit path without wiping a menu the user
/// should still see.
pub trait Terminal {
    /// Whether raw key events and live regions are available.
    fn is_interactive(&self) -> bool;

    /// Current terminal row count.
    fn height(&self) -> usize;

    /// Block until one logical key arrives.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Read one line in fallback mode. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Read one line without echoing. `None` means end of input.
    fn read_password(&mut self) -> io::Result<Option<String>>;

    /// Write one or more permanent lines above the live surface.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Write a prompt fragment with no trailing newline.
    fn print_inline(&mut self, text: &str) -> io::Result<()>;

    /// Add a region to the live surface.
    fn create_region(&mut self, text: &str, floating: bool) -> io::Result<RegionId>;

    /// Replace a region's text in place.
    fn update_region(&mut self, id: RegionId, text: &str) -> io::Result<()>;

    /// Remove a region: erase it if floating, otherwise commit its final
    /// text to the scrollback.
    fn delete_region(&mut self, id: RegionId) -> io::Result<()>;
}
