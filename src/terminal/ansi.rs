//! Crossterm-backed production terminal.
//!
//! Live regions are repainted as one block: move the cursor to the top of
//! the previously painted surface, clear downward, and redraw every region
//! in order. Region output goes to stderr so permanent (pipeable) output
//! can keep flowing through stdout.

use crate::terminal::{Key, RegionId, Terminal};
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, IsTerminal, Write};

const FALLBACK_HEIGHT: usize = 24;

struct RegionSlot {
    id: u64,
    lines: Vec<String>,
    floating: bool,
}

/// Terminal implementation over crossterm, stdin, stdout, and stderr.
pub struct AnsiTerminal {
    interactive: bool,
    regions: Vec<RegionSlot>,
    painted_rows: usize,
    next_id: u64,
}

impl AnsiTerminal {
    /// Detect interactivity once at construction, as both the raw key
    /// stream and the region surface need a terminal on stdin and stderr.
    pub fn new() -> Self {
        let interactive = io::stdin().is_terminal() && io::stderr().is_terminal();
        Self {
            interactive,
            regions: Vec::new(),
            painted_rows: 0,
            next_id: 0,
        }
    }

    fn slot_index(&self, id: RegionId) -> io::Result<usize> {
        self.regions
            .iter()
            .position(|slot| slot.id == id.raw())
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "unknown display region")
            })
    }

    /// Move to the top of the painted surface and clear it.
    fn clear_surface(&mut self) -> io::Result<()> {
        let mut stderr = io::stderr();
        if self.painted_rows > 0 {
            stderr.queue(MoveUp(self.painted_rows as u16))?;
        }
        stderr.queue(MoveToColumn(0))?;
        stderr.queue(Clear(ClearType::FromCursorDown))?;
        stderr.flush()?;
        self.painted_rows = 0;
        Ok(())
    }

    /// Redraw all live regions and leave the cursor below the last row.
    fn repaint(&mut self) -> io::Result<()> {
        self.clear_surface()?;
        let mut stderr = io::stderr();
        let mut rows = 0usize;
        for slot in &self.regions {
            for line in &slot.lines {
                stderr.queue(Print(line.as_str()))?;
                stderr.queue(Print("\r\n"))?;
                rows += 1;
            }
        }
        stderr.flush()?;
        self.painted_rows = rows;
        Ok(())
    }
}

impl Default for AnsiTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for AnsiTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn height(&self) -> usize {
        terminal::size()
            .map(|(_, rows)| rows as usize)
            .unwrap_or(FALLBACK_HEIGHT)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        let _guard = RawModeGuard::acquire()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                continue;
            }
            return Ok(decode_key(key));
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn read_password(&mut self) -> io::Result<Option<String>> {
        if self.interactive {
            return rpassword::read_password().map(Some);
        }
        // Piped input has no echo to suppress.
        self.read_line()
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        if self.interactive && !self.regions.is_empty() {
            self.clear_surface()?;
            let mut stdout = io::stdout();
            writeln!(stdout, "{text}")?;
            stdout.flush()?;
            return self.repaint();
        }
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }

    fn print_inline(&mut self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr();
        write!(stderr, "{text}")?;
        stderr.flush()
    }

    fn create_region(&mut self, text: &str, floating: bool) -> io::Result<RegionId> {
        let id = self.next_id;
        self.next_id += 1;
        self.regions.push(RegionSlot {
            id,
            lines: split_lines(text),
            floating,
        });
        self.repaint()?;
        Ok(RegionId::new(id))
    }

    fn update_region(&mut self, id: RegionId, text: &str) -> io::Result<()> {
        let idx = self.slot_index(id)?;
        self.regions[idx].lines = split_lines(text);
        self.repaint()
    }

    fn delete_region(&mut self, id: RegionId) -> io::Result<()> {
        let idx = self.slot_index(id)?;
        let slot = self.regions.remove(idx);
        if !slot.floating {
            // In-flow regions leave their final text in the scrollback.
            self.clear_surface()?;
            let mut stdout = io::stdout();
            for line in &slot.lines {
                writeln!(stdout, "{line}")?;
            }
            stdout.flush()?;
        }
        self.repaint()
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

fn decode_key(key: KeyEvent) -> Key {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up if ctrl => Key::CtrlUp,
        KeyCode::Down if ctrl => Key::CtrlDown,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => Key::Other,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => Key::Other,
    }
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
