//! Shared test fixtures for the prompt, pager, and highlight test modules.
//!
//! The central piece is [`FakeTerminal`], a scripted stand-in for the
//! terminal capability: tests queue up key events and input lines, run a
//! prompt or pager against it, and then assert on the recorded prints and
//! region operations. The helpers are intentionally std-only so unit tests
//! need no extra dependencies.

use crate::terminal::{Key, RegionId, Terminal};
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// One region as the fake terminal saw it, including its full history.
#[derive(Debug, Clone)]
pub struct FakeRegion {
    pub floating: bool,
    /// Latest text, including the final text at deletion time.
    pub text: String,
    /// Every text passed to `update_region`, in order.
    pub updates: Vec<String>,
    pub deleted: bool,
}

/// Scripted terminal double.
#[derive(Debug, Default)]
pub struct FakeTerminal {
    interactive: bool,
    height: usize,
    keys: VecDeque<Key>,
    lines: VecDeque<Option<String>>,
    passwords: VecDeque<Option<String>>,
    /// Output from `print`, one entry per call.
    pub printed: Vec<String>,
    /// Output from `print_inline`, one entry per call.
    pub inline: Vec<String>,
    /// All regions ever created, indexed by creation order.
    pub regions: Vec<FakeRegion>,
    /// Number of `read_key` calls that returned a key.
    pub keys_read: usize,
}

impl FakeTerminal {
    pub fn interactive(height: usize) -> Self {
        Self {
            interactive: true,
            height,
            ..Self::default()
        }
    }

    pub fn fallback() -> Self {
        Self {
            interactive: false,
            height: 24,
            ..Self::default()
        }
    }

    /// Queue key events for `read_key`. An exhausted queue errors rather
    /// than blocking, so a non-terminating loop fails its test quickly.
    pub fn keys(mut self, keys: &[Key]) -> Self {
        self.keys.extend(keys.iter().copied());
        self
    }

    /// Queue input lines for `read_line`. An exhausted queue reads as end
    /// of input.
    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.lines
            .extend(lines.iter().map(|l| Some((*l).to_string())));
        self
    }

    /// Queue no-echo input lines for `read_password`.
    pub fn passwords(mut self, lines: &[&str]) -> Self {
        self.passwords
            .extend(lines.iter().map(|l| Some((*l).to_string())));
        self
    }

    pub fn region(&self, index: usize) -> &FakeRegion {
        &self.regions[index]
    }

    /// Whether every region created during the call was also deleted.
    pub fn all_regions_released(&self) -> bool {
        self.regions.iter().all(|r| r.deleted)
    }

    fn live_region_mut(&mut self, id: RegionId) -> io::Result<&mut FakeRegion> {
        let region = self
            .regions
            .get_mut(id.raw() as usize)
            .filter(|r| !r.deleted)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "unknown display region")
            })?;
        Ok(region)
    }
}

impl Terminal for FakeTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn height(&self) -> usize {
        self.height
    }

    fn read_key(&mut self) -> io::Result<Key> {
        let key = self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
        })?;
        self.keys_read += 1;
        Ok(key)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front().flatten())
    }

    fn read_password(&mut self) -> io::Result<Option<String>> {
        Ok(self.passwords.pop_front().flatten())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.printed.push(text.to_string());
        Ok(())
    }

    fn print_inline(&mut self, text: &str) -> io::Result<()> {
        self.inline.push(text.to_string());
        Ok(())
    }

    fn create_region(&mut self, text: &str, floating: bool) -> io::Result<RegionId> {
        self.regions.push(FakeRegion {
            floating,
            text: text.to_string(),
            updates: Vec::new(),
            deleted: false,
        });
        Ok(RegionId::new(self.regions.len() as u64 - 1))
    }

    fn update_region(&mut self, id: RegionId, text: &str) -> io::Result<()> {
        let region = self.live_region_mut(id)?;
        region.text = text.to_string();
        region.updates.push(text.to_string());
        Ok(())
    }

    fn delete_region(&mut self, id: RegionId) -> io::Result<()> {
        self.live_region_mut(id)?.deleted = true;
        Ok(())
    }
}

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("colloquy-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write UTF-8 text to a child path and return it.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_terminal_records_region_lifecycle() {
        let mut term = FakeTerminal::interactive(24);
        let id = term.create_region("hello", true).unwrap();
        term.update_region(id, "world").unwrap();
        term.delete_region(id).unwrap();
        assert!(term.all_regions_released());
        assert_eq!(term.region(0).text, "world");
        assert!(term.update_region(id, "late").is_err());
    }

    #[test]
    fn exhausted_key_script_errors_instead_of_blocking() {
        let mut term = FakeTerminal::interactive(24);
        assert!(term.read_key().is_err());
        assert_eq!(term.keys_read, 0);
    }
}
