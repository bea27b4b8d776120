//! Choice-list model and the pure menu-navigation automaton.
//!
//! The automaton is plain state-in/state-out so the digit-buffer rules can
//! be tested without a terminal; `prompt::options` applies display effects
//! after each step.

use crate::error::UiError;
use crate::terminal::Key;

/// Ordered option labels plus an optional default selection.
///
/// Display order is insertion order. Construction validates that the
/// default index, when present, is in range, so the invariant holds before
/// any I/O happens.
#[derive(Debug, Clone)]
pub struct ChoiceSet {
    labels: Vec<String>,
    default: Option<usize>,
}

impl ChoiceSet {
    pub fn new<I, S>(labels: I, default: Option<usize>) -> Result<Self, UiError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(UiError::InvalidArgument(
                "options: choice list must not be empty".into(),
            ));
        }
        if let Some(idx) = default {
            if idx >= labels.len() {
                return Err(UiError::InvalidArgument(format!(
                    "options: default index {idx} out of range for {} choices",
                    labels.len()
                )));
            }
        }
        Ok(Self { labels, default })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn default_index(&self) -> Option<usize> {
        self.default
    }

    /// Digits needed to print the largest 1-based option number.
    pub fn number_width(&self) -> usize {
        self.labels.len().to_string().len()
    }
}

/// Outcome of feeding one key into the menu automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep {
    /// Selection may have changed; `digit` says a digit key drove it.
    Moved { digit: bool },
    /// The current selection was committed.
    Committed(usize),
    /// The key had no effect.
    Ignored,
}

/// Menu navigation state: the current selection plus the pending
/// numeric-entry buffer.
///
/// The buffer grows greedily while the 1-based number it spells stays in
/// `[1, len]`; an out-of-range append resets it to the latest digit, and a
/// lone `0` is dropped. When the buffer itself is out of range (a single
/// digit above `len`) the selection is unset, so enter can never commit an
/// invalid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    selected: Option<usize>,
    digits: String,
}

impl MenuState {
    pub fn new(default: Option<usize>) -> Self {
        Self {
            selected: default,
            digits: String::new(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The pending digit buffer, echoed as the marker for digit-driven
    /// selection changes.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Apply one key against a list of `len` options.
    pub fn step(&mut self, key: Key, len: usize) -> MenuStep {
        match key {
            Key::Up => {
                self.selected = Some(match self.selected {
                    None => 0,
                    Some(i) => i.saturating_sub(1),
                });
                MenuStep::Moved { digit: false }
            }
            Key::Down => {
                self.selected = Some(match self.selected {
                    None => 0,
                    Some(i) => (i + 1).min(len.saturating_sub(1)),
                });
                MenuStep::Moved { digit: false }
            }
            Key::CtrlUp => {
                self.selected = Some(0);
                MenuStep::Moved { digit: false }
            }
            Key::CtrlDown => {
                self.selected = Some(len.saturating_sub(1));
                MenuStep::Moved { digit: false }
            }
            Key::Enter | Key::Right => match self.selected {
                Some(i) => MenuStep::Committed(i),
                None => MenuStep::Ignored,
            },
            Key::Char(ch) if ch.is_ascii_digit() => self.push_digit(ch, len),
            _ => MenuStep::Ignored,
        }
    }

    fn push_digit(&mut self, digit: char, len: usize) -> MenuStep {
        let mut grown = self.digits.clone();
        grown.push(digit);
        // Buffer length is bounded by the digits of `len`, so this parse
        // cannot overflow.
        let grown_n: usize = grown.parse().unwrap_or(0);
        if (1..=len).contains(&grown_n) {
            self.digits = grown;
            self.selected = Some(grown_n - 1);
            return MenuStep::Moved { digit: true };
        }
        if digit == '0' {
            return MenuStep::Ignored;
        }
        // Fresh start from the latest digit alone.
        self.digits = digit.to_string();
        let n = digit.to_digit(10).unwrap_or(0) as usize;
        self.selected = if (1..=len).contains(&n) {
            Some(n - 1)
        } else {
            None
        };
        MenuStep::Moved { digit: true }
    }
}
