//! Colloquy — interactive terminal primitives for command-line tools.
//!
//! This crate provides the question/answer and paging building blocks a
//! larger toolkit needs: free-form and no-echo prompts, yes/no toggles,
//! numbered menus with digit-buffer navigation, `more`/`less`-style pagers,
//! and syntax-highlighted source paging. Everything runs against an
//! injected [`terminal::Terminal`] capability, which picks between a raw
//! interactive rendering and a line-oriented fallback once per call.
//!
//! # Quick start
//!
//! ```no_run
//! use colloquy::terminal::AnsiTerminal;
//! use colloquy::{ask, less, options, yesno};
//!
//! # fn example() -> Result<(), colloquy::UiError> {
//! let mut term = AnsiTerminal::new();
//! let name = ask(&mut term, "Name:", Some("anonymous"), false)?;
//! if yesno(&mut term, "Show the log?", Some(true))? {
//!     less(&mut term, "...long text...", Some("session.log"))?;
//! }
//! let picked = options(&mut term, "Pick a target:", &["local", "remote"], Some(0))?;
//! # let _ = (name, picked);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod highlight;
pub mod menu;
pub mod pager;
pub mod prompt;
pub mod settings;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
pub mod viewport;

pub use error::UiError;
pub use highlight::{highlight, ColorDepth, PagingMode};
pub use menu::{ChoiceSet, MenuState, MenuStep};
pub use pager::{less, more};
pub use prompt::{ask, askpass, options, pause, yesno};
pub use terminal::{AnsiTerminal, Key, RegionId, Terminal};
pub use viewport::{FooterKind, ViewportState};
