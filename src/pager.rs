//! Pager engine: forward-only and bidirectional text viewers.
//!
//! Both entry points share the "page height = terminal height - 1" model so
//! the bottom row stays free for the floating footer. Outside an
//! interactive terminal they print the text verbatim and return.

use crate::error::UiError;
use crate::settings;
use crate::terminal::{Key, Terminal};
use crate::viewport::{FooterKind, ViewportState};
use tracing::debug;

/// Show `text` one page at a time, forward only.
///
/// A `(more)` footer floats below the output while pages remain; one
/// keypress (any key) advances to the next page. The footer is removed
/// once the final page has been printed.
pub fn more(term: &mut dyn Terminal, text: &str) -> Result<(), UiError> {
    if !term.is_interactive() {
        term.print(text)?;
        return Ok(());
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let step = page_step(term);
    debug!(total = lines.len(), step, "more pager");
    let footer = term.create_region(settings::FOOTER_MORE, true)?;
    let mut start = 0usize;
    while start < lines.len() {
        let end = (start + step).min(lines.len());
        for line in &lines[start..end] {
            term.print(line)?;
        }
        start = end;
        if start < lines.len() {
            term.read_key()?;
        }
    }
    term.delete_region(footer)?;
    Ok(())
}

/// Show `text` in a scrollable viewport with an explicit quit key.
///
/// Scroll down with down/enter/space/right, up with up/backspace/left;
/// `q` or escape exits and erases both the content and the footer. The
/// footer shows `(END)` at the bottom, `(more)` at the top, and otherwise
/// `: filename` (or a bare `:`).
pub fn less(term: &mut dyn Terminal, text: &str, filename: Option<&str>) -> Result<(), UiError> {
    if !term.is_interactive() {
        term.print(text)?;
        return Ok(());
    }

    let mut view = ViewportState::new(text, page_step(term));
    debug!(total = view.total(), step = view.step(), "less pager");
    let content = term.create_region(&frame_text(&view), true)?;
    let footer = term.create_region(&footer_text(&view, filename), true)?;

    // Blocking read-render loop: one key event per frame, updates applied
    // strictly in response to the key that caused them.
    loop {
        let moved = match term.read_key()? {
            Key::Down | Key::Enter | Key::Char(' ') | Key::Right => view.scroll_down(),
            Key::Up | Key::Backspace | Key::Left => view.scroll_up(),
            Key::Char('q') | Key::Esc => {
                term.delete_region(content)?;
                term.delete_region(footer)?;
                return Ok(());
            }
            _ => false,
        };
        if moved {
            term.update_region(content, &frame_text(&view))?;
            term.update_region(footer, &footer_text(&view, filename))?;
        }
    }
}

fn page_step(term: &dyn Terminal) -> usize {
    term.height().saturating_sub(1).max(1)
}

fn frame_text(view: &ViewportState) -> String {
    view.visible().join("\n")
}

fn footer_text(view: &ViewportState, filename: Option<&str>) -> String {
    match view.footer() {
        FooterKind::End => settings::FOOTER_END.to_string(),
        FooterKind::More => settings::FOOTER_MORE.to_string(),
        FooterKind::Position => match filename {
            Some(name) => format!(": {name}"),
            None => ":".to_string(),
        },
    }
}
