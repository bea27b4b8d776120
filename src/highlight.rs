//! Syntax-highlight source files and hand them to a pager or print raw.
//!
//! Thin glue over syntect: resolve a syntax by content sniffing (falling
//! back to the file extension), format with 24-bit escapes when the
//! terminal advertises extended color support, and dispatch the result to
//! `more`, `less`, or plain output. A file nothing can lex is printed raw
//! with a one-line notice rather than failing.

use crate::error::UiError;
use crate::pager;
use crate::settings;
use crate::terminal::Terminal;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::as_24_bit_terminal_escaped;
use tracing::debug;

/// Which pager receives the highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    More,
    Less,
}

/// Formatter variant selected from the terminal's color capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// No escape sequences; text passes through unstyled.
    Plain,
    /// 24-bit foreground escapes.
    Extended,
}

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Pick a deterministic preferred theme with a stable fallback.
fn preferred_theme(theme_set: &ThemeSet) -> Option<&Theme> {
    theme_set
        .themes
        .get("base16-ocean.dark")
        .or_else(|| theme_set.themes.values().next())
}

/// Extended depth when the environment advertises 256-color or truecolor.
pub fn color_depth_from_env() -> ColorDepth {
    depth_from(
        &env::var("TERM").unwrap_or_default(),
        &env::var("COLORTERM").unwrap_or_default(),
    )
}

fn depth_from(term: &str, colorterm: &str) -> ColorDepth {
    if term.contains("256color") || colorterm == "truecolor" || colorterm == "24bit" {
        ColorDepth::Extended
    } else {
        ColorDepth::Plain
    }
}

/// Resolve a syntax by first-line sniffing, then by file extension.
/// Plain text counts as "not found" to avoid pointless formatting.
fn detect_syntax<'a>(
    set: &'a SyntaxSet,
    path: &Path,
    src: &str,
) -> Option<&'a SyntaxReference> {
    let first_line = src.lines().next().unwrap_or("");
    let syntax = set.find_syntax_by_first_line(first_line).or_else(|| {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| set.find_syntax_by_extension(ext))
    })?;
    if syntax.name == "Plain Text" {
        return None;
    }
    Some(syntax)
}

/// Format `src` line by line, optionally prefixed with right-aligned
/// 1-based line numbers.
fn format_source(
    set: &SyntaxSet,
    syntax: &SyntaxReference,
    src: &str,
    depth: ColorDepth,
    linenos: bool,
) -> String {
    let theme = preferred_theme(theme_set());
    let mut highlighter = match (depth, theme) {
        (ColorDepth::Extended, Some(theme)) => Some(HighlightLines::new(syntax, theme)),
        _ => None,
    };

    let width = src.lines().count().to_string().len();
    let mut out = String::new();
    for (idx, line) in src.lines().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        if linenos {
            out.push_str(&format!("{:>width$} ", idx + 1));
        }
        let styled = highlighter
            .as_mut()
            .and_then(|h| h.highlight_line(line, set).ok())
            .map(|ranges| format!("{}\x1b[0m", as_24_bit_terminal_escaped(&ranges, false)));
        match styled {
            Some(styled) => out.push_str(&styled),
            None => out.push_str(line),
        }
    }
    out
}

/// Highlight `filepath` and display it according to `mode`.
///
/// `Some(More)` pages forward-only; `Some(Less)` opens the scrollable
/// viewer with the file's basename in the footer; `None` prints directly.
/// An empty file displays nothing.
pub fn highlight(
    term: &mut dyn Terminal,
    filepath: &Path,
    linenos: bool,
    mode: Option<PagingMode>,
) -> Result<(), UiError> {
    let bytes = fs::read(filepath)?;
    if bytes.is_empty() {
        return Ok(());
    }
    let src = String::from_utf8_lossy(&bytes).into_owned();

    let set = syntax_set();
    let Some(syntax) = detect_syntax(set, filepath, &src) else {
        term.print(settings::NO_LEXER_NOTICE)?;
        term.print(&src)?;
        return Ok(());
    };
    debug!(syntax = syntax.name.as_str(), "highlighting source");

    let formatted = format_source(set, syntax, &src, color_depth_from_env(), linenos);
    match mode {
        Some(PagingMode::More) => pager::more(term, &formatted),
        Some(PagingMode::Less) => {
            let name = filepath.file_name().and_then(|n| n.to_str());
            pager::less(term, &formatted, name)
        }
        None => {
            term.print(&formatted)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{FakeTerminal, TestTempDir};

    #[test]
    fn depth_selection_tracks_environment_hints() {
        assert_eq!(depth_from("xterm-256color", ""), ColorDepth::Extended);
        assert_eq!(depth_from("xterm", "truecolor"), ColorDepth::Extended);
        assert_eq!(depth_from("dumb", ""), ColorDepth::Plain);
    }

    #[test]
    fn detects_syntax_by_shebang_first_line() {
        let set = syntax_set();
        let syntax = detect_syntax(set, Path::new("script"), "#!/usr/bin/env python\nprint(1)");
        assert_eq!(syntax.map(|s| s.name.as_str()), Some("Python"));
    }

    #[test]
    fn detects_syntax_by_extension_when_sniffing_fails() {
        let set = syntax_set();
        let syntax = detect_syntax(set, Path::new("demo.rs"), "fn main() {}");
        assert_eq!(syntax.map(|s| s.name.as_str()), Some("Rust"));
    }

    #[test]
    fn unknown_content_has_no_syntax() {
        let set = syntax_set();
        assert!(detect_syntax(set, Path::new("notes.zzz"), "just words").is_none());
    }

    #[test]
    fn plain_depth_formatting_adds_line_numbers_only() {
        let set = syntax_set();
        let syntax = detect_syntax(set, Path::new("demo.rs"), "fn main() {}").unwrap();
        let out = format_source(set, syntax, "fn main() {\n}\n// end", ColorDepth::Plain, true);
        assert_eq!(out, "1 fn main() {\n2 }\n3 // end");
        let plain = format_source(set, syntax, "fn main() {}", ColorDepth::Plain, false);
        assert_eq!(plain, "fn main() {}");
    }

    #[test]
    fn extended_depth_emits_escape_sequences() {
        let set = syntax_set();
        let syntax = detect_syntax(set, Path::new("demo.rs"), "fn main() {}").unwrap();
        let out = format_source(set, syntax, "fn main() {}", ColorDepth::Extended, false);
        assert!(out.contains("\x1b["), "expected escapes, got: {out}");
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn lineno_width_follows_line_count() {
        let set = syntax_set();
        let syntax = detect_syntax(set, Path::new("demo.rs"), "fn main() {}").unwrap();
        let src = (0..12).map(|i| format!("// {i}")).collect::<Vec<_>>().join("\n");
        let out = format_source(set, syntax, &src, ColorDepth::Plain, true);
        assert!(out.starts_with(" 1 // 0"));
        assert!(out.ends_with("12 // 11"));
    }

    #[test]
    fn missing_lexer_degrades_to_raw_output_with_notice() {
        let dir = TestTempDir::new("highlight-raw");
        let path = dir.write_text("notes.zzz", "nothing lexable here");
        let mut term = FakeTerminal::fallback();
        highlight(&mut term, &path, false, None).unwrap();
        assert_eq!(
            term.printed,
            vec![
                settings::NO_LEXER_NOTICE.to_string(),
                "nothing lexable here".to_string()
            ]
        );
    }

    #[test]
    fn empty_file_displays_nothing() {
        let dir = TestTempDir::new("highlight-empty");
        let path = dir.write_text("empty.rs", "");
        let mut term = FakeTerminal::fallback();
        highlight(&mut term, &path, false, None).unwrap();
        assert!(term.printed.is_empty());
    }

    #[test]
    fn missing_file_surfaces_an_io_error() {
        let mut term = FakeTerminal::fallback();
        let err = highlight(&mut term, Path::new("/no/such/file.rs"), false, None).unwrap_err();
        assert!(matches!(err, UiError::Io(_)));
    }

    #[test]
    fn paging_modes_delegate_to_the_pagers() {
        // In fallback mode both pagers print verbatim, which is enough to
        // see the dispatch happen.
        let dir = TestTempDir::new("highlight-mode");
        let path = dir.write_text("demo.rs", "fn main() {}");
        for mode in [Some(PagingMode::More), Some(PagingMode::Less), None] {
            let mut term = FakeTerminal::fallback();
            highlight(&mut term, &path, false, mode).unwrap();
            assert_eq!(term.printed.len(), 1, "mode {mode:?}");
            assert!(term.printed[0].contains("fn main"), "mode {mode:?}");
        }
    }
}
