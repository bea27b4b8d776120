//! Centralized, hardcoded settings for prompt and pager rendering.
//!
//! This is the single place to tweak prompt cues, markers, footer labels,
//! and timing.

// ---------------------------------------------------------------------------
// Prompt cues
// ---------------------------------------------------------------------------

/// Question cue shown on a fresh prompt and during the first re-asks.
pub const PROMPT_CUE: &str = "?";
/// Question cue once a required answer has been left empty too many times.
pub const PROMPT_CUE_URGENT: &str = "?!";
/// Empty submissions tolerated before the cue escalates. Cosmetic only;
/// the re-prompt loop itself never terminates.
pub const CUE_ESCALATE_AFTER: usize = 2;

/// Default hint shown by `askpass` instead of the secret itself.
pub const SECRET_DEFAULT_HINT: &str = "[default] ";

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

/// Marker column for the currently selected option line.
pub const MENU_ARROW: &str = "    => ";
/// Marker column for an unselected option line. Same width as the arrow so
/// the numbers stay aligned as the selection moves.
pub const MENU_BLANK: &str = "       ";
/// Width the echoed digit buffer is padded to inside the marker column.
pub const MENU_DIGIT_PAD: usize = 5;
/// Fallback-mode choice prompt.
pub const MENU_CHOICE_LABEL: &str = "     Choice ";

pub const YESNO_REJECT_HINT: &str = "Please answer yes or no";

// ---------------------------------------------------------------------------
// Pager
// ---------------------------------------------------------------------------

pub const FOOTER_MORE: &str = "(more)";
pub const FOOTER_END: &str = "(END)";

// ---------------------------------------------------------------------------
// Pause
// ---------------------------------------------------------------------------

pub const PAUSE_KEY_NOTICE: &str = "Paused (press any key to continue)";
pub const PAUSE_LINE_NOTICE: &str = "Paused (press enter to continue) ";
pub const PAUSE_WAIT_LABEL: &str = "Waiting";
pub const PAUSE_DONE: &str = "Waiting: done";

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

pub const NO_LEXER_NOTICE: &str = "No lexer found... printing without formatting.";
