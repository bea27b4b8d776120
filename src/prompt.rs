//! Prompt engine: question/answer interactions over the terminal capability.
//!
//! Every function here picks one of two strategies up front from
//! `Terminal::is_interactive`: a raw-key interactive rendering with live
//! regions, or a line-oriented fallback. Malformed input never errors;
//! those paths re-prompt in place until the user supplies something usable.

use crate::error::UiError;
use crate::menu::{ChoiceSet, MenuState, MenuStep};
use crate::settings;
use crate::terminal::{Key, RegionId, Terminal};
use std::io;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// One free-form prompt invocation: the question text, an optional
/// default, and whether an empty answer is acceptable. Built per call and
/// dropped when the call returns.
#[derive(Debug, Clone, Copy)]
struct PromptSpec<'a> {
    prompt: &'a str,
    default: Option<&'a str>,
    required: bool,
    /// Read without echo and hide the default's value in the hint.
    secret: bool,
}

/// Ask a free-form question and return the (possibly empty) answer.
///
/// Empty input resolves to `default` when one is given. With `required`
/// set, empty input re-prompts indefinitely; the question cue escalates to
/// `[?!]` after a couple of empty attempts, but that is cosmetic only.
pub fn ask(
    term: &mut dyn Terminal,
    prompt: &str,
    default: Option<&str>,
    required: bool,
) -> Result<String, UiError> {
    ask_line(
        term,
        PromptSpec {
            prompt,
            default,
            required,
            secret: false,
        },
    )
}

/// Like [`ask`], but the answer is read without echoing and the default is
/// hinted as `[default]` rather than shown.
pub fn askpass(
    term: &mut dyn Terminal,
    prompt: &str,
    default: Option<&str>,
    required: bool,
) -> Result<String, UiError> {
    ask_line(
        term,
        PromptSpec {
            prompt,
            default,
            required,
            secret: true,
        },
    )
}

fn ask_line(term: &mut dyn Terminal, spec: PromptSpec<'_>) -> Result<String, UiError> {
    let hint = match (spec.secret, spec.default) {
        (_, None) => String::new(),
        (false, Some(d)) => format!("[{d}] "),
        (true, Some(_)) => settings::SECRET_DEFAULT_HINT.to_string(),
    };

    let mut empty_attempts = 0usize;
    loop {
        let cue = if !spec.secret && empty_attempts > settings::CUE_ESCALATE_AFTER {
            settings::PROMPT_CUE_URGENT
        } else {
            settings::PROMPT_CUE
        };
        term.print_inline(&format!(" [{cue}] {} {hint}", spec.prompt))?;

        let answer = if spec.secret {
            term.read_password()?
        } else {
            term.read_line()?
        };
        let Some(answer) = answer else {
            // Input stream closed; resolve or fail instead of spinning.
            if let Some(d) = spec.default {
                return Ok(d.to_string());
            }
            if !spec.required {
                return Ok(String::new());
            }
            return Err(UiError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while an answer was required",
            )));
        };

        let answer = answer.trim().to_string();
        if answer.is_empty() {
            if let Some(d) = spec.default {
                return Ok(d.to_string());
            }
            if !spec.required {
                return Ok(answer);
            }
            empty_attempts += 1;
            continue;
        }
        return Ok(answer);
    }
}

/// Ask a yes/no question and return the answer as a bool.
pub fn yesno(
    term: &mut dyn Terminal,
    prompt: &str,
    default: Option<bool>,
) -> Result<bool, UiError> {
    if term.is_interactive() {
        yesno_interactive(term, prompt, default)
    } else {
        yesno_fallback(term, prompt, default)
    }
}

fn yesno_toggle_text(prompt: &str, selected: Option<bool>) -> String {
    let yes = if selected == Some(true) { "Yes" } else { "yes" };
    let no = if selected == Some(false) { "No" } else { "no" };
    format!(" [{}] {prompt} [{yes}/{no}]", settings::PROMPT_CUE)
}

fn yesno_interactive(
    term: &mut dyn Terminal,
    prompt: &str,
    default: Option<bool>,
) -> Result<bool, UiError> {
    let mut selected = default;
    // One in-flow region holding the whole toggle line, so the highlight
    // can move without reprinting the prompt.
    let region = term.create_region(&yesno_toggle_text(prompt, selected), false)?;
    loop {
        let previous = selected;
        match term.read_key()? {
            Key::Char('y') | Key::Char('Y') | Key::Left => selected = Some(true),
            Key::Char('n') | Key::Char('N') | Key::Right => selected = Some(false),
            Key::Enter => {
                // Enter commits only once a selection exists.
                if let Some(answer) = selected {
                    term.delete_region(region)?;
                    debug!(answer, "yesno committed");
                    return Ok(answer);
                }
            }
            _ => {}
        }
        if selected != previous {
            term.update_region(region, &yesno_toggle_text(prompt, selected))?;
        }
    }
}

fn yesno_fallback(
    term: &mut dyn Terminal,
    prompt: &str,
    default: Option<bool>,
) -> Result<bool, UiError> {
    let yes = if default == Some(true) { "Yes" } else { "yes" };
    let no = if default == Some(false) { "No" } else { "no" };
    loop {
        term.print_inline(&format!(
            " [{}] {prompt} [{yes}/{no}] ",
            settings::PROMPT_CUE
        ))?;
        let Some(line) = term.read_line()? else {
            if let Some(answer) = default {
                return Ok(answer);
            }
            return Err(UiError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while a yes/no answer was required",
            )));
        };
        let answer = line.trim().to_ascii_lowercase();
        match answer.as_str() {
            "" if default.is_some() => return Ok(default.unwrap_or(false)),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => term.print(settings::YESNO_REJECT_HINT)?,
        }
    }
}

/// Present a numbered option list and return the chosen 0-based index.
///
/// Fails with `InvalidArgument` before any I/O when `opts` is empty or
/// `default` is out of range.
pub fn options(
    term: &mut dyn Terminal,
    prompt: &str,
    opts: &[&str],
    default: Option<usize>,
) -> Result<usize, UiError> {
    let choices = ChoiceSet::new(opts.iter().copied(), default)?;
    if term.is_interactive() {
        options_interactive(term, prompt, &choices)
    } else {
        options_fallback(term, prompt, &choices)
    }
}

fn option_line(marker: &str, number: usize, width: usize, label: &str) -> String {
    format!("{marker}{number:>width$}) {label}")
}

fn digit_marker(digits: &str) -> String {
    format!("{digits:>pad$}> ", pad = settings::MENU_DIGIT_PAD)
}

fn options_interactive(
    term: &mut dyn Terminal,
    prompt: &str,
    choices: &ChoiceSet,
) -> Result<usize, UiError> {
    term.print(&format!(" [{}] {prompt}", settings::PROMPT_CUE))?;

    let width = choices.number_width();
    let mut state = MenuState::new(choices.default_index());
    let mut regions: Vec<RegionId> = Vec::with_capacity(choices.len());
    for (i, label) in choices.labels().iter().enumerate() {
        let marker = if state.selected() == Some(i) {
            settings::MENU_ARROW
        } else {
            settings::MENU_BLANK
        };
        regions.push(term.create_region(&option_line(marker, i + 1, width, label), false)?);
    }

    loop {
        let previous = state.selected();
        let key = term.read_key()?;
        match state.step(key, choices.len()) {
            MenuStep::Committed(choice) => {
                for region in &regions {
                    term.delete_region(*region)?;
                }
                debug!(choice, "options committed");
                return Ok(choice);
            }
            MenuStep::Moved { digit } => {
                if state.selected() == previous {
                    continue;
                }
                if let Some(prev) = previous {
                    term.update_region(
                        regions[prev],
                        &option_line(
                            settings::MENU_BLANK,
                            prev + 1,
                            width,
                            &choices.labels()[prev],
                        ),
                    )?;
                }
                if let Some(current) = state.selected() {
                    let marker = if digit {
                        digit_marker(state.digits())
                    } else {
                        settings::MENU_ARROW.to_string()
                    };
                    term.update_region(
                        regions[current],
                        &option_line(&marker, current + 1, width, &choices.labels()[current]),
                    )?;
                }
            }
            MenuStep::Ignored => {}
        }
    }
}

fn options_fallback(
    term: &mut dyn Terminal,
    prompt: &str,
    choices: &ChoiceSet,
) -> Result<usize, UiError> {
    let width = choices.number_width();
    loop {
        term.print(&format!(" [{}] {prompt}", settings::PROMPT_CUE))?;
        for (i, label) in choices.labels().iter().enumerate() {
            term.print(&option_line(settings::MENU_BLANK, i + 1, width, label))?;
        }
        let hint = choices
            .default_index()
            .map(|d| format!("[{}] ", d + 1))
            .unwrap_or_default();
        term.print_inline(&format!("{}{hint}", settings::MENU_CHOICE_LABEL))?;

        let Some(line) = term.read_line()? else {
            if let Some(d) = choices.default_index() {
                return Ok(d);
            }
            return Err(UiError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while a choice was required",
            )));
        };
        let answer = line.trim();
        if answer.is_empty() {
            if let Some(d) = choices.default_index() {
                return Ok(d);
            }
            continue;
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
            _ => continue,
        }
    }
}

/// Pause for a keypress/line (`n = None`) or a fixed countdown.
///
/// The countdown updates once per second and deliberately never consults
/// key input, so there is no early exit.
pub fn pause(term: &mut dyn Terminal, n: Option<u64>) -> Result<(), UiError> {
    let Some(seconds) = n else {
        if term.is_interactive() {
            term.print(settings::PAUSE_KEY_NOTICE)?;
            term.read_key()?;
        } else {
            term.print_inline(settings::PAUSE_LINE_NOTICE)?;
            term.read_line()?;
        }
        return Ok(());
    };

    debug!(seconds, "pause countdown");
    if term.is_interactive() {
        let region = term.create_region(settings::PAUSE_WAIT_LABEL, true)?;
        for i in (1..=seconds).rev() {
            term.update_region(region, &format!("{}: {i}... ", settings::PAUSE_WAIT_LABEL))?;
            thread::sleep(Duration::from_secs(1));
        }
        term.delete_region(region)?;
        term.print(settings::PAUSE_DONE)?;
    } else {
        for i in (1..=seconds).rev() {
            term.print(&format!("{}: {i}... ", settings::PAUSE_WAIT_LABEL))?;
            thread::sleep(Duration::from_secs(1));
        }
        term.print(settings::PAUSE_DONE)?;
    }
    Ok(())
}
