//! Gesture scripts for the replay binary: one action per line.
//!
//! ```text
//! expand a
//! click b
//! shift d
//! down shift
//! drop b d
//! folder Exhibits
//! ```

use std::fmt;

use crate::kernel::{Action, Modifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    TrailingInput(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ScriptError::MissingArgument(what) => write!(f, "missing argument: {what}"),
            ScriptError::TrailingInput(rest) => write!(f, "unexpected input: {rest}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<Action>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(None);
    };

    let cmd = cmd.to_ascii_lowercase();
    let action = match cmd.as_str() {
        "click" | "meta" | "shift" => {
            let modifiers = match cmd.as_str() {
                "meta" => Modifiers::META,
                "shift" => Modifiers::SHIFT,
                _ => Modifiers::NONE,
            };
            Action::Click {
                id: arg(&mut parts, "entry id")?.into(),
                modifiers,
            }
        }
        "up" | "down" => {
            let delta = if cmd == "up" { -1 } else { 1 };
            let modifiers = match parts.next() {
                None => Modifiers::NONE,
                Some("meta") => Modifiers::META,
                Some("shift") => Modifiers::SHIFT,
                Some(other) => return Err(ScriptError::TrailingInput(other.to_string())),
            };
            Action::FocusAdjacent { delta, modifiers }
        }
        "expand" => Action::Expand {
            id: arg(&mut parts, "entry id")?.into(),
        },
        "collapse" => Action::Collapse {
            id: arg(&mut parts, "entry id")?.into(),
        },
        "toggle" => Action::ToggleExpanded {
            id: arg(&mut parts, "entry id")?.into(),
        },
        "activate" => Action::Activate {
            id: arg(&mut parts, "entry id")?.into(),
        },
        "clear" => Action::ClearFocus,
        // Column names contain spaces ("Added By").
        "sort" => {
            let column = parts.collect::<Vec<_>>().join(" ");
            if column.is_empty() {
                return Err(ScriptError::MissingArgument("column"));
            }
            return Ok(Some(Action::SortBy { column }));
        }
        "drop" => Action::Drop {
            dragged_id: arg(&mut parts, "dragged entry id")?.into(),
            target_id: arg(&mut parts, "target folder id")?.into(),
        },
        "rename" => Action::BeginRename {
            id: arg(&mut parts, "entry id")?.into(),
        },
        "name" => {
            let name = parts.collect::<Vec<_>>().join(" ");
            return Ok(Some(Action::FinishRename { name }));
        }
        "folder" => {
            let name = parts.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err(ScriptError::MissingArgument("folder name"));
            }
            return Ok(Some(Action::CreateFolder { name }));
        }
        "remove" => Action::Remove {
            id: arg(&mut parts, "entry id")?.into(),
        },
        "tick" => Action::Tick,
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };

    let rest: Vec<&str> = parts.collect();
    if !rest.is_empty() {
        return Err(ScriptError::TrailingInput(rest.join(" ")));
    }
    Ok(Some(action))
}

fn arg<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<&'a str, ScriptError> {
    parts.next().ok_or(ScriptError::MissingArgument(what))
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
