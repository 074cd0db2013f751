//! Session script parsing
//!
//! One command per line; blank lines and lines starting with `#` are
//! skipped. Text arguments run to the end of the line, spaces included.

use crate::application::{InputEvent, Key};
use crate::domain::tags::tokenize;
use crate::domain::{Point, PointerButton};
use crate::error::{ChipsError, Result};
use std::str::FromStr;

/// A parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Event(InputEvent),
    /// Print the current session snapshot
    Show,
}

/// Parse a whole script
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>> {
    let mut commands = Vec::new();

    for (idx, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = parse_line(trimmed).map_err(|message| ChipsError::Script {
            line: idx + 1,
            message,
        })?;
        commands.push(command);
    }

    Ok(commands)
}

fn parse_line(line: &str) -> std::result::Result<ScriptCommand, String> {
    let (name, rest) = match line.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (line, ""),
    };

    let event = match name {
        "show" => return Ok(ScriptCommand::Show),
        "load" => InputEvent::Load(rest.to_string()),
        "type" => InputEvent::Type(rest.to_string()),
        "blur" => InputEvent::Blur,
        "rename" => {
            let (index, text) = rest.split_once(' ').unwrap_or((rest, ""));
            InputEvent::Rename {
                index: parse_index(index)?,
                text: text.to_string(),
            }
        }
        "delete" => InputEvent::Delete(parse_index(rest)?),
        "mark" => InputEvent::Mark(tokenize(rest)),
        "press" => {
            let args = numbers_after_button(rest, 3)?;
            InputEvent::PointerDown {
                button: PointerButton::from_str(args[0])?,
                point: Point::new(parse_coord(args[1])?, parse_coord(args[2])?),
            }
        }
        "release" => {
            let args = numbers_after_button(rest, 2)?;
            InputEvent::PointerUp {
                point: Point::new(parse_coord(args[0])?, parse_coord(args[1])?),
            }
        }
        "key" => InputEvent::KeyDown(Key::from_str(rest)?),
        _ => return Err(format!("Unknown command '{}'", name)),
    };

    Ok(ScriptCommand::Event(event))
}

fn numbers_after_button(rest: &str, expected: usize) -> std::result::Result<Vec<&str>, String> {
    let args: Vec<&str> = rest.split_whitespace().collect();
    if args.len() != expected {
        return Err(format!(
            "Expected {} arguments, found {}",
            expected,
            args.len()
        ));
    }
    Ok(args)
}

fn parse_index(text: &str) -> std::result::Result<usize, String> {
    text.trim()
        .parse()
        .map_err(|_| format!("Invalid tag index: '{}'", text.trim()))
}

fn parse_coord(text: &str) -> std::result::Result<f64, String> {
    text.parse()
        .map_err(|_| format!("Invalid coordinate: '{}'", text))
}
