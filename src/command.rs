use crate::error::InvalidSelection;
use std::str::FromStr;

/// Source of interactive input lines.
///
/// Implementors show `prompt` in whatever way fits the medium and return the next
/// line without its terminator. `Ok(None)` signals that no more input will arrive
/// (end of stream or a user interrupt), which the session treats like `Exit`.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// A menu selection, parsed from one line of input.
///
/// | input        | command            |
/// |--------------|--------------------|
/// | `1`          | `Load`             |
/// | `2`          | `List`             |
/// | `3 [id]`     | `Show(Option<id>)` |
/// | `9`          | `Exit`             |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    List,
    /// Print one course. The id may be given inline; otherwise the session prompts for it.
    Show(Option<String>),
    Exit,
}

impl FromStr for Command {
    type Err = InvalidSelection;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let first = words.next().unwrap_or_default();
        let option: i64 = first
            .parse()
            .map_err(|_| InvalidSelection::NotANumber(first.to_string()))?;

        let command = match option {
            1 => Command::Load,
            2 => Command::List,
            3 => Command::Show(words.next().map(str::to_string)),
            9 => Command::Exit,
            other => return Err(InvalidSelection::Unmapped(other)),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(InvalidSelection::TrailingInput(rest.join(" ")));
        }
        Ok(command)
    }
}
