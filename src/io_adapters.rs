use crate::command::LineSource;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Terminal input backed by a `rustyline` editor, with in-memory line history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Line input over any buffered reader, for piped stdin and tests.
///
/// Prompts are written to `echo` since there is no terminal to draw them.
pub struct BufferedInput<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> BufferedInput<R, W> {
    pub fn new(reader: R, echo: W) -> Self {
        Self { reader, echo }
    }
}

impl<R: BufRead, W: Write> LineSource for BufferedInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.echo, "{prompt}")?;
        self.echo.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD so the menu reports an invalid choice.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_buffered_input_strips_terminators_and_echoes_prompt() {
        let mut echo = Vec::new();
        let mut input = BufferedInput::new(Cursor::new("1\r\n  CS101 \n"), &mut echo);

        assert_eq!(input.read_line("> ").unwrap(), Some("1".to_string()));
        assert_eq!(input.read_line("id: ").unwrap(), Some("  CS101 ".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), None);
        drop(input);

        assert_eq!(String::from_utf8(echo).unwrap(), "> id: > ");
    }

    #[test]
    fn test_buffered_input_replaces_invalid_utf8() {
        let mut input = BufferedInput::new(Cursor::new(b"\xff\xfe\n9\n".to_vec()), std::io::sink());
        assert_eq!(
            input.read_line("").unwrap(),
            Some("\u{FFFD}\u{FFFD}".to_string())
        );
        assert_eq!(input.read_line("").unwrap(), Some("9".to_string()));
    }

    #[test]
    fn test_buffered_input_last_line_without_newline() {
        let mut input = BufferedInput::new(Cursor::new("9"), std::io::sink());
        assert_eq!(input.read_line("").unwrap(), Some("9".to_string()));
        assert_eq!(input.read_line("").unwrap(), None);
    }
}
