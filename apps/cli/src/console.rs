//! Console I/O with a session transcript.

use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, SessionError};

/// Chronological record of every printed and read line.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append every entry to `path`, one per line, creating the file if needed.
    pub fn append_to(&self, path: &Path) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(entry);
            content.push('\n');
        }
        file.write_all(content.as_bytes())
    }
}

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::default(),
        }
    }

    /// Print a line and record it.
    pub fn say(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        self.transcript.record(message);
        Ok(())
    }

    /// Print an empty line without recording it.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `message`, then read and record one line of input.
    pub fn prompt(&mut self, message: impl Into<String>) -> Result<String> {
        self.say(message)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        self.transcript.record(line.clone());
        Ok(line)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_records_prompt_and_input() {
        let mut console = console("hello\n");
        let answer = console.prompt("Name?").unwrap();
        assert_eq!(answer, "hello");
        assert_eq!(console.transcript().entries(), ["Name?", "hello"]);
        assert_eq!(String::from_utf8_lossy(console.output()), "Name?\n");
    }

    #[test]
    fn prompt_strips_crlf() {
        let mut console = console("hello\r\n");
        assert_eq!(console.prompt("Name?").unwrap(), "hello");
    }

    #[test]
    fn prompt_accepts_last_line_without_newline() {
        let mut console = console("tail");
        assert_eq!(console.prompt("Name?").unwrap(), "tail");
    }

    #[test]
    fn prompt_reports_end_of_input() {
        let mut console = console("");
        let result = console.prompt("Name?");
        assert!(matches!(result, Err(SessionError::EndOfInput)));
    }

    #[test]
    fn blank_is_not_recorded() {
        let mut console = console("");
        console.say("one").unwrap();
        console.blank().unwrap();
        assert_eq!(console.transcript().entries(), ["one"]);
        assert_eq!(String::from_utf8_lossy(console.output()), "one\n\n");
    }

    #[test]
    fn append_to_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");

        let mut transcript = Transcript::default();
        transcript.record("first");
        transcript.append_to(&path).unwrap();
        transcript.record("second");
        transcript.append_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nfirst\nsecond\n");
    }
}
