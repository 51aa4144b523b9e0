//! Streaming parser for plain-text keybind files
//!
//! Each line holds a key name and a target name separated by whitespace:
//!
//! ```text
//! w       forward     # move along the view direction
//! mouse2  look_around
//! ```
//!
//! Blank lines and `#` comments are skipped. Parsing is fail-fast: the first
//! malformed line aborts the file, and bindings from earlier lines stay
//! registered.

use std::io::{BufRead, BufReader};
use std::path::Path;

use super::registry::keycode_from_name;
use super::types::Keycode;

/// Sink for `(keycode, target name)` pairs produced by the parser
pub trait Binder {
    fn bind_keycode(&mut self, keycode: Keycode, target_name: &str);
}

impl Binder for Vec<(Keycode, String)> {
    fn bind_keycode(&mut self, keycode: Keycode, target_name: &str) {
        self.push((keycode, target_name.to_string()));
    }
}

/// Errors that can occur while loading a keybinds file
#[derive(Debug, thiserror::Error)]
pub enum KeybindError {
    #[error("could not read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{file}:{line} key name without target name")]
    MissingTarget { file: String, line: usize },
    #[error("{file}:{line} unexpected third token starting with '{found}'")]
    ExtraToken {
        file: String,
        line: usize,
        found: char,
    },
    #[error("{file}:{line} unknown key name {name}")]
    UnknownKey {
        file: String,
        line: usize,
        name: String,
    },
}

impl KeybindError {
    /// True when the file simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, KeybindError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// 1-based line of a syntax error, `None` for I/O failures
    pub fn line(&self) -> Option<usize> {
        match self {
            KeybindError::Io { .. } => None,
            KeybindError::MissingTarget { line, .. }
            | KeybindError::ExtraToken { line, .. }
            | KeybindError::UnknownKey { line, .. } => Some(*line),
        }
    }
}

/// Lexer position within the current line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LexState {
    /// Leading whitespace before the key name
    BeforeKey,
    ReadKey,
    /// Whitespace between key and target
    BeforeTarget,
    ReadTarget,
    /// Trailing whitespace; only a comment or newline may follow
    AfterTarget,
    ReadComment,
}

/// What a single character contributes to the line being built
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LexEvent {
    KeyChar(char),
    TargetChar(char),
    EndLine,
    Cruft(char),
}

/// Pure transition function of the line lexer
fn step(state: LexState, c: char) -> (LexState, Option<LexEvent>) {
    use LexState::*;

    if c == '\n' {
        return (BeforeKey, Some(LexEvent::EndLine));
    }
    if state == ReadComment {
        return (ReadComment, None);
    }
    if c == '#' {
        return (ReadComment, None);
    }

    let space = c.is_whitespace();
    match (state, space) {
        (BeforeKey, true) => (BeforeKey, None),
        (BeforeKey, false) | (ReadKey, false) => (ReadKey, Some(LexEvent::KeyChar(c))),
        (ReadKey, true) | (BeforeTarget, true) => (BeforeTarget, None),
        (BeforeTarget, false) | (ReadTarget, false) => {
            (ReadTarget, Some(LexEvent::TargetChar(c)))
        }
        (ReadTarget, true) | (AfterTarget, true) => (AfterTarget, None),
        (AfterTarget, false) => (AfterTarget, Some(LexEvent::Cruft(c))),
        (ReadComment, _) => (ReadComment, None),
    }
}

/// Incremental keybind parser fed one character at a time
pub struct KeybindParser<'a, B: Binder + ?Sized> {
    file: String,
    binder: &'a mut B,
    state: LexState,
    line: usize,
    key_name: String,
    target_name: String,
    bound: usize,
}

impl<'a, B: Binder + ?Sized> KeybindParser<'a, B> {
    /// Create a parser that reports errors against `file`
    pub fn new(file: impl Into<String>, binder: &'a mut B) -> Self {
        Self {
            file: file.into(),
            binder,
            state: LexState::BeforeKey,
            line: 1,
            key_name: String::new(),
            target_name: String::new(),
            bound: 0,
        }
    }

    /// Feed one character
    pub fn push(&mut self, c: char) -> Result<(), KeybindError> {
        let (next, event) = step(self.state, c);
        self.state = next;

        match event {
            None => Ok(()),
            Some(LexEvent::KeyChar(c)) => {
                self.key_name.push(c);
                Ok(())
            }
            Some(LexEvent::TargetChar(c)) => {
                self.target_name.push(c);
                Ok(())
            }
            Some(LexEvent::EndLine) => {
                let result = self.end_line();
                self.line += 1;
                result
            }
            Some(LexEvent::Cruft(found)) => Err(KeybindError::ExtraToken {
                file: self.file.clone(),
                line: self.line,
                found,
            }),
        }
    }

    /// Feed a chunk of text
    pub fn push_str(&mut self, text: &str) -> Result<(), KeybindError> {
        text.chars().try_for_each(|c| self.push(c))
    }

    /// Flush a final line with no trailing newline; returns the number of
    /// bindings registered by this parser
    pub fn finish(mut self) -> Result<usize, KeybindError> {
        self.end_line()?;
        Ok(self.bound)
    }

    /// Current 1-based line number
    pub fn line(&self) -> usize {
        self.line
    }

    fn end_line(&mut self) -> Result<(), KeybindError> {
        self.state = LexState::BeforeKey;
        let key_name = std::mem::take(&mut self.key_name);
        let target_name = std::mem::take(&mut self.target_name);

        // Blank or comment-only line
        if key_name.is_empty() {
            return Ok(());
        }

        if target_name.is_empty() {
            return Err(KeybindError::MissingTarget {
                file: self.file.clone(),
                line: self.line,
            });
        }

        let Some(keycode) = keycode_from_name(&key_name) else {
            return Err(KeybindError::UnknownKey {
                file: self.file.clone(),
                line: self.line,
                name: key_name,
            });
        };

        tracing::debug!("Binding {} ({}) to {}", key_name, keycode, target_name);
        self.binder.bind_keycode(keycode, &target_name);
        self.bound += 1;
        Ok(())
    }
}

/// Parse keybinds from any character sequence
pub fn parse_keybinds<I, B>(chars: I, file: &str, binder: &mut B) -> Result<usize, KeybindError>
where
    I: IntoIterator<Item = char>,
    B: Binder + ?Sized,
{
    let mut parser = KeybindParser::new(file, binder);
    for c in chars {
        parser.push(c)?;
    }
    parser.finish()
}

/// Parse keybinds from an in-memory string
pub fn parse_keybinds_str<B: Binder + ?Sized>(
    text: &str,
    file: &str,
    binder: &mut B,
) -> Result<usize, KeybindError> {
    parse_keybinds(text.chars(), file, binder)
}

/// Parse keybinds from a buffered reader, line by line
pub fn parse_keybinds_reader<R, B>(
    mut reader: R,
    file: &str,
    binder: &mut B,
) -> Result<usize, KeybindError>
where
    R: BufRead,
    B: Binder + ?Sized,
{
    let mut parser = KeybindParser::new(file, binder);
    let mut buf = String::new();
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(|source| KeybindError::Io {
            file: file.to_string(),
            source,
        })?;
        if read == 0 {
            break;
        }
        parser.push_str(&buf)?;
    }
    parser.finish()
}

/// Open and parse a keybinds file
pub fn load_keybinds_file<B: Binder + ?Sized>(
    path: &Path,
    binder: &mut B,
) -> Result<usize, KeybindError> {
    let label = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| KeybindError::Io {
        file: label.clone(),
        source,
    })?;
    parse_keybinds_reader(BufReader::new(file), &label, binder)
}
