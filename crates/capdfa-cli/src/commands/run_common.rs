//! Shared logic for the commands: loading automata and inputs.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use capdfa_automaton::Automaton;
use capdfa_vm::{ExecError, Executor, MatchResult, Tracer};
use log::debug;

/// How input text is turned into code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// One unit per character; characters above `U+00FF` are rejected.
    Latin1,
    /// One unit per UTF-8 byte.
    Utf8,
    #[default]
    Utf16,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input is required: use -s/--input or an INPUT file")]
    Missing,
    #[error("character {ch:?} at offset {offset} is not Latin-1")]
    NotLatin1 { ch: char, offset: usize },
    #[error("'{}' is not valid UTF-8", .0.display())]
    NotUtf8(PathBuf),
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Input converted to the code units an automaton reads.
#[derive(Debug, PartialEq, Eq)]
pub enum Subject {
    Bytes(Vec<u8>),
    Units(Vec<u16>),
}

impl Subject {
    pub fn encode(text: &str, encoding: Encoding) -> Result<Self, InputError> {
        match encoding {
            Encoding::Latin1 => text
                .chars()
                .enumerate()
                .map(|(offset, ch)| latin1_unit(ch, offset))
                .collect::<Result<Vec<u8>, _>>()
                .map(Subject::Bytes),
            Encoding::Utf8 => Ok(Subject::Bytes(text.as_bytes().to_vec())),
            Encoding::Utf16 => Ok(Subject::Units(text.encode_utf16().collect())),
        }
    }

    /// Raw file contents. Latin-1 and UTF-8 take the bytes as they are.
    fn from_file_bytes(
        bytes: Vec<u8>,
        encoding: Encoding,
        path: &Path,
    ) -> Result<Self, InputError> {
        match encoding {
            Encoding::Latin1 | Encoding::Utf8 => Ok(Subject::Bytes(bytes)),
            Encoding::Utf16 => {
                let text =
                    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8(path.to_owned()))?;
                Ok(Subject::Units(text.encode_utf16().collect()))
            }
        }
    }

    pub fn unit_count(&self) -> usize {
        match self {
            Subject::Bytes(b) => b.len(),
            Subject::Units(u) => u.len(),
        }
    }

    pub fn find_with<T: Tracer>(
        &self,
        executor: &Executor,
        from: usize,
        tracer: &mut T,
    ) -> Result<MatchResult, ExecError> {
        match self {
            Subject::Bytes(b) => executor.find_with(b.as_slice(), from, tracer),
            Subject::Units(u) => executor.find_with(u.as_slice(), from, tracer),
        }
    }
}

fn latin1_unit(ch: char, offset: usize) -> Result<u8, InputError> {
    u8::try_from(ch).map_err(|_| InputError::NotLatin1 { ch, offset })
}

/// Inline text wins; `-` reads stdin.
pub fn read_subject(
    text: Option<&str>,
    path: Option<&Path>,
    encoding: Encoding,
) -> Result<Subject, InputError> {
    if let Some(text) = text {
        return Subject::encode(text, encoding);
    }
    let Some(path) = path else {
        return Err(InputError::Missing);
    };
    let read_err = |source| InputError::Read {
        path: path.to_owned(),
        source,
    };
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(read_err)?;
        buf
    } else {
        fs::read(path).map_err(read_err)?
    };
    Subject::from_file_bytes(bytes, encoding, path)
}

/// Load the input or exit with an error.
pub fn load_subject(text: Option<&str>, path: Option<&Path>, encoding: Encoding) -> Subject {
    let subject = read_subject(text, path, encoding).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    debug!("input: {} code units ({:?})", subject.unit_count(), encoding);
    subject
}

/// Load and validate an automaton or exit with an error.
pub fn load_automaton(path: &Path) -> Automaton {
    Automaton::from_path(path).unwrap_or_else(|e| {
        eprintln!("error: {}: {}", path.display(), e);
        std::process::exit(1);
    })
}

/// One `group N: start..end` line per capture group; `-` when unset.
pub fn format_groups(captures: &[i32]) -> Vec<String> {
    captures
        .chunks(2)
        .enumerate()
        .map(|(group, bounds)| match bounds {
            [start, end] if *start >= 0 && *end >= 0 => {
                format!("group {}: {}..{}", group, start, end)
            }
            _ => format!("group {}: -", group),
        })
        .collect()
}
