use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ProgramError {
    Io(std::io::Error),
    Json(serde_json::Error),
    BadToken { position: usize, token: String },
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProgramError::Io(e) => write!(f, "program io: {}", e),
            ProgramError::Json(e) => write!(f, "program format: {}", e),
            ProgramError::BadToken { position, token } => {
                write!(f, "bad token {:?} at position {}", token, position)
            }
        }
    }
}

impl std::error::Error for ProgramError {}

impl From<std::io::Error> for ProgramError {
    fn from(e: std::io::Error) -> Self {
        ProgramError::Io(e)
    }
}

impl From<serde_json::Error> for ProgramError {
    fn from(e: serde_json::Error) -> Self {
        ProgramError::Json(e)
    }
}

/// Exported form of the program stack: numeric literals and operation
/// symbols in stack order. Persisted as a bare JSON array of strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(pub Vec<String>);

impl Program {
    pub fn parse_line(line: &str) -> Program {
        Program(line.split_whitespace().map(str::to_string).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, ProgramError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Program, ProgramError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProgramError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Program, ProgramError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

impl From<Vec<String>> for Program {
    fn from(tokens: Vec<String>) -> Self {
        Program(tokens)
    }
}

impl<const N: usize> From<[&str; N]> for Program {
    fn from(tokens: [&str; N]) -> Self {
        Program(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
