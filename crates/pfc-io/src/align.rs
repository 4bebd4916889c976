//! External aligner invocation over a framed records file.

use crate::error::{IoError, Result};
use std::path::Path;
use std::process::Command;
use tracing::info;

/// External alignment program. The default is mafft, reading a records
/// file as its final argument and writing the aligned result to stdout.
#[derive(Debug, Clone)]
pub struct Aligner {
    pub program: String,
    pub args: Vec<String>,
}

impl Aligner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<S: AsRef<str>>(mut self, args: &[S]) -> Self {
        self.args = args.iter().map(|a| a.as_ref().to_string()).collect();
        self
    }

    /// Run the aligner over `records_path` and capture stdout. A non-zero
    /// exit status is an error; the tool's stderr is not captured here.
    pub fn run(&self, records_path: &Path) -> Result<String> {
        info!(program = %self.program, path = %records_path.display(), "invoking aligner");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(records_path)
            .output()?;
        if !output.status.success() {
            return Err(IoError::AlignerFailed {
                program: self.program.clone(),
                status: output.status.code().unwrap_or(-1),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new("mafft")
    }
}
