//! The local `commit` file that accumulates a commit message for the run.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PROMPT: &str = "Commit file already exists, do you want to replace it? [Y/n]";

#[derive(Debug, thiserror::Error)]
pub enum CommitLogError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
}

impl CommitLogError {
    fn from_io(e: std::io::Error, path: &Path) -> Self {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CommitLogError::PermissionDenied(path.to_path_buf())
        } else {
            CommitLogError::Io(e)
        }
    }
}

/// An open commit file. Lines are appended through [`Write`]; the handle
/// is released when the value is dropped or [`CommitLog::close`]d.
#[derive(Debug)]
pub struct CommitLog {
    file: File,
    path: PathBuf,
}

impl CommitLog {
    /// Opens `path` for the run, creating it when absent.
    ///
    /// # Behavior
    /// - If the file already exists, writes [`PROMPT`] to `prompt_out` and
    ///   reads one answer line from `prompt_in`. End of input counts as an
    ///   empty answer.
    /// - The previous content is read into memory and the file is truncated.
    /// - The previous content is written back only when
    ///   [`restores_previous`] accepts the answer.
    pub fn open<R: BufRead, W: Write>(
        path: &Path,
        mut prompt_in: R,
        mut prompt_out: W,
    ) -> Result<Self, CommitLogError> {
        let answer = if path.exists() {
            writeln!(prompt_out, "{PROMPT}").map_err(CommitLogError::Io)?;
            prompt_out.flush().map_err(CommitLogError::Io)?;

            let mut line = String::new();
            prompt_in
                .read_line(&mut line)
                .map_err(CommitLogError::Io)?;
            Some(line)
        } else {
            None
        };

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| CommitLogError::from_io(e, path))?;

        let mut previous = Vec::new();
        file.read_to_end(&mut previous)
            .map_err(|e| CommitLogError::from_io(e, path))?;
        file.seek(SeekFrom::Start(0)).map_err(CommitLogError::Io)?;
        file.set_len(0)
            .map_err(|e| CommitLogError::from_io(e, path))?;

        if answer.as_deref().is_some_and(restores_previous) {
            debug!(
                "Keeping {} bytes of previous content in {}",
                previous.len(),
                path.display()
            );
            file.write_all(&previous)
                .map_err(|e| CommitLogError::from_io(e, path))?;
        } else {
            debug!("Discarded previous content of {}", path.display());
        }

        Ok(CommitLog {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and syncs the file, then releases the handle.
    pub fn close(mut self) -> Result<(), CommitLogError> {
        self.file.flush().map_err(CommitLogError::Io)?;
        self.file.sync_all().map_err(CommitLogError::Io)
    }
}

impl Write for CommitLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

/// Decides whether an answer to [`PROMPT`] puts the old content back.
///
/// The prompt reads as "replace it?", yet old content survives only for a
/// no-form answer; everything else, including an empty answer and input
/// that is neither yes nor no, leaves the file empty. This matches the
/// long-standing behavior of the tool and is kept as is.
pub fn restores_previous(answer: &str) -> bool {
    let answer = answer.strip_suffix('\n').unwrap_or(answer);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    let answer = if answer.is_empty() { "yes" } else { answer };
    let answer = answer.to_lowercase();

    (answer != "y" && !answer.contains("yes")) && (answer == "n" || answer.contains("no"))
}

/// Appends the line describing one template substitution.
pub fn record_copy<W: Write + ?Sized>(
    out: &mut W,
    template: &str,
    target: &str,
) -> std::io::Result<()> {
    writeln!(out, "{template} COPIED TO {target}")
}
