//! Remove and copy operations that keep the version-control history of
//! the icon tree intact.
//!
//! The operations run as blocking subprocesses of the system `svn` or `git`
//! binary, one at a time, with the icon directory as working directory and
//! bare file names as arguments.

use clap::ValueEnum;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The operations the sync needs from a version-control working copy.
pub trait VersionControl {
    /// Removes the tracked file `file` in `dir` and records the deletion.
    fn remove(&self, dir: &Path, file: &str) -> Result<(), VcsError>;

    /// Copies the tracked file `from` to the new tracked path `to`, both in `dir`.
    fn copy(&self, dir: &Path, from: &str, to: &str) -> Result<(), VcsError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VcsTool {
    /// Subversion (`svn rm`, `svn cp`)
    Svn,
    /// Git (`git rm`, then copy and `git add`)
    Git,
    /// No version control, plain file removal and copy
    Plain,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandVcs {
    tool: VcsTool,
}

impl CommandVcs {
    pub fn new(tool: VcsTool) -> Self {
        CommandVcs { tool }
    }
}

impl VersionControl for CommandVcs {
    fn remove(&self, dir: &Path, file: &str) -> Result<(), VcsError> {
        match self.tool {
            VcsTool::Svn => run(dir, "svn", &["rm", file]),
            VcsTool::Git => run(dir, "git", &["rm", "-q", "-f", file]),
            VcsTool::Plain => {
                debug!("Removing {}", dir.join(file).display());
                std::fs::remove_file(dir.join(file))?;
                Ok(())
            }
        }
    }

    fn copy(&self, dir: &Path, from: &str, to: &str) -> Result<(), VcsError> {
        match self.tool {
            VcsTool::Svn => run(dir, "svn", &["cp", from, to]),
            VcsTool::Git => {
                plain_copy(dir, from, to)?;
                run(dir, "git", &["add", to])
            }
            VcsTool::Plain => plain_copy(dir, from, to),
        }
    }
}

fn plain_copy(dir: &Path, from: &str, to: &str) -> Result<(), VcsError> {
    debug!("Copying {} to {}", from, to);
    std::fs::copy(dir.join(from), dir.join(to))?;
    Ok(())
}

fn run(dir: &Path, program: &str, args: &[&str]) -> Result<(), VcsError> {
    let command = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    debug!("Running `{}` in {}", command, dir.display());

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| VcsError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(VcsError::Failed {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
