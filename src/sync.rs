//! Size comparison of icons against their category template, and replacement of stale ones.

use crate::catalog::{Category, pairs};
use crate::commit_log::record_copy;
use crate::vcs::{VcsError, VersionControl};
use clap::ValueEnum;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Icon directory not found: {0}")]
    MissingIconDir(PathBuf),
    #[error("Version control error: {0}")]
    Vcs(#[from] VcsError),
    #[error("Commit log error: {0}")]
    CommitLog(std::io::Error),
}

/// What to do when a remove or copy command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VcsFailurePolicy {
    /// Carry on as if the command had succeeded
    Ignore,
    /// Log a warning and carry on
    #[default]
    Warn,
    /// Stop the run with an error
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    Identical,
    Replaced,
    WouldReplace,
    VcsFailed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    pub dry_run: bool,
    pub on_vcs_failure: VcsFailurePolicy,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub identical: usize,
    pub replaced: usize,
    pub would_replace: usize,
    pub vcs_failed: usize,
}

impl SyncReport {
    fn count(&mut self, outcome: PairOutcome) {
        match outcome {
            PairOutcome::Identical => self.identical += 1,
            PairOutcome::Replaced => self.replaced += 1,
            PairOutcome::WouldReplace => self.would_replace += 1,
            PairOutcome::VcsFailed => self.vcs_failed += 1,
        }
    }
}

/// Everything a single pair needs: where the icons are, how to replace
/// them, and where to record replacements.
pub struct SyncContext<'a> {
    pub icon_dir: &'a Path,
    pub vcs: &'a dyn VersionControl,
    pub log: &'a mut dyn Write,
    pub options: SyncOptions,
}

/// Byte size of `path`, or `None` if it is missing, unreadable or empty.
///
/// Missing and empty files share the same "no size" value, so two absent
/// files compare as equal. Anything that is not a regular file, such as a
/// directory, also has no size; only regular files are ever icons.
pub fn file_size(path: &Path) -> Option<u64> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() && metadata.len() > 0 => Some(metadata.len()),
        _ => None,
    }
}

/// Brings `{category}-{suffix}.svgz` in line with the category template.
///
/// # Behavior
/// - Sizes equal (both missing counts as equal): prints an "identical"
///   line to stdout and changes nothing.
/// - Sizes differ: removes the icon and copies the template in its place
///   through `ctx.vcs`, then appends a `COPIED TO` line to `ctx.log`.
/// - In a dry run a mismatch is only reported.
///
/// A failing remove or copy is handled according to
/// `ctx.options.on_vcs_failure`. Unless the policy is `Abort`, the copy
/// after a failed remove is still attempted and the log line still written.
pub fn process(
    ctx: &mut SyncContext<'_>,
    category: &Category,
    suffix: &str,
) -> Result<PairOutcome, SyncError> {
    let template = category.template_file_name();
    let target = category.icon_file_name(suffix);

    let template_size = file_size(&ctx.icon_dir.join(&template));
    let target_size = file_size(&ctx.icon_dir.join(&target));

    if template_size == target_size {
        debug!("{} and {} are {:?} bytes", template, target, template_size);
        println!("{template} and {target} are identical \\o/");
        return Ok(PairOutcome::Identical);
    }

    if ctx.options.dry_run {
        info!(
            "Would copy {} to {} ({:?} vs {:?} bytes)",
            template, target, template_size, target_size
        );
        return Ok(PairOutcome::WouldReplace);
    }

    let removed = ctx.vcs.remove(ctx.icon_dir, &target);
    let removed_ok = check_vcs(removed, ctx.options.on_vcs_failure)?;
    let copied = ctx.vcs.copy(ctx.icon_dir, &template, &target);
    let copied_ok = check_vcs(copied, ctx.options.on_vcs_failure)?;

    record_copy(&mut *ctx.log, &template, &target).map_err(SyncError::CommitLog)?;
    if copied_ok {
        info!("Copied {} to {}", template, target);
    }

    if removed_ok && copied_ok {
        Ok(PairOutcome::Replaced)
    } else {
        Ok(PairOutcome::VcsFailed)
    }
}

/// Returns whether the command succeeded, or the error under `Abort`.
fn check_vcs(result: Result<(), VcsError>, policy: VcsFailurePolicy) -> Result<bool, SyncError> {
    match (result, policy) {
        (Ok(()), _) => Ok(true),
        (Err(e), VcsFailurePolicy::Abort) => Err(e.into()),
        (Err(e), VcsFailurePolicy::Warn) => {
            warn!("{e}");
            Ok(false)
        }
        (Err(e), VcsFailurePolicy::Ignore) => {
            debug!("Ignoring: {e}");
            Ok(false)
        }
    }
}

/// Processes every pair of the category table, in table order, inside `icon_dir`.
pub fn sync_icons(
    icon_dir: &Path,
    vcs: &dyn VersionControl,
    log: &mut dyn Write,
    options: SyncOptions,
) -> Result<SyncReport, SyncError> {
    if !icon_dir.is_dir() {
        return Err(SyncError::MissingIconDir(icon_dir.to_path_buf()));
    }

    let mut ctx = SyncContext {
        icon_dir,
        vcs,
        log,
        options,
    };

    let mut report = SyncReport::default();
    for (category, suffix) in pairs() {
        let outcome = process(&mut ctx, category, suffix)?;
        report.count(outcome);
    }

    ctx.log.flush().map_err(SyncError::CommitLog)?;

    Ok(report)
}
