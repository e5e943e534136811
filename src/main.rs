mod catalog;
mod cli;
mod commit_log;
mod sync;
mod vcs;

use cli::Cli;
use commit_log::CommitLog;
use std::fmt as stdfmt;
use std::io::{IsTerminal, stderr, stdin, stdout};
use std::process::ExitCode;
use sync::{SyncOptions, SyncReport, sync_icons};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber, error, info};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use vcs::CommandVcs;

struct CopierExitCode;

impl CopierExitCode {
    /// Exit code used for any error that stopped the run.
    fn any_error() -> ExitCode {
        ExitCode::from(255)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.requested_level());

    // Change working directory if -C was specified
    if let Some(directory) = &cli.directory
        && let Err(e) = std::env::set_current_dir(directory)
    {
        error!(
            "Failed to change directory to {}: {}",
            directory.display(),
            e
        );
        return CopierExitCode::any_error();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            CopierExitCode::any_error()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let vcs = CommandVcs::new(cli.vcs);
    let options = SyncOptions {
        dry_run: cli.dry_run,
        on_vcs_failure: cli.on_vcs_failure,
    };

    if cli.dry_run {
        let report = sync_icons(&cli.icon_dir, &vcs, &mut std::io::sink(), options)?;
        log_report(&report);
        info!("DRY RUN - no files were modified");
        return Ok(());
    }

    // The commit file is set up before the icon directory is checked, so a
    // wrong launch directory still leaves an (emptied) commit file behind.
    let mut log = CommitLog::open(&cli.commit_file, stdin().lock(), stdout())?;
    let report = sync_icons(&cli.icon_dir, &vcs, &mut log, options)?;
    info!("Commit message written to {}", log.path().display());
    log.close()?;

    log_report(&report);
    Ok(())
}

fn log_report(report: &SyncReport) {
    info!("{} icons identical to their template", report.identical);
    if report.replaced > 0 {
        info!("Replaced {} icons", report.replaced);
    }
    if report.would_replace > 0 {
        info!("Would replace {} icons", report.would_replace);
    }
    if report.vcs_failed > 0 {
        info!(
            "{} icons were copied despite a failing version control command",
            report.vcs_failed
        );
    }
}

fn init_tracing(requested: Option<LevelFilter>) {
    let stderr_is_terminal = stderr().is_terminal();
    let formatter = EmojiFormatter { stderr_is_terminal };

    let filter = match requested {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let fmt_layer = tracing_fmt::layer()
        .event_format(formatter)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

struct EmojiFormatter {
    stderr_is_terminal: bool,
}

impl<S, N> FormatEvent<S, N> for EmojiFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> stdfmt::Result {
        if self.stderr_is_terminal {
            match *event.metadata().level() {
                Level::DEBUG => write!(writer, "🔍 ")?,
                Level::INFO => write!(writer, "ℹ️ ")?,
                Level::WARN => write!(writer, "⚠️  ")?,
                Level::ERROR => write!(writer, "❌️ ")?,
                _ => {}
            }
        } else {
            match *event.metadata().level() {
                Level::DEBUG => writer.write_str("DEBUG: ")?,
                Level::INFO => writer.write_str("INFO: ")?,
                Level::WARN => writer.write_str("WARN: ")?,
                Level::ERROR => writer.write_str("ERROR: ")?,
                _ => {}
            }
        }

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
