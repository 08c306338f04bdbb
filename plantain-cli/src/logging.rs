//! Tracing setup for the planner binary.
//!
//! Records pass one global [`EnvFilter`] (reloadable through
//! [`set_log_level`]) and then fan out to two sinks:
//!
//! * the console on stderr, which `--quiet` switches off;
//! * an optional append-only log file opened by [`enable_file_logging`].
//!
//! Reports go to stdout, so nothing here ever writes there.

use std::fmt;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, reload};

const DEFAULT_FILTER: &str = "info";

static LEVEL_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();
static CONSOLE_ON: AtomicBool = AtomicBool::new(true);
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

// ─── record format ───────────────────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

fn level_colour(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

/// `<local timestamp> <LEVEL> <target>:<line> <message> <fields>`
struct PlannerFormat;

impl<S, N> FormatEvent<S, N> for PlannerFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let paint = |code: &'static str| if ansi { code } else { "" };

        let stamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z");
        write!(writer, "{}{stamp}{} ", paint(DIM), paint(RESET))?;
        write!(
            writer,
            "{}{:>5}{} ",
            paint(level_colour(meta.level())),
            meta.level(),
            paint(RESET)
        )?;
        match meta.line() {
            Some(line) => write!(
                writer,
                "{}{}:{line}{} ",
                paint(CYAN),
                meta.target(),
                paint(RESET)
            )?,
            None => write!(writer, "{}{}{} ", paint(CYAN), meta.target(), paint(RESET))?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ─── log file sink ───────────────────────────────────────────────────────────

fn log_file() -> MutexGuard<'static, Option<File>> {
    LOG_FILE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writes to the open log file, or nowhere until one is opened.
struct LogFileSink;

struct LogFileGuard(MutexGuard<'static, Option<File>>);

impl Write for LogFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for LogFileSink {
    type Writer = LogFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileGuard(log_file())
    }
}

// ─── public API ──────────────────────────────────────────────────────────────

/// Replaces the global filter. Takes a bare level such as `debug` or any
/// `EnvFilter` directive such as `plantain_core=trace`.
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level '{directive}'"))?;
    let Some(handle) = LEVEL_HANDLE.get() else {
        bail!("logging not yet initialized");
    };
    handle
        .reload(filter)
        .map_err(|e| anyhow!("filter reload failed: {e}"))
}

/// Shows or hides console records. The log file is unaffected.
pub fn set_console_enabled(enabled: bool) -> Result<()> {
    if LEVEL_HANDLE.get().is_none() {
        bail!("logging not yet initialized");
    }
    CONSOLE_ON.store(enabled, Ordering::Relaxed);
    Ok(())
}

/// Appends records to `path`, replacing any file opened earlier. The parent
/// directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;
    *log_file() = Some(file);
    Ok(())
}

/// Installs the global subscriber. The filter starts from `RUST_LOG`, or
/// `info` when that is unset or invalid. Later calls are no-ops.
pub fn init_default_logging() {
    let initial =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (level_filter, level_handle) = reload::Layer::new(initial);

    let console = tracing_subscriber::fmt::layer()
        .event_format(PlannerFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(filter::filter_fn(|_| CONSOLE_ON.load(Ordering::Relaxed)));

    let file = tracing_subscriber::fmt::layer()
        .event_format(PlannerFormat)
        .with_ansi(false)
        .with_writer(LogFileSink);

    let installed = tracing_subscriber::registry()
        .with(level_filter)
        .with(console)
        .with(file)
        .try_init();
    if installed.is_ok() {
        let _ = LEVEL_HANDLE.set(level_handle);
    }
}
