//! Colored stderr backend for the `log` facade.
//!
//! Each record is written on one line:
//! `HH:MM:SS.mmm LEVEL [module file:line] message`, with the thread name appended to the
//! location when the thread is named.
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct TermLogger {
    out: Mutex<StandardStream>,
}

fn level_spec(level: Level) -> ColorSpec {
    let mut s = ColorSpec::new();
    match level {
        Level::Error => s.set_fg(Some(Color::Red)).set_bold(true),
        Level::Warn => s.set_fg(Some(Color::Yellow)).set_bold(true),
        Level::Info => s.set_fg(Some(Color::Green)),
        Level::Debug => s.set_fg(Some(Color::Blue)),
        Level::Trace => s.set_fg(Some(Color::Magenta)).set_dimmed(true),
    };
    s
}

fn write_record<W: WriteColor + Write>(out: &mut W, record: &Record<'_>) -> io::Result<()> {
    let timepoint = chrono::Local::now().naive_local();
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    write!(out, "{} ", timepoint.format("%H:%M:%S%.3f"))?;
    out.set_color(&level_spec(record.level()))?;
    write!(out, "{:<5}", record.level())?;
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    write!(out, " [{}", record.module_path().unwrap_or("<unknown>"))?;
    if let (Some(file), Some(line)) = (record.file(), record.line()) {
        write!(out, " {file}:{line}")?;
    }
    if let Some(name) = std::thread::current().name() {
        write!(out, " @{name}")?;
    }
    write!(out, "]")?;
    out.reset()?;
    writeln!(out, " {}", record.args())
}

impl Log for TermLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = self.out.lock();
        // Nowhere left to report a failing stderr.
        let _ = write_record(&mut *out, record);
    }

    fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

/// Install the logger as the global `log` backend. Can only succeed once per process.
pub fn init(level: LevelFilter, choice: ColorChoice) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(TermLogger {
        out: Mutex::new(StandardStream::stderr(choice)),
    }))?;
    log::set_max_level(level);
    Ok(())
}
