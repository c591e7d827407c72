//! Leveled diagnostics on stderr.
//!
//! The level is process wide and set once by the host. Every macro checks
//! the level before formatting, so disabled trace points in the run loop
//! cost one atomic load.

use ansi_term::{Colour, Style};
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace = 1,
    Debug = 2,
    Info = 3,
    Warn = 4,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Level::Trace => write!(f, "TRACE"),
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);
static COLOR: AtomicU8 = AtomicU8::new(1);

pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Maps a `-v` count to a level: none is warnings only,
/// one adds debug and info, two or more add per-instruction trace.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Debug,
        _ => Level::Trace,
    }
}

pub fn set_color(enabled: bool) {
    COLOR.store(enabled as u8, Ordering::Relaxed);
}

pub fn enabled(level: Level) -> bool {
    level as u8 >= LEVEL.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn log(level: Level, message: &str) {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let tag = format!("{:5}", level.to_string());
    let tag = if COLOR.load(Ordering::Relaxed) == 0 {
        tag
    } else {
        let style = match level {
            Level::Trace => Style::new().dimmed(),
            Level::Debug => Colour::Cyan.normal(),
            Level::Info => Colour::Green.normal(),
            Level::Warn => Colour::Yellow.bold(),
        };
        style.paint(tag).to_string()
    };
    let stderr = std::io::stderr();
    let mut stderr = stderr.lock();
    let _ = writeln!(stderr, "{} {} {}", stamp, tag, message);
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        if $crate::log::enabled($crate::log::Level::Trace) {
            $crate::log::log($crate::log::Level::Trace, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::log::enabled($crate::log::Level::Debug) {
            $crate::log::log($crate::log::Level::Debug, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::log::enabled($crate::log::Level::Info) {
            $crate::log::log($crate::log::Level::Info, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::log::enabled($crate::log::Level::Warn) {
            $crate::log::log($crate::log::Level::Warn, &format!($($arg)*));
        }
    };
}
