extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Error, Event, Memory, Runtime, Termination};
use crate::{error, info, log, warn};
use ansi_term::{Colour, Style};
use clap::Parser;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod command;
pub use command::Command;

/// Run a program image for the Synacor virtual machine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Program image: a file path or an http(s) URL
    #[arg()]
    pub image: String,

    /// Lines to type before the terminal takes over
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Instructions executed between checks for Ctrl-C
    #[arg(short, long, default_value_t = 5000, value_parser = clap::value_parser!(u32).range(1..))]
    pub cycles: u32,

    /// More diagnostics on stderr; repeat for instruction trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// No status messages, only program output
    #[arg(short, long)]
    pub quiet: bool,

    /// Plain diagnostics without terminal colours
    #[arg(long)]
    pub no_color: bool,
}

pub fn main() {
    let args = Args::parse();
    log::set_level(log::level_from_verbosity(args.verbose));
    log::set_color(!args.no_color);
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Ctrl-C handler not installed: {}", error);
    }
    if let Err(error) = main_loop(&args, interrupted) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("synacor")?;
    interface.set_report_signal(Signal::Interrupt, true);

    let memory = match load(&args.image) {
        Ok(memory) => memory,
        Err(error) => {
            write_error(&interface, &error)?;
            return Ok(());
        }
    };
    let mut script = match &args.script {
        None => VecDeque::new(),
        Some(path) => match read_script(path) {
            Ok(lines) => lines,
            Err(error) => {
                write_error(&interface, &error)?;
                return Ok(());
            }
        },
    };

    let mut runtime = Runtime::new(memory);
    let mut pending = String::new();
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        let event = runtime.execute(args.cycles as usize);
        if let Event::Output(ch) = event {
            pending.push(ch);
            continue;
        }
        if !pending.is_empty() {
            interface.write_fmt(format_args!("{}", pending))?;
            pending.clear();
        }
        match event {
            Event::Running | Event::Output(_) => {}
            Event::Input => {
                if let Some(line) = script.pop_front() {
                    submit(&interface, &mut runtime, &line)?;
                    continue;
                }
                match interface.read_line()? {
                    ReadResult::Input(line) => {
                        submit(&interface, &mut runtime, &line)?;
                        interface.add_history_unique(line);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => runtime.interrupt(),
                }
            }
            Event::Halted => break,
            Event::Ended => {
                if !args.quiet {
                    interface.write_fmt(format_args!("Reached end of program.\n"))?;
                }
                break;
            }
            Event::Error(error) => {
                write_error(&interface, &error)?;
                break;
            }
            Event::Stopped => {
                if !args.quiet && runtime.termination() == Some(&Termination::Aborted) {
                    interface.write_fmt(format_args!("Interrupted at {}.\n", runtime.cursor()))?;
                }
                break;
            }
        }
    }
    info!("{} instructions executed", runtime.steps());
    Ok(())
}

/// A line for the program, or a debug command when it starts with `~`.
fn submit<T: Terminal>(
    interface: &Interface<T>,
    runtime: &mut Runtime,
    line: &str,
) -> std::io::Result<()> {
    match line.strip_prefix('~') {
        None => runtime.enter(line),
        Some(command) => match Command::parse(command) {
            Ok(command) => {
                let s = command.execute(runtime);
                interface.write_fmt(format_args!("{}", s))?;
            }
            Err(error) => write_error(interface, &error)?,
        },
    }
    Ok(())
}

fn write_error<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Colour::Red.bold().paint(format!("?{}", error))
    ))
}

pub fn load(source: &str) -> Result<Memory, Error> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        fetch(source)?
    } else {
        read_file(source)?
    };
    let memory = Memory::from_bytes(&bytes)?;
    info!(
        "loaded {} words from {} crc32 {:08x}",
        memory.loaded_len(),
        Style::new().bold().paint(source),
        crc::crc32::checksum_ieee(&bytes)
    );
    Ok(memory)
}

fn read_file(filename: &str) -> Result<Vec<u8>, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    let mut bytes = vec![];
    if let Err(error) = file.read_to_end(&mut bytes) {
        return Err(error!(InternalError; error.to_string()));
    }
    Ok(bytes)
}

fn fetch(url: &str) -> Result<Vec<u8>, Error> {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(error) => return Err(error!(InternalError; error.to_string())),
    };
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(error!(FileNotFound; url));
    }
    match response.error_for_status().and_then(|r| r.bytes()) {
        Ok(bytes) => Ok(bytes.to_vec()),
        Err(error) => Err(error!(InternalError; error.to_string())),
    }
}

fn read_script(path: &Path) -> Result<VecDeque<String>, Error> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text.lines().map(String::from).collect()),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound; path.display().to_string())),
            _ => Err(error!(InternalError; error.to_string())),
        },
    }
}
