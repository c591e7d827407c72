use super::{Event, Memory, Report, Runtime, Termination};
use crate::warn;
use std::io::{self, BufRead};

const CYCLES: usize = 5000;

/// ## Blocking source of input characters
///
/// `read_char` is called once per `in` instruction that finds nothing
/// queued. It may block for as long as it likes. `None` means the source
/// is closed and the run is aborted.

pub trait InputPort {
    fn read_char(&mut self) -> Option<char>;
}

impl<T> InputPort for T
where
    T: Iterator<Item = char>,
{
    fn read_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// Characters from a reader, a line at a time. Line endings become `\n`.
///
/// A read error closes the port like end of input does. The error is
/// kept for the caller.
pub struct LineInput<R> {
    reader: R,
    line: Vec<char>,
    offset: usize,
    error: Option<io::Error>,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> LineInput<R> {
        LineInput {
            reader,
            line: vec![],
            offset: 0,
            error: None,
        }
    }

    /// Why input stopped, when it was not the end of the stream.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }
}

impl<R: BufRead> InputPort for LineInput<R> {
    fn read_char(&mut self) -> Option<char> {
        if self.offset >= self.line.len() {
            if self.error.is_some() {
                return None;
            }
            let mut buf = String::new();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(error) => {
                    warn!("input closed: {}", error);
                    self.error = Some(error);
                    return None;
                }
            }
            let trimmed = buf.trim_end_matches(|c| c == '\n' || c == '\r');
            self.line = trimmed.chars().chain(std::iter::once('\n')).collect();
            self.offset = 0;
        }
        let ch = self.line[self.offset];
        self.offset += 1;
        Some(ch)
    }
}

/// Run a program to completion.
///
/// `output` is called once for every `out` instruction. A closed input
/// port aborts the run.
pub fn run<I, O>(memory: Memory, input: &mut I, mut output: O) -> Report
where
    I: InputPort + ?Sized,
    O: FnMut(char),
{
    let mut runtime = Runtime::new(memory);
    loop {
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Output(ch) => output(ch),
            Event::Input => match input.read_char() {
                Some(ch) => {
                    runtime.input(ch);
                }
                None => runtime.interrupt(),
            },
            Event::Halted | Event::Ended | Event::Error(_) | Event::Stopped => break,
        }
    }
    match runtime.report() {
        Some(report) => report,
        None => Report {
            termination: Termination::Aborted,
            registers: runtime.registers(),
            stack: runtime.stack(),
            cursor: runtime.cursor(),
            steps: runtime.steps(),
        },
    }
}
