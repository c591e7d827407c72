use super::{Address, Error, Machine, Memory, Step, Word, MAX_VALUE, REGISTER_COUNT};
use crate::{debug, warn};
use std::collections::VecDeque;

/// ## Events returned by `Runtime::execute`

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Cycle budget spent; call `execute` again.
    Running,
    /// One character from an `out` instruction.
    Output(char),
    /// Waiting on `in` with nothing queued. Queue input then call `execute` again.
    Input,
    /// The program executed `halt`.
    Halted,
    /// The cursor reached the end of the loaded image.
    Ended,
    /// A fatal error. The run is over.
    Error(Error),
    /// The run is over; reported for every call after the one that ended it.
    Stopped,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    Halted,
    Ended,
    /// Interrupted by the host.
    Aborted,
    Failed(Error),
}

/// Final observable state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub termination: Termination,
    pub registers: [Word; REGISTER_COUNT],
    /// Bottom to top.
    pub stack: Vec<Word>,
    pub cursor: Address,
    pub steps: u64,
}

/// ## Virtual machine runtime
///
/// Drives one `Machine` in slices of at most `cycles` instructions and
/// hands control back to the host on every event. Input is queued by the
/// host; `in` suspends the run loop while the queue is empty.

pub struct Runtime {
    machine: Machine,
    input: VecDeque<Word>,
    termination: Option<Termination>,
    steps: u64,
}

impl Runtime {
    pub fn new(memory: Memory) -> Runtime {
        debug!("new run with {} word image", memory.loaded_len());
        Runtime {
            machine: Machine::new(memory),
            input: VecDeque::new(),
            termination: None,
            steps: 0,
        }
    }

    pub fn memory(&self) -> &Memory {
        self.machine.memory()
    }

    pub fn registers(&self) -> [Word; REGISTER_COUNT] {
        self.machine.registers().to_array()
    }

    pub fn stack(&self) -> Vec<Word> {
        self.machine.stack().to_vec()
    }

    pub fn cursor(&self) -> Address {
        self.machine.cursor()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn termination(&self) -> Option<&Termination> {
        self.termination.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// Characters queued and not yet consumed by `in`.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Overwrite a register from outside the program.
    /// Returns false for an index or value out of range.
    pub fn set_register(&mut self, index: usize, val: Word) -> bool {
        if index >= REGISTER_COUNT || val > MAX_VALUE {
            return false;
        }
        self.machine.registers_mut().store(index, val);
        true
    }

    /// Queue one input character. Characters that are not a 15 bit value
    /// are dropped and false is returned.
    pub fn input(&mut self, ch: char) -> bool {
        let code = ch as u32;
        if code > MAX_VALUE as u32 {
            warn!("dropping input character {:?}; not a 15 bit value", ch);
            return false;
        }
        self.input.push_back(code as Word);
        true
    }

    /// Queue a line of input followed by a newline.
    pub fn enter(&mut self, line: &str) {
        for ch in line.chars() {
            self.input(ch);
        }
        self.input('\n');
    }

    /// Abort the run. Pending input is discarded.
    pub fn interrupt(&mut self) {
        if self.termination.is_none() {
            debug!("interrupted at {}", self.machine.cursor());
            self.termination = Some(Termination::Aborted);
            self.input.clear();
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.termination.is_some() {
            return Event::Stopped;
        }
        for _ in 0..cycles {
            if self.machine.at_end() {
                debug!("end of image at {} after {} steps", self.cursor(), self.steps);
                return self.finish(Termination::Ended, Event::Ended);
            }
            match self.machine.step(&mut self.input) {
                Ok(Step::Continue) => self.steps += 1,
                Ok(Step::Output(ch)) => {
                    self.steps += 1;
                    return Event::Output(ch);
                }
                Ok(Step::Input) => return Event::Input,
                Ok(Step::Halt) => {
                    self.steps += 1;
                    debug!("halt at {} after {} steps", self.cursor(), self.steps);
                    return self.finish(Termination::Halted, Event::Halted);
                }
                Err(error) => {
                    debug!("{}", error);
                    return self.finish(Termination::Failed(error.clone()), Event::Error(error));
                }
            }
        }
        Event::Running
    }

    fn finish(&mut self, termination: Termination, event: Event) -> Event {
        self.termination = Some(termination);
        event
    }

    /// Final state, once the run is over.
    pub fn report(&self) -> Option<Report> {
        let termination = self.termination.clone()?;
        Some(Report {
            termination,
            registers: self.registers(),
            stack: self.stack(),
            cursor: self.cursor(),
            steps: self.steps,
        })
    }
}
