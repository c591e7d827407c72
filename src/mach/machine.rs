use super::{decode, Address, Memory, Registers, Stack, Step, Word};
use crate::mach::Error;
use crate::trace;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Complete machine state for one run
///
/// Owned by a single `Runtime`; nothing here is shared between runs.

#[derive(Debug, Clone)]
pub struct Machine {
    pub(super) memory: Memory,
    pub(super) registers: Registers,
    pub(super) stack: Stack<Word>,
    pub(super) cursor: Address,
}

impl Machine {
    pub fn new(memory: Memory) -> Machine {
        Machine {
            memory,
            registers: Registers::new(),
            stack: Stack::new(),
            cursor: 0,
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn stack(&self) -> &Stack<Word> {
        &self.stack
    }

    pub fn cursor(&self) -> Address {
        self.cursor
    }

    /// True once the cursor sits on the first word past the loaded image.
    pub fn at_end(&self) -> bool {
        self.cursor == self.memory.loaded_len()
    }

    /// Decode and execute one instruction. On `Step::Input` nothing changed
    /// and the same instruction will be decoded again.
    pub fn step(&mut self, input: &mut VecDeque<Word>) -> Result<Step> {
        let cursor = self.cursor;
        let op = decode(&self.memory, cursor).map_err(|error| error.in_address(cursor))?;
        trace!("{:>5}  {}", op.address(), op);
        self.execute(&op, input)
            .map_err(|error| error.in_address(cursor))
    }
}
