use super::{Operand, Word, REGISTER_COUNT};
use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    slots: [Word; REGISTER_COUNT],
}

impl Registers {
    pub fn new() -> Registers {
        Registers::default()
    }

    /// Panics on an index of 8 or more; callers hold indexes from `Operand`.
    pub fn get(&self, index: usize) -> Word {
        self.slots[index]
    }

    pub fn store(&mut self, index: usize, val: Word) {
        self.slots[index] = val;
    }

    pub fn resolve(&self, raw: Word) -> Result<Word> {
        Operand::resolve(raw, self)
    }

    pub fn to_array(&self) -> [Word; REGISTER_COUNT] {
        self.slots
    }
}
