use super::{Registers, Word, MAX_VALUE, MODULUS, REGISTER_COUNT};
use crate::error;
use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Raw operand word, classified
///
/// Words up to 32767 are literal values. The next eight words name the
/// registers. Anything above that is not a legal operand.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Literal(Word),
    Register(usize),
    Invalid(Word),
}

impl Operand {
    pub fn from_word(raw: Word) -> Operand {
        if raw <= MAX_VALUE {
            Operand::Literal(raw)
        } else if ((raw - MODULUS) as usize) < REGISTER_COUNT {
            Operand::Register((raw - MODULUS) as usize)
        } else {
            Operand::Invalid(raw)
        }
    }

    /// Value of an operand used as a source.
    pub fn resolve(raw: Word, registers: &Registers) -> Result<Word> {
        match Operand::from_word(raw) {
            Operand::Literal(val) => Ok(val),
            Operand::Register(index) => Ok(registers.get(index)),
            Operand::Invalid(raw) => Err(error!(InvalidOperand).with_word(raw)),
        }
    }

    /// Register index of an operand used as a destination. Never dereferenced.
    pub fn register(raw: Word) -> Result<usize> {
        match Operand::from_word(raw) {
            Operand::Register(index) => Ok(index),
            _ => Err(error!(InvalidRegister).with_word(raw)),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operand::Literal(val) => write!(f, "{}", val),
            Operand::Register(index) => write!(f, "R{}", index),
            Operand::Invalid(raw) => write!(f, "?{}", raw),
        }
    }
}
