use super::{Address, Machine, Opcode, Operand, Operation, Word, MAX_VALUE, MODULUS};
use crate::error;
use crate::mach::Error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// Outcome of a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Output(char),
    /// `in` found no queued character. The instruction was not applied.
    Input,
    Halt,
}

impl Machine {
    /// Apply `op` to the machine.
    ///
    /// Destinations are validated and sources resolved before anything is
    /// written, so a failing instruction leaves the machine as it found it.
    pub fn execute(&mut self, op: &Operation, input: &mut VecDeque<Word>) -> Result<Step> {
        use Opcode::*;
        let args = op.operands();
        let mut next: Address = op.next();
        let mut step = Step::Continue;
        match op.opcode() {
            Halt => return Ok(Step::Halt),
            Set => {
                let dst = Operand::register(args[0])?;
                let val = self.value(args[1])?;
                self.registers.store(dst, val);
            }
            Push => {
                let val = self.value(args[0])?;
                self.stack.push(val);
            }
            Pop => {
                let dst = Operand::register(args[0])?;
                let val = self.stack.pop()?;
                self.registers.store(dst, val);
            }
            Eq => self.binary(args, |b, c| Ok((b == c) as Word))?,
            Gt => self.binary(args, |b, c| Ok((b > c) as Word))?,
            Jmp => next = self.value(args[0])? as Address,
            Jt => {
                if self.value(args[0])? != 0 {
                    next = self.value(args[1])? as Address;
                }
            }
            Jf => {
                if self.value(args[0])? == 0 {
                    next = self.value(args[1])? as Address;
                }
            }
            Add => self.binary(args, |b, c| Ok(add(b, c)))?,
            Mult => self.binary(args, |b, c| Ok(mult(b, c)))?,
            Mod => self.binary(args, |b, c| {
                if c == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Ok(b % c)
                }
            })?,
            And => self.binary(args, |b, c| Ok(b & c))?,
            Or => self.binary(args, |b, c| Ok(b | c))?,
            Not => {
                let dst = Operand::register(args[0])?;
                let val = self.value(args[1])?;
                self.registers.store(dst, not(val));
            }
            Rmem => {
                let dst = Operand::register(args[0])?;
                let address = self.value(args[1])? as Address;
                let word = self.memory.get(address)?;
                self.registers.store(dst, word);
            }
            Wmem => {
                let address = self.value(args[0])? as Address;
                let val = self.value(args[1])?;
                self.memory.set(address, val)?;
            }
            Call => {
                let target = self.value(args[0])? as Address;
                let ret = op.next();
                if ret > MAX_VALUE as Address {
                    return Err(error!(InvalidAddress).with_word(ret as Word));
                }
                self.stack.push(ret as Word);
                next = target;
            }
            Ret => next = self.stack.pop()? as Address,
            Out => {
                let val = self.value(args[0])?;
                let ch = char::from_u32(val as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
                step = Step::Output(ch);
            }
            In => {
                let dst = Operand::register(args[0])?;
                match input.pop_front() {
                    Some(word) => self.registers.store(dst, word),
                    None => return Ok(Step::Input),
                }
            }
            Noop => {}
        }
        self.cursor = next;
        Ok(step)
    }

    fn value(&self, raw: Word) -> Result<Word> {
        self.registers.resolve(raw)
    }

    fn binary<F>(&mut self, args: &[Word], f: F) -> Result<()>
    where
        F: Fn(Word, Word) -> Result<Word>,
    {
        let dst = Operand::register(args[0])?;
        let val = f(self.value(args[1])?, self.value(args[2])?)?;
        self.registers.store(dst, val);
        Ok(())
    }
}

pub fn add(b: Word, c: Word) -> Word {
    ((b as u32 + c as u32) % MODULUS as u32) as Word
}

pub fn mult(b: Word, c: Word) -> Word {
    ((b as u32 * c as u32) % MODULUS as u32) as Word
}

/// Complement within 15 bits.
pub fn not(val: Word) -> Word {
    !val & (MODULUS - 1)
}
