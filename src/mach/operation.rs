use super::{Address, Opcode, Operand, Word};

/// ## A decoded instruction
///
/// Operands are kept as the raw words found in memory. They are resolved
/// only when the instruction executes, so a destination register is never
/// read by mistake.

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    address: Address,
    opcode: Opcode,
    operands: [Word; 3],
}

impl Operation {
    /// `operands` must hold exactly `opcode.arity()` words.
    pub fn new(address: Address, opcode: Opcode, operands: &[Word]) -> Operation {
        debug_assert_eq!(operands.len(), opcode.arity());
        let mut words = [0; 3];
        words[..operands.len()].copy_from_slice(operands);
        Operation {
            address,
            opcode,
            operands: words,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn arity(&self) -> usize {
        self.opcode.arity()
    }

    pub fn operands(&self) -> &[Word] {
        &self.operands[..self.arity()]
    }

    /// Words taken in memory, opcode included.
    pub fn len(&self) -> usize {
        1 + self.arity()
    }

    /// Address of the instruction that follows this one.
    pub fn next(&self) -> Address {
        self.address + self.len()
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.opcode)?;
        for (index, word) in self.operands().iter().enumerate() {
            let operand = Operand::from_word(*word);
            match (self.opcode, index, operand) {
                (Opcode::Out, 0, Operand::Literal(val)) => match printable(val) {
                    Some(ch) => write!(f, " {:?}", ch)?,
                    None => write!(f, " {}", operand)?,
                },
                _ => write!(f, " {}", operand)?,
            }
        }
        Ok(())
    }
}

fn printable(val: Word) -> Option<char> {
    match char::from_u32(val as u32) {
        Some(ch) if ch == '\n' || ch == ' ' || ch.is_ascii_graphic() => Some(ch),
        _ => None,
    }
}
