use super::{Address, Memory, Opcode, Operation, Word};
use crate::error;
use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

/// Decode the instruction at `cursor`.
///
/// Memory is read every time; `wmem` may have rewritten these words since
/// they were last executed.
pub fn decode(memory: &Memory, cursor: Address) -> Result<Operation> {
    let word = memory.get(cursor)?;
    let opcode = match Opcode::from_word(word) {
        Some(opcode) => opcode,
        None => return Err(error!(UnknownOpcode, cursor).with_word(word)),
    };
    let mut operands: [Word; 3] = [0; 3];
    for (index, operand) in operands.iter_mut().take(opcode.arity()).enumerate() {
        *operand = memory
            .get(cursor + 1 + index)
            .map_err(|error| error.in_address(cursor))?;
    }
    Ok(Operation::new(cursor, opcode, &operands[..opcode.arity()]))
}
