/*!
## Rust Machine Module

This Rust module is the virtual machine: memory, registers, stack,
the decoder, the instruction set and the run loop.

*/

pub type Address = usize;
pub type Word = u16;

/// Arithmetic is taken modulo this; it is also the first register reference.
pub const MODULUS: Word = 32768;
pub const MAX_VALUE: Word = MODULUS - 1;
pub const REGISTER_COUNT: usize = 8;
pub const MEMORY_SIZE: usize = MODULUS as usize;

mod error;
mod decode;
mod driver;
mod exec;
mod listing;
mod machine;
mod memory;
mod opcode;
mod operand;
mod operation;
mod registers;
mod runtime;
mod stack;

pub use decode::decode;
pub use driver::run;
pub use driver::InputPort;
pub use driver::LineInput;
pub use error::Error;
pub use error::ErrorCode;
pub use exec::Step;
pub use listing::Listing;
pub use machine::Machine;
pub use memory::Memory;
pub use opcode::Opcode;
pub use operand::Operand;
pub use operation::Operation;
pub use registers::Registers;
pub use runtime::Event;
pub use runtime::Report;
pub use runtime::Runtime;
pub use runtime::Termination;
pub use stack::Stack;

#[cfg(test)]
mod tests;
