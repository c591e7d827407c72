use super::Word;

/// ## Virtual machine instruction set
///
/// Twenty-two instructions, numbered by their position below.
/// Operands are raw words that follow the opcode in memory:
/// a destination names a register, every other operand is resolved
/// to a value when the instruction executes.
///
/// For example: `[9, 32768, 32769, 4]` is `ADD R0 R1 4`.

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Stop execution.
    Halt,
    /// `a = b`
    Set,
    /// Push `a` on to the stack.
    Push,
    /// Pop the stack into `a`. Empty stack is an error.
    Pop,
    /// `a = 1` if `b == c` else `0`
    Eq,
    /// `a = 1` if `b > c` else `0`
    Gt,
    /// Jump to `a`.
    Jmp,
    /// Jump to `b` if `a` is not zero.
    Jt,
    /// Jump to `b` if `a` is zero.
    Jf,
    /// `a = (b + c) % 32768`
    Add,
    /// `a = (b * c) % 32768`
    Mult,
    /// `a = b % c`
    Mod,
    /// `a = b & c`
    And,
    /// `a = b | c`
    Or,
    /// `a` is the 15 bit complement of `b`.
    Not,
    /// Read memory at address `b` into `a`.
    Rmem,
    /// Write `b` into memory at address `a`.
    Wmem,
    /// Push the address of the next instruction then jump to `a`.
    Call,
    /// Pop the stack and jump to it. Empty stack is an error.
    Ret,
    /// Write the character `a`.
    Out,
    /// Read one character into `a`.
    In,
    Noop,
}

const OPCODES: [Opcode; 22] = {
    use Opcode::*;
    [
        Halt, Set, Push, Pop, Eq, Gt, Jmp, Jt, Jf, Add, Mult, Mod, And, Or, Not, Rmem, Wmem, Call,
        Ret, Out, In, Noop,
    ]
};

impl Opcode {
    pub fn from_word(word: Word) -> Option<Opcode> {
        OPCODES.get(word as usize).copied()
    }

    pub fn word(self) -> Word {
        self as Word
    }

    /// Number of operand words following the opcode.
    pub fn arity(self) -> usize {
        use Opcode::*;
        match self {
            Halt | Ret | Noop => 0,
            Push | Pop | Jmp | Call | Out | In => 1,
            Set | Jt | Jf | Not | Rmem | Wmem => 2,
            Eq | Gt | Add | Mult | Mod | And | Or => 3,
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Halt => write!(f, "HALT"),
            Set => write!(f, "SET"),
            Push => write!(f, "PUSH"),
            Pop => write!(f, "POP"),
            Eq => write!(f, "EQ"),
            Gt => write!(f, "GT"),
            Jmp => write!(f, "JMP"),
            Jt => write!(f, "JT"),
            Jf => write!(f, "JF"),
            Add => write!(f, "ADD"),
            Mult => write!(f, "MULT"),
            Mod => write!(f, "MOD"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Not => write!(f, "NOT"),
            Rmem => write!(f, "RMEM"),
            Wmem => write!(f, "WMEM"),
            Call => write!(f, "CALL"),
            Ret => write!(f, "RET"),
            Out => write!(f, "OUT"),
            In => write!(f, "IN"),
            Noop => write!(f, "NOOP"),
        }
    }
}
