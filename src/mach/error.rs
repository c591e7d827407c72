use super::{Address, Word};

/// ## Machine and loader errors
///
/// Every error is fatal to the run that raised it. The optional context
/// records which instruction faulted and the word that caused it.

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    word: Option<Word>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).in_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
            .in_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            word: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn word(&self) -> Option<Word> {
        self.word
    }

    /// Attach the address of the faulting instruction.
    /// An address that is already set is kept.
    pub fn in_address(self, address: Address) -> Error {
        Error {
            address: self.address.or(Some(address)),
            ..self
        }
    }

    pub fn with_word(self, word: Word) -> Error {
        Error {
            word: Some(word),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCode {
    #[error("INVALID OPERAND")]
    InvalidOperand,
    #[error("INVALID REGISTER")]
    InvalidRegister,
    #[error("STACK UNDERFLOW")]
    StackUnderflow,
    #[error("UNKNOWN OPCODE")]
    UnknownOpcode,
    #[error("DIVISION BY ZERO")]
    DivisionByZero,
    #[error("INVALID ADDRESS")]
    InvalidAddress,
    #[error("IMAGE TOO LARGE")]
    ImageTooLarge,
    #[error("FILE NOT FOUND")]
    FileNotFound,
    #[error("SYNTAX ERROR")]
    SyntaxError,
    #[error("INTERNAL ERROR")]
    InternalError,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(word) = self.word {
            write!(f, " {}", word)?;
        }
        if let Some(address) = self.address {
            write!(f, " AT {}", address)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
