mod common;
use common::*;
use synacor::mach::{ErrorCode, Event, Termination};

const R0: u16 = 32768;

fn failure(words: &[u16]) -> (ErrorCode, Option<usize>) {
    let mut r = runtime(words);
    exec(&mut r);
    match r.termination() {
        Some(Termination::Failed(error)) => (error.code(), error.address()),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_invalid_operand() {
    assert_eq!(failure(&[21, 19, 32776]), (ErrorCode::InvalidOperand, Some(1)));
    assert_eq!(failure(&[2, 65535]), (ErrorCode::InvalidOperand, Some(0)));
}

#[test]
fn test_invalid_register() {
    assert_eq!(failure(&[1, 3, 4]), (ErrorCode::InvalidRegister, Some(0)));
    assert_eq!(failure(&[9, 32776, 1, 1]), (ErrorCode::InvalidRegister, Some(0)));
}

#[test]
fn test_pop_empty_stack() {
    assert_eq!(failure(&[3, R0]), (ErrorCode::StackUnderflow, Some(0)));
}

#[test]
fn test_ret_empty_stack_is_underflow() {
    assert_eq!(failure(&[21, 18, 0]), (ErrorCode::StackUnderflow, Some(1)));
}

#[test]
fn test_unknown_opcode() {
    assert_eq!(failure(&[21, 22]), (ErrorCode::UnknownOpcode, Some(1)));
}

#[test]
fn test_mod_by_zero() {
    assert_eq!(failure(&[11, R0, 5, 0]), (ErrorCode::DivisionByZero, Some(0)));
    assert_eq!(failure(&[11, R0, 5, R0]), (ErrorCode::DivisionByZero, Some(0)));
}

#[test]
fn test_error_message() {
    let mut r = runtime(&[19, 104, 21, 3, R0]);
    assert_eq!(exec(&mut r), "h?STACK UNDERFLOW AT 3\n");
}

#[test]
fn test_no_stepping_after_error() {
    let mut r = runtime(&[22, 19, 97]);
    match r.execute(5000) {
        Event::Error(error) => assert_eq!(error.to_string(), "UNKNOWN OPCODE 22 AT 0"),
        event => panic!("{:?}", event),
    }
    assert_eq!(r.execute(5000), Event::Stopped);
    r.input('x');
    assert_eq!(r.execute(5000), Event::Stopped);
    assert_eq!(r.cursor(), 0);
}

#[test]
fn test_register_address_above_memory() {
    // rmem r0 <- 32768 (raw word); wmem r0 1
    let mut r = runtime(&[15, R0, 6, 16, R0, 1, 32768]);
    exec(&mut r);
    match r.termination() {
        Some(Termination::Failed(error)) => {
            assert_eq!(error.code(), ErrorCode::InvalidAddress);
            assert_eq!(error.address(), Some(3));
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_call_at_top_of_memory() {
    // jmp 32766; call 2 in the last two words has no return address
    let mut words = vec![0; 32768];
    words[..2].copy_from_slice(&[6, 32766]);
    words[32766..].copy_from_slice(&[17, 2]);
    let mut r = runtime(&words);
    assert_eq!(exec(&mut r), "?INVALID ADDRESS 32768 AT 32766\n");
    assert!(r.stack().is_empty());
    assert_eq!(r.cursor(), 32766);
}
