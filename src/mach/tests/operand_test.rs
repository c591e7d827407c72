use crate::mach::{ErrorCode, Operand, Registers};

#[test]
fn test_literals_resolve_to_themselves() {
    let registers = Registers::new();
    for v in [0u16, 1, 97, 16384, 32767].iter() {
        assert_eq!(Operand::resolve(*v, &registers).unwrap(), *v);
    }
}

#[test]
fn test_registers_resolve_to_contents() {
    let mut registers = Registers::new();
    for index in 0..8 {
        registers.store(index, 100 + index as u16);
    }
    for raw in 32768..=32775u16 {
        assert_eq!(registers.resolve(raw).unwrap(), raw - 32768 + 100);
    }
}

#[test]
fn test_invalid_operand() {
    let registers = Registers::new();
    let error = registers.resolve(32776).unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidOperand);
    assert_eq!(error.word(), Some(32776));
    assert!(registers.resolve(u16::MAX).is_err());
}

#[test]
fn test_destination_must_be_register() {
    assert_eq!(Operand::register(32771).unwrap(), 3);
    assert_eq!(Operand::register(32775).unwrap(), 7);
    let error = Operand::register(5).unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidRegister);
    assert_eq!(error.word(), Some(5));
    assert_eq!(
        Operand::register(32776).unwrap_err().code(),
        ErrorCode::InvalidRegister
    );
}

#[test]
fn test_operand_display() {
    assert_eq!(Operand::from_word(12).to_string(), "12");
    assert_eq!(Operand::from_word(32772).to_string(), "R4");
    assert_eq!(Operand::from_word(40000).to_string(), "?40000");
}
