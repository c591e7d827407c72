mod common;
use common::*;
use synacor::mach::Termination;

const R0: u16 = 32768;
const R1: u16 = 32769;
const R2: u16 = 32770;
const R3: u16 = 32771;
const R4: u16 = 32772;

#[test]
fn test_out() {
    let mut r = runtime(&[19, 97, 0]);
    assert_eq!(exec(&mut r), "a");
    assert_eq!(r.termination(), Some(&Termination::Halted));
}

#[test]
fn test_out_from_register() {
    let mut r = runtime(&[1, R1, 104, 19, R1, 19, 105, 0]);
    assert_eq!(exec(&mut r), "hi");
}

#[test]
fn test_set() {
    let mut r = runtime(&[1, R0, 42, 1, R1, R0, 0]);
    exec(&mut r);
    assert_eq!(&r.registers()[..2], &[42, 42]);
}

#[test]
fn test_push_pop() {
    let mut r = runtime(&[2, 5, 2, 10, 3, R0]);
    exec(&mut r);
    assert_eq!(r.registers()[0], 10);
    assert_eq!(r.stack(), vec![5]);
    assert_eq!(r.termination(), Some(&Termination::Ended));
}

#[test]
fn test_pops_in_reverse_push_order() {
    let mut r = runtime(&[2, 5, 2, 10, 2, 15, 3, R0, 3, R1, 3, R2]);
    exec(&mut r);
    assert_eq!(&r.registers()[..3], &[15, 10, 5]);
    assert!(r.stack().is_empty());
}

#[test]
fn test_eq() {
    let mut r = runtime(&[4, R0, 7, 7, 4, R1, 7, 8, 0]);
    exec(&mut r);
    assert_eq!(&r.registers()[..2], &[1, 0]);
}

#[test]
fn test_gt() {
    let mut r = runtime(&[
        5, R0, 4, 2, 5, R1, 2, 4, 5, R2, R0, R1, 5, R3, 0, R0, 5, R4, 10, 10,
    ]);
    exec(&mut r);
    assert_eq!(&r.registers()[..5], &[1, 0, 1, 0, 0]);
}

#[test]
fn test_add() {
    let mut r = runtime(&[9, R0, 4, 2]);
    exec(&mut r);
    assert_eq!(r.registers()[0], 6);
    assert_eq!(r.termination(), Some(&Termination::Ended));
}

#[test]
fn test_add_wraps() {
    let mut r = runtime(&[9, R0, 32758, 15, 0]);
    exec(&mut r);
    assert_eq!(r.registers()[0], 5);
}

#[test]
fn test_mult() {
    let mut r = runtime(&[10, R0, 300, 200, 10, R1, 6, 7, 0]);
    exec(&mut r);
    assert_eq!(r.registers()[0], (300 * 200) % 32768);
    assert_eq!(r.registers()[1], 42);
}

#[test]
fn test_mod() {
    let mut r = runtime(&[11, R0, 17, 5, 11, R1, 4, 9, 0]);
    exec(&mut r);
    assert_eq!(&r.registers()[..2], &[2, 4]);
}

#[test]
fn test_and_or() {
    let mut r = runtime(&[12, R0, 0b1100, 0b1010, 13, R1, 0b1100, 0b1010, 0]);
    exec(&mut r);
    assert_eq!(&r.registers()[..2], &[0b1000, 0b1110]);
}

#[test]
fn test_not() {
    let mut r = runtime(&[14, R0, 0x00ff, 14, R1, 0, 14, R2, 32767, 0]);
    exec(&mut r);
    assert_eq!(&r.registers()[..3], &[0x7f00, 32767, 0]);
}

#[test]
fn test_rmem() {
    let mut r = runtime(&[15, R0, 4, 0, 100]);
    exec(&mut r);
    assert_eq!(r.registers()[0], 100);
}

#[test]
fn test_rmem_beyond_image_reads_zero() {
    let mut r = runtime(&[1, R0, 9, 15, R0, 30000, 0]);
    exec(&mut r);
    assert_eq!(r.registers()[0], 0);
}

#[test]
fn test_wmem_then_rmem_beyond_image() {
    let mut r = runtime(&[1, R1, 20000, 16, R1, 77, 15, R0, R1, 0]);
    exec(&mut r);
    assert_eq!(r.registers()[0], 77);
    assert_eq!(r.memory().get(20000).unwrap(), 77);
}

#[test]
fn test_noop() {
    let mut r = runtime(&[21, 21, 19, 33, 0]);
    assert_eq!(exec(&mut r), "!");
    assert_eq!(r.steps(), 4);
}
