/*!
# Architecture

The machine has three kinds of storage and nothing else.

 * Memory of 32768 words, each 16 bits. Addresses are word addresses.
 * Eight registers, 16 bits each.
 * A stack of values with no size limit.

All numbers are 15 bits. A word from 0 to 32767 in an operand is a literal
value. The words 32768 to 32775 name registers 0 to 7, and as a source they
mean the value held in that register. Any larger word is invalid as an operand.
Arithmetic is modulo 32768.

```text
 0 halt              11 mod  a b c
 1 set  a b          12 and  a b c
 2 push a            13 or   a b c
 3 pop  a            14 not  a b
 4 eq   a b c        15 rmem a b
 5 gt   a b c        16 wmem a b
 6 jmp  a            17 call a
 7 jt   a b          18 ret
 8 jf   a b          19 out  a
 9 add  a b c        20 in   a
10 mult a b c        21 noop
```

Where an instruction writes a result, `a` must name a register. It is never
read. `wmem` is the exception: its `a` is an address and is resolved like any
other source, so a register may hold the address.

## Programs

A program image is copied into memory at address zero. The rest of memory
is zero. Execution starts at zero with empty registers and stack.

Programs may write over their own instructions with `wmem`. Every instruction
is decoded from memory right before it runs, so a patched instruction takes
effect the next time it is reached, even when that is the very next one.

## Ending

A run ends in one of four ways.

 * `halt` executes.
 * The cursor reaches the word just past the loaded image. This is a normal
   end, reported separately from `halt`.
 * An error. Invalid operands and registers, popping or returning with an
   empty stack, an unknown opcode and `mod` by zero are all fatal.
 * The host interrupts it, with Ctrl-C or the `~quit` command.

`ret` with an empty stack is an error like `pop`, not a quiet `halt`.
A `call` in the last two words of memory has no return address that fits
in a value and fails with an invalid address before anything is pushed.

## Input and output

`out` writes one character. `in` reads one character into a register.
When nothing has been typed yet the machine stops before `in` and waits,
with every register, the stack and the cursor as they were. Typing a line
queues its characters and a newline, and `in` takes them one at a time.

```text
What do you do?
take tablet
```

*/
