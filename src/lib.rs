//! # Synacor VM
//!
//! A virtual machine for the 15-bit Synacor architecture.
//!
//! Programs are raw images of little-endian 16-bit words. Run one from a
//! terminal with `synacor challenge.bin`. Type at the prompt when the
//! program asks for input. A line starting with `~` is a debug command
//! instead, see [`term::Command`].
//!
//! Embedding the machine takes two calls. [`mach::Runtime::execute`] runs
//! until something needs the host and [`mach::Runtime::enter`] supplies input:
//! ```
//! use synacor::mach::{Event, Memory, Runtime};
//!
//! let memory = Memory::from_words(&[20, 32768, 19, 32768, 0]).unwrap();
//! let mut runtime = Runtime::new(memory);
//! assert_eq!(runtime.execute(100), Event::Input);
//! runtime.input('x');
//! assert_eq!(runtime.execute(100), Event::Output('x'));
//! assert_eq!(runtime.execute(100), Event::Halted);
//! ```

#[path = "doc/architecture.rs"]
#[allow(non_snake_case)]
pub mod _Architecture;

pub mod log;
pub mod mach;
pub mod term;
