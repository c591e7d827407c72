#![allow(dead_code)]
use synacor::mach::{Event, Memory, Runtime};

pub fn runtime(words: &[u16]) -> Runtime {
    Runtime::new(Memory::from_words(words).unwrap())
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Collects output until the program ends or waits for input.
/// Errors are appended on their own line.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Output(ch) => s.push(*ch),
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Input | Event::Halted | Event::Ended | Event::Stopped => break,
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
                break;
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

/// Words for `out` of every character in `s`.
pub fn print(s: &str) -> Vec<u16> {
    s.chars().flat_map(|ch| vec![19, ch as u16]).collect()
}
