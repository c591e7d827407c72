use crate::mach::{Event, Memory, Runtime};

mod operand_test;

fn runtime(words: &[u16]) -> Runtime {
    Runtime::new(Memory::from_words(words).unwrap())
}

/// Run until anything but output, collecting the output.
fn run(runtime: &mut Runtime) -> (String, Event) {
    let mut s = String::new();
    loop {
        match runtime.execute(5000) {
            Event::Output(ch) => s.push(ch),
            Event::Running => continue,
            event => return (s, event),
        }
    }
}
