use crate::error;
use crate::mach::{Address, Error, Listing, Runtime, Word, REGISTER_COUNT};

type Result<T> = std::result::Result<T, Error>;

const LIST_LINES: usize = 10;

/// ## Debug commands
///
/// Typed at an input prompt with a leading `~`. They never reach the program.
///
/// ```text
/// ~            same as ~state
/// ~state       cursor, registers and stack
/// ~list [ADDR] [COUNT]
/// ~set REG VALUE
/// ~quit
/// ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    State,
    List(Option<Address>, usize),
    Set(usize, Word),
    Quit,
}

impl Command {
    /// `s` is the line with the leading `~` removed.
    pub fn parse(s: &str) -> Result<Command> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or("state").to_ascii_lowercase();
        let args: Vec<&str> = words.collect();
        match (name.as_str(), args.as_slice()) {
            ("state", []) => Ok(Command::State),
            ("list", []) => Ok(Command::List(None, LIST_LINES)),
            ("list", [addr]) => Ok(Command::List(Some(number(addr)?), LIST_LINES)),
            ("list", [addr, count]) => Ok(Command::List(Some(number(addr)?), number(count)?)),
            ("set", [reg, val]) => {
                let reg = register(reg)?;
                let val = number(val)?;
                if val > crate::mach::MAX_VALUE as usize {
                    return Err(error!(SyntaxError; "VALUE OUT OF RANGE"));
                }
                Ok(Command::Set(reg, val as Word))
            }
            ("quit", []) => Ok(Command::Quit),
            _ => Err(error!(SyntaxError; format!("~{}", s.trim()))),
        }
    }

    /// Apply to `runtime`, returning the text to show.
    pub fn execute(&self, runtime: &mut Runtime) -> String {
        match self {
            Command::State => state(runtime),
            Command::List(start, count) => {
                let start = start.unwrap_or_else(|| runtime.cursor());
                Listing::lines(runtime.memory(), start, *count)
            }
            Command::Set(reg, val) => {
                runtime.set_register(*reg, *val);
                format!("R{} = {}\n", reg, val)
            }
            Command::Quit => {
                runtime.interrupt();
                String::new()
            }
        }
    }
}

fn state(runtime: &Runtime) -> String {
    let mut s = format!("cursor {} steps {}\n", runtime.cursor(), runtime.steps());
    for (index, val) in runtime.registers().iter().enumerate() {
        s.push_str(&format!("R{}={} ", index, val));
    }
    s.push('\n');
    s.push_str(&format!("stack {:?}\n", runtime.stack()));
    s
}

fn number(s: &str) -> Result<usize> {
    let parsed = match s.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse::<usize>(),
    };
    parsed.map_err(|_| error!(SyntaxError; format!("BAD NUMBER {}", s)))
}

/// `R3`, `r3` or `3`.
fn register(s: &str) -> Result<usize> {
    let digits = s.trim_start_matches(|c| c == 'r' || c == 'R');
    match digits.parse::<usize>() {
        Ok(index) if index < REGISTER_COUNT => Ok(index),
        _ => Err(error!(SyntaxError; format!("BAD REGISTER {}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::Memory;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Ok(Command::State));
        assert_eq!(Command::parse("STATE"), Ok(Command::State));
        assert_eq!(Command::parse("list"), Ok(Command::List(None, 10)));
        assert_eq!(Command::parse("list 0x10 3"), Ok(Command::List(Some(16), 3)));
        assert_eq!(Command::parse("set r7 25734"), Ok(Command::Set(7, 25734)));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("set r8 1").is_err());
        assert!(Command::parse("set r0 32768").is_err());
        assert!(Command::parse("list x").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_set_and_state() {
        let mut r = Runtime::new(Memory::from_words(&[21, 0]).unwrap());
        Command::Set(7, 42).execute(&mut r);
        assert_eq!(r.registers()[7], 42);
        let s = Command::State.execute(&mut r);
        assert!(s.starts_with("cursor 0 steps 0\n"));
        assert!(s.contains("R7=42"));
    }

    #[test]
    fn test_list_from_cursor() {
        let mut r = Runtime::new(Memory::from_words(&[19, 97, 0]).unwrap());
        let s = Command::List(None, 2).execute(&mut r);
        assert_eq!(s, "    0: OUT 'a'\n    2: HALT\n");
    }

    #[test]
    fn test_quit_interrupts() {
        let mut r = Runtime::new(Memory::from_words(&[20, 32768]).unwrap());
        Command::Quit.execute(&mut r);
        assert!(r.is_finished());
    }
}
