use super::{decode, Address, Memory, MEMORY_SIZE};

/// ## Disassembly of memory
///
/// Iterates instructions from a start address. A word that does not decode
/// is listed as `DATA` and the listing moves on by one word.

#[derive(Debug, Clone)]
pub struct Listing<'a> {
    memory: &'a Memory,
    cursor: Address,
}

impl<'a> Listing<'a> {
    pub fn new(memory: &'a Memory, start: Address) -> Listing<'a> {
        Listing {
            memory,
            cursor: start,
        }
    }

    /// `count` lines starting at `start`, one per line.
    pub fn lines(memory: &'a Memory, start: Address, count: usize) -> String {
        let mut s = String::new();
        for (address, text) in Listing::new(memory, start).take(count) {
            s.push_str(&format!("{:>5}: {}\n", address, text));
        }
        s
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = (Address, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= MEMORY_SIZE {
            return None;
        }
        let address = self.cursor;
        match decode(self.memory, address) {
            Ok(op) => {
                self.cursor = op.next();
                Some((address, op.to_string()))
            }
            Err(_) => {
                self.cursor += 1;
                let word = self.memory.get(address).unwrap_or_default();
                Some((address, format!("DATA {}", word)))
            }
        }
    }
}
