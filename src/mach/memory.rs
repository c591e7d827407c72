use super::{Address, Word, MEMORY_SIZE};
use crate::mach::Error;
use crate::{error, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Program memory
///
/// Always the full 32768 word address space. The image is copied to
/// address zero and the rest is zero-filled, so `wmem` and `rmem` can
/// reach any address a value can name. The image length is kept since
/// running into it is a normal end of the program.

#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<Word>,
    loaded: usize,
}

impl Default for Memory {
    fn default() -> Self {
        Memory {
            cells: vec![0; MEMORY_SIZE],
            loaded: 0,
        }
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory {{ loaded: {} }}", self.loaded)
    }
}

impl Memory {
    pub fn from_words(words: &[Word]) -> Result<Memory> {
        if words.len() > MEMORY_SIZE {
            return Err(error!(ImageTooLarge; format!("{} WORDS", words.len())));
        }
        let mut memory = Memory::default();
        memory.cells[..words.len()].copy_from_slice(words);
        memory.loaded = words.len();
        Ok(memory)
    }

    /// Little-endian word pairs, no header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Memory> {
        if bytes.len() % 2 != 0 {
            warn!("image has {} bytes; ignoring the trailing byte", bytes.len());
        }
        let words: Vec<Word> = bytes
            .chunks_exact(2)
            .map(|pair| Word::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Memory::from_words(&words)
    }

    /// Number of words in the loaded image.
    pub fn loaded_len(&self) -> usize {
        self.loaded
    }

    pub fn get(&self, address: Address) -> Result<Word> {
        match self.cells.get(address) {
            Some(word) => Ok(*word),
            None => Err(error!(InvalidAddress).with_word(address as Word)),
        }
    }

    pub fn set(&mut self, address: Address, word: Word) -> Result<()> {
        match self.cells.get_mut(address) {
            Some(cell) => {
                *cell = word;
                Ok(())
            }
            None => Err(error!(InvalidAddress).with_word(address as Word)),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.cells
    }
}
