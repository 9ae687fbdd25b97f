pub mod alphabet;
pub mod boggle;
pub mod error;
pub mod wordlist;

pub use crate::boggle::board::Board;
pub use crate::boggle::solver::{find_valid_words, find_valid_words_parallel, Solver};
pub use crate::error::{Error, Result};
pub use crate::wordlist::index::Index;
pub use crate::wordlist::trie::Trie;
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};
