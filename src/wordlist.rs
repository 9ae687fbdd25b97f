pub mod index;
pub mod trie;
pub mod wordlist;
