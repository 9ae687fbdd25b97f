pub mod trie;

mod iterators;
mod node;
mod search;
mod serialize;
mod traverse;

pub use trie::Trie;
