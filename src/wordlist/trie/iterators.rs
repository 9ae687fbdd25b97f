use crate::alphabet::{ALPHABET, get_letter};
use crate::wordlist::trie::node::TrieNode;

/// Walks the children of a node in ascending letter order.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = (char, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < ALPHABET.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.get_child(idx) {
                return Some((get_letter(idx), child));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, &'a TrieNode);
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self }
    }
}
