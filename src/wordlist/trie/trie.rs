use std::fmt::{Debug, Display, Formatter};
use std::mem::replace;

use crate::alphabet::{letter_indices, normalize};
use crate::error::Result;
use crate::wordlist::index::Index;
use crate::wordlist::trie::node::TrieNode;

/// A 26-ary prefix tree over the letters a-z.
#[derive(Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Default::default()
    }

    pub(crate) fn from_root(root: TrieNode) -> Self {
        let mut len = usize::from(root.is_terminal);
        root.traverse_prefix(&mut |_, _, node| len += usize::from(node.is_terminal));
        Trie { root, len }
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Every stored word in alphabetical order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        if self.root.is_terminal {
            words.push(String::new());
        }
        let mut path = String::new();
        self.root.traverse_prefix(&mut |depth, letter, node| {
            path.truncate(depth - 1);
            path.push(letter);
            if node.is_terminal {
                words.push(path.clone());
            }
        });
        words
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> Result<()> {
        let mut current = &mut self.root;
        for idx in letter_indices(word)? {
            current = current.get_or_create_child(idx);
        }
        if !replace(&mut current.is_terminal, true) {
            self.len += 1;
        }
        Ok(())
    }

    fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.get_node(&letter_indices(word)?)
            .map_or(false, |x| x.is_terminal))
    }

    fn contains_prefix(&self, prefix: &str) -> Result<bool> {
        Ok(self.get_node(&letter_indices(prefix)?)
            .map_or(false, |x| !x.is_dead()))
    }

    fn delete(&mut self, word: &str) -> Result<bool> {
        let removed = self.root.remove(&letter_indices(word)?);
        if removed {
            self.len -= 1;
        }
        Ok(removed)
    }

    fn suggest(&self, word: &str) -> Result<Option<String>> {
        let path = letter_indices(word)?;
        let (node, matched) = self.longest_prefix(&path);
        // A stored word is its own leftmost completion.
        let mut suggestion = normalize(&word[..matched]);
        let found = node.leftmost_word(&mut suggestion);
        Ok(found.then(|| suggestion))
    }
}

impl Display for Trie {
    /// One node per line, pre-order, children alphabetical: the letter on the
    /// incoming edge indented by one space per level below the top, then `*`
    /// if a word ends there.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn write_children(f: &mut Formatter<'_>, node: &TrieNode, indent: usize) -> std::fmt::Result {
            for (letter, child) in node {
                writeln!(f, "{:indent$}{}{}", "", letter,
                         if child.is_terminal { "*" } else { "" }, indent = indent)?;
                write_children(f, child, indent + 1)?;
            }
            Ok(())
        }
        write_children(f, &self.root, 0)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("words", &self.words())
            .finish()
    }
}
