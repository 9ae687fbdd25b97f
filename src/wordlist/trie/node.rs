use std::fmt::{Debug, Formatter};
use std::mem::replace;

use crate::alphabet::ALPHABET;

#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(Default::default)
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// A node that neither ends a word nor leads to one.
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_terminal && !self.has_children()
    }

    /// Clears the terminal flag at the end of `path`, then unlinks every node on
    /// the way back up that no longer leads to a word. Returns whether a word was
    /// removed; nothing changes when it wasn't.
    pub(crate) fn remove(&mut self, path: &[usize]) -> bool {
        match path.split_first() {
            None => replace(&mut self.is_terminal, false),
            Some((&idx, rest)) => {
                let removed = match self.children[idx].as_deref_mut() {
                    Some(child) => child.remove(rest),
                    None => return false,
                };
                if removed && self.children[idx].as_deref().map_or(false, TrieNode::is_dead) {
                    self.children[idx] = None;
                }
                removed
            }
        }
    }

    /// Pre-order, lowest letter first: extends `path` to the first word found at
    /// or below this node. `path` is left untouched when there is none.
    pub(crate) fn leftmost_word(&self, path: &mut String) -> bool {
        if self.is_terminal {
            return true;
        }
        for (letter, child) in self {
            path.push(letter);
            if child.leftmost_word(path) {
                return true;
            }
            path.pop();
        }
        false
    }

    pub(crate) fn count_nodes(&self) -> usize {
        self.into_iter().map(|(_, child)| child.count_nodes()).sum::<usize>() + 1
    }

    /// Whether any dead node hangs below this one.
    pub(crate) fn has_dead_branch(&self) -> bool {
        self.into_iter().any(|(_, child)| child.is_dead() || child.has_dead_branch())
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.into_iter()
                .map(|(letter, _)| letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::letter_indices;
    use crate::wordlist::trie::node::TrieNode;

    fn insert(root: &mut TrieNode, word: &str) {
        let mut node = root;
        for idx in letter_indices(word).unwrap() {
            node = node.get_or_create_child(idx);
        }
        node.is_terminal = true;
    }

    #[test]
    fn remove_prunes_only_the_unshared_tail() {
        let mut root = TrieNode::default();
        insert(&mut root, "cat");
        insert(&mut root, "cater");
        insert(&mut root, "camel");
        assert_eq!(root.count_nodes(), 9);

        assert!(root.remove(&letter_indices("cater").unwrap()));
        // c, a, t, m, e, l + root
        assert_eq!(root.count_nodes(), 7);
        assert!(!root.has_dead_branch());

        assert!(root.remove(&letter_indices("camel").unwrap()));
        assert_eq!(root.count_nodes(), 4);

        assert!(root.remove(&letter_indices("cat").unwrap()));
        assert_eq!(root.count_nodes(), 1);
        assert!(!root.has_children());
    }

    #[test]
    fn remove_of_a_bare_prefix_changes_nothing() {
        let mut root = TrieNode::default();
        insert(&mut root, "cater");
        assert!(!root.remove(&letter_indices("cat").unwrap()));
        assert!(!root.remove(&letter_indices("caterpillar").unwrap()));
        assert!(!root.remove(&letter_indices("dog").unwrap()));
        assert_eq!(root.count_nodes(), 6);
    }

    #[test]
    fn leftmost_word_is_preorder() {
        let mut root = TrieNode::default();
        insert(&mut root, "cats");
        insert(&mut root, "cab");
        insert(&mut root, "cat");

        let mut path = String::new();
        assert!(root.leftmost_word(&mut path));
        assert_eq!(path, "cab");

        let t = root.get_child(2).unwrap().get_child(0).unwrap().get_child(19).unwrap();
        let mut path = "cat".to_string();
        assert!(t.leftmost_word(&mut path));
        assert_eq!(path, "cat");

        let mut path = String::from("x");
        assert!(!TrieNode::default().leftmost_word(&mut path));
        assert_eq!(path, "x");
    }
}
