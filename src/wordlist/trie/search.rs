use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    pub(crate) fn get_node(&self, path: &[usize]) -> Option<&TrieNode> {
        path.iter().try_fold(&self.root, |node, &idx| node.get_child(idx))
    }

    /// Follows `path` as far as the tree allows, returning the last node reached
    /// and how many letters of `path` it spells.
    pub(crate) fn longest_prefix(&self, path: &[usize]) -> (&TrieNode, usize) {
        let mut current = &self.root;
        for (matched, &idx) in path.iter().enumerate() {
            match current.get_child(idx) {
                Some(child) => current = child,
                None => return (current, matched),
            }
        }
        (current, path.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::letter_indices;
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::Trie;

    #[test]
    fn longest_prefix_stops_at_first_missing_letter() {
        let mut trie = Trie::new();
        trie.add_all(["cater", "camel"]).unwrap();

        let (node, matched) = trie.longest_prefix(&letter_indices("catalog").unwrap());
        assert_eq!(matched, 3);
        assert!(!node.is_terminal);

        let (_, matched) = trie.longest_prefix(&letter_indices("cater").unwrap());
        assert_eq!(matched, 5);

        let (node, matched) = trie.longest_prefix(&letter_indices("zoo").unwrap());
        assert_eq!(matched, 0);
        assert!(std::ptr::eq(node, &trie.root));
    }

    #[test]
    fn get_node_needs_the_whole_path() {
        let mut trie = Trie::new();
        trie.add("cater").unwrap();
        assert!(trie.get_node(&letter_indices("cat").unwrap()).is_some());
        assert!(trie.get_node(&letter_indices("cats").unwrap()).is_none());
        assert!(trie.get_node(&[]).is_some());
    }
}
