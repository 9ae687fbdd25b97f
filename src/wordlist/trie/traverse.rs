use crate::wordlist::trie::node::TrieNode;

impl TrieNode {
    /// Calls `f(depth, letter, node)` for every node below this one, parents
    /// before children, children in letter order. Direct children are depth 1.
    pub(crate) fn traverse_prefix<'f, F>(&'f self, f: &mut F)
        where F: FnMut(usize, char, &'f TrieNode) {
        self.traverse_prefix_from(1, f)
    }

    fn traverse_prefix_from<'f, F>(&'f self, depth: usize, f: &mut F)
        where F: FnMut(usize, char, &'f TrieNode) {
        for (letter, child) in self {
            f(depth, letter, child);
            child.traverse_prefix_from(depth + 1, f);
        }
    }
}
