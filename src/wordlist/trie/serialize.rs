use std::fmt::Formatter;

use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alphabet::get_idx;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::Trie;

/// One node of the flattened tree. Records come in pre-order, so a node's
/// parent is the closest earlier record one level up.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
struct NodeRecord {
    depth: usize,
    letter: char,
    terminal: bool,
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut records = vec![];
        self.root.traverse_prefix(&mut |depth, letter, node| records.push(NodeRecord {
            depth,
            letter,
            terminal: node.is_terminal,
        }));

        let mut seq = serializer.serialize_seq(Some(records.len()))?;
        for record in &records {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_seq(DeserializeTrieVisitor {})
    }
}

struct DeserializeTrieVisitor {}

impl<'de> Visitor<'de> for DeserializeTrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a pre-order sequence of trie nodes")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error> where A: SeqAccess<'de> {
        let mut root = TrieNode::default();
        let mut path: Vec<usize> = vec![];

        while let Some(record) = seq.next_element::<NodeRecord>()? {
            if record.depth == 0 || record.depth > path.len() + 1 {
                return Err(A::Error::custom(format!(
                    "node {:?} at depth {} has no parent", record.letter, record.depth)));
            }
            let idx = get_idx(record.letter)
                .filter(|_| record.letter.is_ascii_lowercase())
                .ok_or_else(|| A::Error::custom(format!("invalid letter {:?}", record.letter)))?;

            path.truncate(record.depth - 1);
            path.push(idx);
            let node = path.iter().fold(&mut root, |node, &idx| node.get_or_create_child(idx));
            node.is_terminal |= record.terminal;
        }

        if root.has_dead_branch() {
            return Err(A::Error::custom("branch without a word"));
        }
        Ok(Trie::from_root(root))
    }
}
