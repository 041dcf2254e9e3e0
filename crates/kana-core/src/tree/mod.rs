//! Character-keyed mapping tree.
//!
//! `MutableNode` is the build-time form: an owned tree that supports
//! insertion, sub-tree replacement, deep copies and additive merges.
//! `MappingTree` is the query-time form produced by [`MutableNode::freeze`]:
//! an immutable arena with sorted edge lists.

mod frozen;

pub use frozen::{MappingTree, NodeRef};

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutableNode {
    value: Option<String>,
    children: BTreeMap<char, MutableNode>,
}

impl MutableNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn get(&self, c: char) -> Option<&MutableNode> {
        self.children.get(&c)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &MutableNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    /// Walk `path`, creating missing nodes, and return the node it ends at.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty. Table construction never issues such a
    /// request; reaching this is a bug in the caller.
    pub fn subtree_mut(&mut self, path: &str) -> &mut MutableNode {
        assert!(!path.is_empty(), "mapping tree path must not be empty");
        let mut node = self;
        for c in path.chars() {
            node = node.children.entry(c).or_default();
        }
        node
    }

    /// Look up the node at `path` without creating anything.
    pub fn find(&self, path: &str) -> Option<&MutableNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Set the value of the node at `path`, keeping its children.
    pub fn set_value(&mut self, path: &str, value: impl Into<String>) {
        self.subtree_mut(path).value = Some(value.into());
    }

    /// Replace the whole node at `path` (value and children) with `node`.
    pub fn replace_subtree(&mut self, path: &str, node: MutableNode) {
        *self.subtree_mut(path) = node;
    }

    /// Deep copy of this node and everything below it.
    pub fn duplicate(&self) -> MutableNode {
        self.clone()
    }

    /// Copy this tree into `other`.
    ///
    /// Values present here overwrite the value at the same path in `other`.
    /// Children that `other` already has are merged recursively; missing ones
    /// are copied over. Nothing in `other` is removed.
    pub fn merge_into(&self, other: &mut MutableNode) {
        if let Some(value) = &self.value {
            other.value = Some(value.clone());
        }
        for (&c, child) in &self.children {
            match other.children.get_mut(&c) {
                Some(existing) => child.merge_into(existing),
                None => {
                    other.children.insert(c, child.duplicate());
                }
            }
        }
    }

    /// Rewrite every value in this tree in place.
    pub fn map_values(&mut self, f: &mut impl FnMut(&str) -> String) {
        if let Some(value) = &self.value {
            self.value = Some(f(value));
        }
        for child in self.children.values_mut() {
            child.map_values(f);
        }
    }

    /// Number of nodes including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(MutableNode::node_count).sum::<usize>()
    }

    pub fn freeze(&self) -> MappingTree {
        MappingTree::from_mutable(self)
    }
}
