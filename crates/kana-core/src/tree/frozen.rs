use super::MutableNode;

struct FrozenNode {
    value: Option<Box<str>>,
    /// Sorted by key for binary search.
    children: Box<[(char, u32)]>,
}

/// Immutable mapping tree stored as a flat arena. Node 0 is the root.
pub struct MappingTree {
    nodes: Vec<FrozenNode>,
}

impl MappingTree {
    pub(super) fn from_mutable(root: &MutableNode) -> Self {
        let mut tree = MappingTree {
            nodes: Vec::with_capacity(root.node_count()),
        };
        tree.push(root);
        tree
    }

    /// Append `node` and its descendants, returning its index.
    fn push(&mut self, node: &MutableNode) -> u32 {
        let index = self.nodes.len();
        self.nodes.push(FrozenNode {
            value: node.value().map(Box::from),
            children: Box::new([]),
        });
        // BTreeMap iteration keeps the edge list sorted.
        let children: Vec<(char, u32)> = node
            .children()
            .map(|(c, child)| (c, self.push(child)))
            .collect();
        self.nodes[index].children = children.into_boxed_slice();
        index as u32
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            index: 0,
        }
    }

    /// Look up the node reached by following `path` from the root.
    pub fn find(&self, path: &str) -> Option<NodeRef<'_>> {
        path.chars().try_fold(self.root(), |node, c| node.get(c))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.nodes[0].children.is_empty() && self.nodes[0].value.is_none()
    }

    /// Mutable copy of this tree, for extending a frozen table.
    pub fn thaw(&self) -> MutableNode {
        self.root().thaw()
    }
}

/// Borrowed handle to one node of a [`MappingTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a MappingTree,
    index: u32,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a FrozenNode {
        &self.tree.nodes[self.index as usize]
    }

    pub fn value(&self) -> Option<&'a str> {
        self.node().value.as_deref()
    }

    pub fn get(&self, c: char) -> Option<NodeRef<'a>> {
        let children = &self.node().children;
        let pos = children.binary_search_by_key(&c, |&(k, _)| k).ok()?;
        Some(NodeRef {
            tree: self.tree,
            index: children[pos].1,
        })
    }

    pub fn is_leaf(&self) -> bool {
        self.node().children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = (char, NodeRef<'a>)> + 'a {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&(c, index)| (c, NodeRef { tree, index }))
    }

    fn thaw(&self) -> MutableNode {
        let mut node = MutableNode::new();
        if let Some(value) = self.value() {
            node.value = Some(value.to_string());
        }
        for (c, child) in self.children() {
            node.children.insert(c, child.thaw());
        }
        node
    }
}

impl std::fmt::Debug for MappingTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingTree")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
