use serde::{Deserialize, Serialize};

/// Handle to a node stored in a [`NodeGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One word occurrence in one chain
#[derive(Debug, Clone)]
pub struct Node {
    word: String,
    next: Option<NodeId>,     // Successor in the owning chain
    related: Vec<NodeId>,     // Later occurrences of the same word
}

impl Node {
    fn new(word: String) -> Self {
        Self {
            word,
            next: None,
            related: Vec::new(),
        }
    }

    // Getters
    pub fn word(&self) -> &str { &self.word }
    pub fn next(&self) -> Option<NodeId> { self.next }
    pub fn related(&self) -> &[NodeId] { &self.related }
}

/// Arena owning every node ever built.
///
/// Nodes are never removed: a node may be reachable from its own chain and
/// from any number of `related` lists at once, so ids stay valid for the
/// lifetime of the graph.
#[derive(Debug, Default)]
pub struct NodeGraph {
    nodes: Vec<Node>,
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a detached node carrying `word`
    pub fn add_node(&mut self, word: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(word.into()));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn word(&self, id: NodeId) -> &str {
        self.node(id).word()
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub fn related(&self, id: NodeId) -> &[NodeId] {
        self.node(id).related()
    }

    /// Links `from` to its successor. Only the chain builder calls this,
    /// once per node.
    pub(crate) fn set_next(&mut self, from: NodeId, to: NodeId) {
        let node = &mut self.nodes[from.0];
        debug_assert!(node.next.is_none(), "chain link already set");
        node.next = Some(to);
    }

    /// Appends `other` to the related list of `target`
    pub(crate) fn add_related(&mut self, target: NodeId, other: NodeId) {
        self.nodes[target.0].related.push(other);
    }

    /// Walks a chain from `head` (inclusive) along `next` links
    pub fn chain(&self, head: NodeId) -> ChainIter<'_> {
        ChainIter {
            graph: self,
            current: Some(head),
        }
    }

    /// Words of a chain in order, head included
    pub fn chain_words(&self, head: NodeId) -> Vec<&str> {
        self.chain(head).map(|id| self.word(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of related links across all nodes
    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(|n| n.related.len()).sum()
    }
}

pub struct ChainIter<'a> {
    graph: &'a NodeGraph,
    current: Option<NodeId>,
}

impl Iterator for ChainIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.graph.next(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let mut graph = NodeGraph::new();
        let id = graph.add_node("apple");
        assert_eq!(graph.word(id), "apple");
        assert_eq!(graph.next(id), None);
        assert!(graph.related(id).is_empty());
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_chain_iteration() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.set_next(a, b);
        graph.set_next(b, c);

        assert_eq!(graph.chain(a).collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(graph.chain_words(b), vec!["b", "c"]);
    }

    #[test]
    fn test_related_links() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node("x");
        let b = graph.add_node("x");
        let c = graph.add_node("x");
        graph.add_related(a, b);
        graph.add_related(a, c);

        assert_eq!(graph.related(a), &[b, c]);
        assert_eq!(graph.link_count(), 2);
        assert!(graph.get(NodeId(99)).is_none());
    }
}
