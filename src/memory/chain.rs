//! Chain construction and cross-chain relation linking.

use super::entry_cache::EntryCache;
use super::node::{NodeGraph, NodeId};

/// Word carried by the head node of every chain
pub const SENTINEL_WORD: &str = "BEGIN";

/// Appends one node per token after `head`, in token order.
///
/// Returns the last node of the chain (`head` itself for no tokens).
pub fn build_chain(graph: &mut NodeGraph, head: NodeId, tokens: &[String]) -> NodeId {
    let mut last = head;
    for token in tokens {
        let node = graph.add_node(token.as_str());
        graph.set_next(last, node);
        last = node;
    }
    last
}

/// Cross-links a fresh chain into the graph through the cache.
///
/// Every node of the chain, head included, is appended to the related list
/// of each cached node carrying the same word. Returns the number of links
/// added.
pub fn attach_to_related(graph: &mut NodeGraph, head: NodeId, cache: &EntryCache) -> usize {
    let chain: Vec<NodeId> = graph.chain(head).collect();
    let mut links = 0;

    for node in chain {
        let targets: Vec<NodeId> = cache.nodes_with_word(graph.word(node)).collect();
        for target in targets {
            graph.add_related(target, node);
            links += 1;
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_chain_integrity() {
        let mut graph = NodeGraph::new();
        let head = graph.add_node(SENTINEL_WORD);
        let last = build_chain(&mut graph, head, &tokens(&["one", "two", "three"]));

        assert_eq!(graph.chain_words(head), vec!["BEGIN", "one", "two", "three"]);
        assert_eq!(graph.word(last), "three");
        assert_eq!(graph.next(last), None);
        assert!(graph.related(head).is_empty());
    }

    #[test]
    fn test_empty_token_list() {
        let mut graph = NodeGraph::new();
        let head = graph.add_node(SENTINEL_WORD);
        assert_eq!(build_chain(&mut graph, head, &[]), head);
        assert_eq!(graph.next(head), None);
    }

    #[test]
    fn test_relations_follow_chain_order() {
        let mut graph = NodeGraph::new();
        let mut cache = EntryCache::new();
        let cached = graph.add_node("apple");
        cache.insert(3, cached, &graph);

        let head = graph.add_node(SENTINEL_WORD);
        build_chain(&mut graph, head, &tokens(&["apple", "pie", "apple"]));
        let chain: Vec<NodeId> = graph.chain(head).collect();

        assert_eq!(attach_to_related(&mut graph, head, &cache), 2);
        assert_eq!(graph.related(cached), &[chain[1], chain[3]]);
    }

    #[test]
    fn test_relations_are_case_sensitive() {
        let mut graph = NodeGraph::new();
        let mut cache = EntryCache::new();
        let cached = graph.add_node("Apple");
        cache.insert(0, cached, &graph);

        let head = graph.add_node(SENTINEL_WORD);
        build_chain(&mut graph, head, &tokens(&["apple"]));

        assert_eq!(attach_to_related(&mut graph, head, &cache), 0);
        assert!(graph.related(cached).is_empty());
    }

    #[test]
    fn test_sentinel_links_to_cached_sentinel() {
        let mut graph = NodeGraph::new();
        let mut cache = EntryCache::new();
        let old_head = graph.add_node(SENTINEL_WORD);
        cache.insert(9, old_head, &graph);

        let head = graph.add_node(SENTINEL_WORD);
        build_chain(&mut graph, head, &tokens(&["hello"]));
        attach_to_related(&mut graph, head, &cache);

        assert_eq!(graph.related(old_head), &[head]);
    }
}
