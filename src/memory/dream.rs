use super::chain::{attach_to_related, build_chain, SENTINEL_WORD};
use super::entry_cache::{cache_nodes, EntryCache, CACHE_SLOTS};
use super::filter::{filter_words, CommonWords};
use super::node::{NodeGraph, NodeId};
use super::random::RandomSource;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Configuration for a dream run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DreamConfig {
    /// Number of start slots drawn per dream run
    pub iterations: usize,
    /// Maximum words emitted by a single traversal
    pub step_budget: usize,
    /// Word carried by each chain's head node
    pub sentinel: String,
}

impl Default for DreamConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            step_budget: 10_000,
            sentinel: SENTINEL_WORD.to_owned(),
        }
    }
}

/// Words collected by one walk through the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub words: Vec<String>,
    /// The walk was cut short by the step budget
    pub truncated: bool,
}

impl Traversal {
    /// Visited words followed by a lone `.` token
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(String::as_str)
            .chain(std::iter::once("."))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DreamReport {
    pub iterations: usize,
    pub empty_selections: usize,
    pub sentences: usize,
    pub truncated: usize,
    pub words_emitted: usize,
}

/// Owns the word graph and the entry cache, and runs the
/// ingest -> dream -> re-ingest cycle.
pub struct DreamEngine {
    graph: NodeGraph,
    cache: EntryCache,
    common_words: CommonWords,
    config: DreamConfig,
}

impl DreamEngine {
    pub fn new(common_words: CommonWords, config: DreamConfig) -> Self {
        Self {
            graph: NodeGraph::new(),
            cache: EntryCache::new(),
            common_words,
            config,
        }
    }

    pub fn graph(&self) -> &NodeGraph { &self.graph }
    pub fn cache(&self) -> &EntryCache { &self.cache }
    pub fn common_words(&self) -> &CommonWords { &self.common_words }
    pub fn config(&self) -> &DreamConfig { &self.config }

    /// Runs one sentence through filter, chain builder, relation linker and
    /// cache population. Returns the head of the new chain.
    pub fn load_sentence<R: RandomSource + ?Sized>(&mut self, sentence: &str, rng: &mut R) -> NodeId {
        let tokens = filter_words(sentence);
        let head = self.graph.add_node(self.config.sentinel.as_str());
        build_chain(&mut self.graph, head, &tokens);

        let links = attach_to_related(&mut self.graph, head, &self.cache);
        let cached = cache_nodes(&mut self.cache, &self.graph, head, &self.common_words, rng);

        debug!(
            "ingested {} tokens: {} related links, {} cache writes",
            tokens.len(),
            links,
            cached
        );
        head
    }

    /// Ingests every sentence in order. Returns how many were loaded.
    pub fn load_corpus<I, S, R>(&mut self, sentences: I, rng: &mut R) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: RandomSource + ?Sized,
    {
        let mut loaded = 0;
        for sentence in sentences {
            self.load_sentence(sentence.as_ref(), rng);
            loaded += 1;
        }

        let stats = self.cache.stats(&self.graph);
        info!(
            "loaded {} sentences: {} nodes, {} cache slots occupied",
            loaded,
            self.graph.len(),
            stats.occupied
        );
        loaded
    }

    /// Walks the graph from `start`, preferring a random related node over
    /// the chain successor at every step.
    ///
    /// The start node's own word is not collected. Stops when no step is
    /// possible or the step budget is spent.
    pub fn dream_traverse<R: RandomSource + ?Sized>(&self, start: NodeId, rng: &mut R) -> Traversal {
        let mut words = Vec::new();
        let mut truncated = false;
        let mut node = start;

        loop {
            let related = self.graph.related(node);
            let step = if related.is_empty() {
                self.graph.next(node)
            } else {
                Some(related[rng.below(related.len())])
            };

            let Some(step) = step else { break };
            if words.len() >= self.config.step_budget {
                truncated = true;
                break;
            }
            words.push(self.graph.word(step).to_owned());
            node = step;
        }

        trace!("traversal from {:?}: {} words", start, words.len());
        Traversal { words, truncated }
    }

    /// Dreams `iterations` times: draw a cache slot, walk from it, write the
    /// generated sentence to `out`, and feed it back in.
    ///
    /// Empty slots produce nothing. A blank line closes the run.
    pub fn dream<W: Write, R: RandomSource + ?Sized>(
        &mut self,
        out: &mut W,
        rng: &mut R,
    ) -> io::Result<DreamReport> {
        let mut report = DreamReport::default();

        for _ in 0..self.config.iterations {
            report.iterations += 1;
            let Some(start) = self.cache.get(rng.below(CACHE_SLOTS)) else {
                report.empty_selections += 1;
                continue;
            };

            let traversal = self.dream_traverse(start, rng);
            if traversal.truncated {
                report.truncated += 1;
            }
            report.words_emitted += traversal.words.len();

            let text = traversal.text();
            writeln!(out, "{}", text)?;
            report.sentences += 1;

            self.load_sentence(&text, rng);
        }
        writeln!(out)?;

        info!(
            "dreamed {} sentences ({} empty draws, {} truncated)",
            report.sentences, report.empty_selections, report.truncated
        );
        Ok(report)
    }
}
