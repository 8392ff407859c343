//! WordNet facade: noun lookups and noun-level SAP queries.
//!
//! A [`WordNet`] pairs a [`WordIndex`] with a [`Sap`] engine over the
//! hypernym digraph. Both are built once and never change afterwards.
//! Nouns resolve to synset id sets, so a query between two nouns is a
//! set-valued SAP query over every synset each noun belongs to.

pub mod index;
pub mod parse;

use std::path::Path;

use crate::config::WordNetConfig;
use crate::error::{ValidationError, WordNetResult};
use crate::graph::{AncestralPath, Digraph, RootedDag, Sap, VertexId};

pub use index::{LexiconResult, Synset, WordIndex};

/// Noun taxonomy with shortest-ancestral-path queries.
#[derive(Debug, Clone)]
pub struct WordNet {
    index: WordIndex,
    sap: Sap,
    root: Option<VertexId>,
}

impl WordNet {
    /// Build from a word index and its hypernym digraph, rejecting graphs that
    /// are not a single-rooted DAG.
    pub fn new(index: WordIndex, graph: Digraph) -> WordNetResult<Self> {
        check_sizes(&index, &graph)?;
        let dag = RootedDag::new(graph)?;
        tracing::info!(
            synsets = index.synset_count(),
            nouns = index.noun_count(),
            edges = dag.graph().edge_count(),
            root = dag.root(),
            "wordnet ready"
        );
        Ok(Self {
            sap: Sap::from_rooted(&dag),
            root: Some(dag.root()),
            index,
        })
    }

    /// Build without the rooted-DAG check. Queries still work on cyclic or
    /// multi-rooted graphs; nouns in disconnected parts simply have no distance.
    pub fn unvalidated(index: WordIndex, graph: Digraph) -> WordNetResult<Self> {
        check_sizes(&index, &graph)?;
        tracing::warn!(
            synsets = index.synset_count(),
            edges = graph.edge_count(),
            "building wordnet without rooted-DAG validation"
        );
        Ok(Self {
            index,
            sap: Sap::new(graph),
            root: None,
        })
    }

    /// Parse in-memory synsets and hypernyms text and validate the result.
    pub fn from_strs(synsets: &str, hypernyms: &str) -> WordNetResult<Self> {
        let index = parse::parse_synsets("synsets", synsets)?;
        let graph = parse::parse_hypernyms("hypernyms", hypernyms, index.synset_count())?;
        Self::new(index, graph)
    }

    /// Read both input files and validate the result.
    pub fn from_files(synsets: &Path, hypernyms: &Path) -> WordNetResult<Self> {
        Self::from_config(&WordNetConfig::with_files(synsets, hypernyms))
    }

    pub fn from_config(config: &WordNetConfig) -> WordNetResult<Self> {
        let index = parse::read_synsets(&config.synsets)?;
        let graph = parse::read_hypernyms(&config.hypernyms, index.synset_count())?;
        if config.validate {
            Self::new(index, graph)
        } else {
            Self::unvalidated(index, graph)
        }
    }

    /// All nouns, sorted.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.index.nouns()
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.index.is_noun(word)
    }

    /// Ids of the synsets containing `noun`.
    pub fn synsets_of(&self, noun: &str) -> LexiconResult<&[VertexId]> {
        self.index.synsets_of(noun)
    }

    pub fn synset(&self, id: VertexId) -> LexiconResult<&Synset> {
        self.index.synset(id)
    }

    /// Representative label of synset `id`.
    pub fn word_of(&self, id: VertexId) -> LexiconResult<String> {
        self.index.word_of(id)
    }

    pub fn gloss(&self, id: VertexId) -> LexiconResult<&str> {
        Ok(self.index.synset(id)?.gloss.as_str())
    }

    pub fn synset_count(&self) -> usize {
        self.index.synset_count()
    }

    /// The taxonomy root, when the graph was validated.
    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn sap_engine(&self) -> &Sap {
        &self.sap
    }

    /// Shortest ancestral path between any synset of `noun_a` and any of `noun_b`.
    pub fn shortest(&self, noun_a: &str, noun_b: &str) -> LexiconResult<Option<AncestralPath>> {
        let a = self.index.synsets_of(noun_a)?;
        let b = self.index.synsets_of(noun_b)?;
        Ok(self.sap.shortest_between(a, b)?)
    }

    /// SAP distance between two nouns; `None` if they share no ancestor.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> LexiconResult<Option<usize>> {
        Ok(self.shortest(noun_a, noun_b)?.map(|p| p.length))
    }

    /// Label of the common-ancestor synset on a shortest ancestral path.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> LexiconResult<Option<String>> {
        Ok(self.common_ancestor(noun_a, noun_b)?.map(|(_, label)| label))
    }

    /// Shortest ancestral path together with its ancestor's label, from one
    /// pair of searches.
    pub fn common_ancestor(
        &self,
        noun_a: &str,
        noun_b: &str,
    ) -> LexiconResult<Option<(AncestralPath, String)>> {
        self.shortest(noun_a, noun_b)?
            .map(|p| self.index.word_of(p.ancestor).map(|label| (p, label)))
            .transpose()
    }

    /// Synset labels along a shortest ancestral path from `noun_a` to `noun_b`.
    pub fn path(&self, noun_a: &str, noun_b: &str) -> LexiconResult<Option<Vec<String>>> {
        let a = self.index.synsets_of(noun_a)?;
        let b = self.index.synsets_of(noun_b)?;
        let Some(path) = self.sap.path_between(a, b)? else {
            return Ok(None);
        };
        path.into_iter()
            .map(|id| self.index.word_of(id))
            .collect::<LexiconResult<Vec<_>>>()
            .map(Some)
    }
}

fn check_sizes(index: &WordIndex, graph: &Digraph) -> Result<(), ValidationError> {
    if index.synset_count() == graph.vertex_count() {
        Ok(())
    } else {
        Err(ValidationError::VertexCountMismatch {
            synsets: index.synset_count(),
            vertices: graph.vertex_count(),
        })
    }
}
