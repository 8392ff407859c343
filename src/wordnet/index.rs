//! Word index: nouns to synset ids and back.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::LexiconError;
use crate::graph::VertexId;

/// Result type for word index lookups.
pub type LexiconResult<T> = std::result::Result<T, LexiconError>;

/// A set of synonymous nouns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Synset {
    pub id: VertexId,
    /// Nouns in file order. Never empty.
    pub nouns: Vec<String>,
    /// Dictionary definition; not used for distance computations.
    pub gloss: String,
}

impl Synset {
    /// All nouns joined by spaces, as they appear in the synsets file.
    pub fn label(&self) -> String {
        self.nouns.join(" ")
    }
}

/// Bidirectional noun ↔ synset mapping.
///
/// Synset ids are assigned densely in insertion order, matching the vertex
/// ids of the hypernym digraph. Nouns are kept sorted so [`nouns`](Self::nouns)
/// iterates lexicographically.
///
/// Serialize-only: the only way in is [`push_synset`](Self::push_synset),
/// which keeps the noun map and synset ids consistent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordIndex {
    ids_by_noun: BTreeMap<String, Vec<VertexId>>,
    synsets: Vec<Synset>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a synset and return its id.
    ///
    /// A noun listed twice in the same synset maps to that synset once.
    pub fn push_synset(&mut self, nouns: Vec<String>, gloss: impl Into<String>) -> VertexId {
        let id = self.synsets.len();
        for noun in &nouns {
            let ids = self.ids_by_noun.entry(noun.clone()).or_default();
            if ids.last() == Some(&id) {
                tracing::warn!(id, noun = %noun, "noun repeated within one synset");
                continue;
            }
            ids.push(id);
        }
        self.synsets.push(Synset {
            id,
            nouns,
            gloss: gloss.into(),
        });
        id
    }

    /// Number of synsets (and so the vertex count of the hypernym graph).
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Number of distinct nouns.
    pub fn noun_count(&self) -> usize {
        self.ids_by_noun.len()
    }

    /// All distinct nouns, sorted.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.ids_by_noun.keys().map(String::as_str)
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.ids_by_noun.contains_key(word)
    }

    /// Ids of every synset containing `word`, ascending.
    pub fn synsets_of(&self, word: &str) -> LexiconResult<&[VertexId]> {
        if word.is_empty() {
            return Err(LexiconError::EmptyWord);
        }
        self.ids_by_noun
            .get(word)
            .map(Vec::as_slice)
            .ok_or_else(|| LexiconError::UnknownWord {
                word: word.to_string(),
            })
    }

    pub fn synset(&self, id: VertexId) -> LexiconResult<&Synset> {
        self.synsets
            .get(id)
            .ok_or(LexiconError::UnknownSynset { id })
    }

    /// Representative label for a synset id.
    pub fn word_of(&self, id: VertexId) -> LexiconResult<String> {
        Ok(self.synset(id)?.label())
    }

    pub fn synsets(&self) -> &[Synset] {
        &self.synsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nouns(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sample() -> WordIndex {
        let mut index = WordIndex::new();
        index.push_synset(nouns(&["horse", "Equus_caballus"]), "solid-hoofed herbivore");
        index.push_synset(nouns(&["bank"]), "sloping land");
        index.push_synset(nouns(&["bank", "depository_financial_institution"]), "a financial institution");
        index
    }

    #[test]
    fn ids_are_dense_in_insertion_order() {
        let index = sample();
        assert_eq!(index.synset_count(), 3);
        assert_eq!(index.synset(2).unwrap().id, 2);
    }

    #[test]
    fn noun_maps_to_every_containing_synset() {
        let index = sample();
        assert_eq!(index.synsets_of("bank").unwrap(), &[1, 2]);
        assert_eq!(index.synsets_of("horse").unwrap(), &[0]);
        assert!(index.is_noun("Equus_caballus"));
        assert!(!index.is_noun("equus_caballus"));
    }

    #[test]
    fn nouns_are_sorted_and_distinct() {
        let index = sample();
        let all: Vec<_> = index.nouns().collect();
        assert_eq!(
            all,
            vec!["Equus_caballus", "bank", "depository_financial_institution", "horse"]
        );
        assert_eq!(index.noun_count(), 4);
    }

    #[test]
    fn word_of_joins_synset_nouns() {
        let index = sample();
        assert_eq!(index.word_of(0).unwrap(), "horse Equus_caballus");
        assert_eq!(index.word_of(1).unwrap(), "bank");
        assert_eq!(index.synset(1).unwrap().gloss, "sloping land");
    }

    #[test]
    fn unknown_lookups_fail() {
        let index = sample();
        assert_eq!(
            index.synsets_of("unicorn"),
            Err(LexiconError::UnknownWord {
                word: "unicorn".into()
            })
        );
        assert_eq!(index.synsets_of(""), Err(LexiconError::EmptyWord));
        assert_eq!(index.word_of(3), Err(LexiconError::UnknownSynset { id: 3 }));
    }

    #[test]
    fn repeated_noun_in_one_synset_is_recorded_once() {
        let mut index = WordIndex::new();
        index.push_synset(nouns(&["a", "a"]), "");
        assert_eq!(index.synsets_of("a").unwrap(), &[0]);
    }

    #[test]
    fn serializes_noun_map_and_synsets() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["ids_by_noun"]["bank"], serde_json::json!([1, 2]));
        assert_eq!(json["synsets"][0]["nouns"], serde_json::json!(["horse", "Equus_caballus"]));
    }
}
