//! Outcast detection: the noun least related to the rest of a list.
//!
//! Each noun scores the sum of its SAP distances to every other noun in the
//! list; the highest score is the outcast. On ties the earliest noun wins.

use crate::error::OutcastError;
use crate::wordnet::WordNet;

/// Result type for outcast queries.
pub type OutcastResult<T> = std::result::Result<T, OutcastError>;

/// Finds outcasts against a shared [`WordNet`].
///
/// Two nouns with no common ancestor are scored as further apart than any
/// real ancestral path: the pair adds twice the synset count to both sums.
/// A noun whose synsets are isolated from the rest of the taxonomy (legal in
/// a validated graph, since an isolated vertex is not a root) therefore
/// becomes the outcast.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// The noun in `nouns` with the largest summed distance to the others.
    ///
    /// A one-noun list is its own outcast.
    pub fn outcast<'n, S: AsRef<str>>(&self, nouns: &'n [S]) -> OutcastResult<&'n str> {
        let scores = self.scores(nouns)?;
        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = i;
            }
        }
        tracing::debug!(
            count = nouns.len(),
            outcast = nouns[best].as_ref(),
            score = scores[best],
            "outcast selected"
        );
        Ok(nouns[best].as_ref())
    }

    /// Summed distance from each noun to all others, in input order.
    pub fn scores<S: AsRef<str>>(&self, nouns: &[S]) -> OutcastResult<Vec<usize>> {
        if nouns.is_empty() {
            return Err(OutcastError::EmptyList);
        }
        for noun in nouns {
            self.wordnet.synsets_of(noun.as_ref())?;
        }

        // Every SAP length is at most 2 * (V - 1).
        let unrelated = 2 * self.wordnet.synset_count();
        let mut scores = vec![0usize; nouns.len()];
        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                let (a, b) = (nouns[i].as_ref(), nouns[j].as_ref());
                let d = match self.wordnet.distance(a, b)? {
                    Some(d) => d,
                    None => {
                        tracing::warn!(a, b, penalty = unrelated, "no common ancestor");
                        unrelated
                    }
                };
                scores[i] += d;
                scores[j] += d;
            }
        }
        Ok(scores)
    }
}
