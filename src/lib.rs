// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # wordnet-sap
//!
//! Semantic relatedness over a noun taxonomy: synsets (sets of synonymous
//! nouns) connected by is-a (hypernym) edges into a rooted DAG.
//!
//! ## Architecture
//!
//! - **Digraph** (`graph`): dense-id adjacency lists, parallel edges allowed
//! - **Reachability** (`graph::bfs`): multi-source breadth-first distances
//! - **SAP engine** (`graph::sap`): shortest ancestral path length and ancestor
//! - **Validation** (`graph::validate`): one-time acyclic / single-root gate
//! - **Word index** (`wordnet`): nouns ↔ synset ids, plus file parsers
//! - **Outcast** (`outcast`): the least related noun in a list
//!
//! ## Library usage
//!
//! ```
//! use wordnet_sap::wordnet::WordNet;
//! use wordnet_sap::outcast::Outcast;
//!
//! let synsets = "0,entity,x\n1,animal,x\n2,horse,x\n3,zebra,x\n4,table,x\n";
//! let hypernyms = "1,0\n2,1\n3,1\n4,0\n";
//! let wordnet = WordNet::from_strs(synsets, hypernyms).unwrap();
//!
//! assert_eq!(wordnet.distance("horse", "zebra").unwrap(), Some(2));
//! assert_eq!(wordnet.sap("horse", "table").unwrap().as_deref(), Some("entity"));
//! assert_eq!(
//!     Outcast::new(&wordnet).outcast(&["horse", "zebra", "table"]).unwrap(),
//!     "table"
//! );
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod outcast;
pub mod wordnet;
