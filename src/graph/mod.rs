//! Hypernym digraph and the algorithms that run over it.
//!
//! - [`Digraph`]: fixed vertex count, directed edge list with adjacency queries
//! - [`bfs`]: multi-source breadth-first reachability
//! - [`sap`]: shortest ancestral path engine
//! - [`validate`]: the one-time acyclic / single-root gate ([`RootedDag`])
//!
//! Vertices are dense integers `0..V`. Edges point from a specific synset to
//! a more general one (hyponym → hypernym).

pub mod bfs;
pub mod sap;
pub mod validate;

use serde::{Deserialize, Serialize};

use crate::error::DigraphError;

pub use bfs::Reachability;
pub use sap::{AncestralPath, Sap};
pub use validate::RootedDag;

/// A vertex (synset) identifier.
pub type VertexId = usize;

/// Result type for digraph operations.
pub type DigraphResult<T> = std::result::Result<T, DigraphError>;

/// Adjacency-list directed graph over a fixed set of vertices.
///
/// Parallel edges are kept. Out-neighbors are reported in insertion order.
/// There is no removal; once built the graph is only read.
///
/// Serialized as a vertex count plus edge list. Deserializing replays every
/// edge through [`Digraph::add_edge`], so out-of-range endpoints are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EdgeList", into = "EdgeList")]
pub struct Digraph {
    adjacency: Vec<Vec<VertexId>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

/// Wire form of a [`Digraph`].
#[derive(Serialize, Deserialize)]
struct EdgeList {
    vertex_count: usize,
    edges: Vec<(VertexId, VertexId)>,
}

impl TryFrom<EdgeList> for Digraph {
    type Error = DigraphError;

    fn try_from(list: EdgeList) -> DigraphResult<Self> {
        Self::from_edges(list.vertex_count, list.edges)
    }
}

impl From<Digraph> for EdgeList {
    fn from(graph: Digraph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().collect(),
        }
    }
}

impl Digraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Build a graph from an edge list, failing on the first out-of-range endpoint.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> DigraphResult<Self> {
        let mut graph = Self::new(vertex_count);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the edge `from -> to`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> DigraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(to);
        self.in_degree[to] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Out-neighbors of `v` in insertion order.
    pub fn adjacent_to(&self, v: VertexId) -> DigraphResult<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    pub fn out_degree(&self, v: VertexId) -> DigraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v].len())
    }

    pub fn in_degree(&self, v: VertexId) -> DigraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.in_degree[v])
    }

    /// All edges as `(from, to)` pairs, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// The graph with every edge reversed (hypernym → hyponym).
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());
        for (from, to) in self.edges() {
            reversed.adjacency[to].push(from);
            reversed.in_degree[from] += 1;
            reversed.edge_count += 1;
        }
        reversed
    }

    /// Fail with [`DigraphError::VertexOutOfRange`] unless `v` is in `0..V`.
    pub fn check_vertex(&self, v: VertexId) -> DigraphResult<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(DigraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Unchecked neighbor slice for callers that already validated `v`.
    pub(crate) fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }

    pub(crate) fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_has_no_edges() {
        let g = Digraph::new(4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 0);
        for v in 0..4 {
            assert!(g.adjacent_to(v).unwrap().is_empty());
            assert_eq!(g.in_degree(v).unwrap(), 0);
        }
    }

    #[test]
    fn adjacency_keeps_insertion_order_and_duplicates() {
        let mut g = Digraph::new(4);
        g.add_edge(0, 3).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 3).unwrap();
        g.add_edge(2, 3).unwrap();

        assert_eq!(g.adjacent_to(0).unwrap(), &[3, 1, 3]);
        assert_eq!(g.out_degree(0).unwrap(), 3);
        assert_eq!(g.in_degree(3).unwrap(), 3);
        assert_eq!(g.in_degree(1).unwrap(), 1);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn add_edge_rejects_out_of_range_endpoints() {
        let mut g = Digraph::new(2);
        assert_eq!(
            g.add_edge(0, 2),
            Err(DigraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert!(g.add_edge(5, 0).is_err());
        // A rejected edge leaves the graph untouched.
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.in_degree(0).unwrap(), 0);
    }

    #[test]
    fn degree_queries_validate_vertex() {
        let g = Digraph::new(1);
        assert!(g.out_degree(1).is_err());
        assert!(g.in_degree(1).is_err());
        assert!(g.adjacent_to(1).is_err());
    }

    #[test]
    fn reverse_swaps_edge_direction() {
        let g = Digraph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
        let r = g.reverse();
        assert_eq!(r.edge_count(), 3);
        assert_eq!(r.adjacent_to(2).unwrap(), &[0, 1]);
        assert_eq!(r.adjacent_to(1).unwrap(), &[0]);
        assert_eq!(r.in_degree(0).unwrap(), 2);
        assert_eq!(r.out_degree(0).unwrap(), 0);
    }

    #[test]
    fn edges_iterates_every_edge() {
        let g = Digraph::from_edges(3, [(2, 0), (0, 1), (2, 1)]).unwrap();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn serde_round_trips_through_edge_list() {
        let g = Digraph::from_edges(3, [(0, 2), (1, 2), (0, 2)]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"vertex_count":3,"edges":[[0,2],[0,2],[1,2]]}"#);
        let back: Digraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.in_degree(2).unwrap(), 3);
    }

    #[test]
    fn deserialize_rejects_out_of_range_edges() {
        let err = serde_json::from_str::<Digraph>(r#"{"vertex_count":1,"edges":[[0,5]]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("vertex 5 is out of range"), "{err}");

        // Raw internal fields are not accepted either.
        let raw = r#"{"adjacency":[[5]],"in_degree":[0],"edge_count":1}"#;
        assert!(serde_json::from_str::<Digraph>(raw).is_err());
    }
}
