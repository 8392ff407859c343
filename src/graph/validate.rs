//! Rooted-DAG validation for hypernym graphs.
//!
//! A taxonomy must be acyclic and have exactly one root: one vertex with no
//! outgoing edges that has at least one incoming edge. Isolated vertices do
//! not count as roots. The check runs once, when a [`RootedDag`] is built;
//! holding a `RootedDag` is proof that it passed.

use std::sync::Arc;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::ValidationError;

use super::{Digraph, VertexId};

/// Result type for validation.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// A digraph known to be acyclic with a single root.
#[derive(Debug, Clone)]
pub struct RootedDag {
    graph: Arc<Digraph>,
    root: VertexId,
}

impl RootedDag {
    /// Validate `graph`, failing on the first directed cycle or a root count other than one.
    pub fn new(graph: Digraph) -> ValidationResult<Self> {
        check_acyclic(&graph)?;
        let roots = roots(&graph);
        let [root] = roots[..] else {
            return Err(ValidationError::InvalidRootCount {
                count: roots.len(),
                roots,
            });
        };
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            root,
            "hypernym graph validated"
        );
        Ok(Self {
            graph: Arc::new(graph),
            root,
        })
    }

    /// The unique root vertex.
    pub fn root(&self) -> VertexId {
        self.root
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    pub(crate) fn shared_graph(&self) -> Arc<Digraph> {
        Arc::clone(&self.graph)
    }

    /// Give back the underlying digraph.
    pub fn into_inner(self) -> Arc<Digraph> {
        self.graph
    }
}

/// Vertices with out-degree 0 and positive in-degree, ascending.
pub fn roots(graph: &Digraph) -> Vec<VertexId> {
    graph
        .in_degrees()
        .iter()
        .enumerate()
        .filter(|&(v, &indeg)| indeg > 0 && graph.neighbors(v).is_empty())
        .map(|(v, _)| v)
        .collect()
}

/// Fail with [`ValidationError::CycleDetected`] if `graph` has a directed cycle.
///
/// Self-loops count as cycles.
pub fn check_acyclic(graph: &Digraph) -> ValidationResult<()> {
    let mut dag: DiGraph<(), ()> =
        DiGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for _ in 0..graph.vertex_count() {
        dag.add_node(());
    }
    for (from, to) in graph.edges() {
        dag.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }
    petgraph::algo::toposort(&dag, None)
        .map(|_| ())
        .map_err(|cycle| ValidationError::CycleDetected {
            vertex: cycle.node_id().index(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Digraph {
        Digraph::from_edges(n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn accepts_single_rooted_dag() {
        let dag = RootedDag::new(graph(4, &[(0, 2), (1, 2), (2, 3)])).unwrap();
        assert_eq!(dag.root(), 3);
        assert_eq!(dag.graph().edge_count(), 3);
    }

    #[test]
    fn rejects_cycle() {
        let err = RootedDag::new(graph(3, &[(0, 1), (1, 2), (2, 1)])).unwrap_err();
        let ValidationError::CycleDetected { vertex } = err else {
            panic!("expected cycle, got {err:?}");
        };
        assert!(vertex == 1 || vertex == 2);
    }

    #[test]
    fn rejects_self_loop() {
        let err = RootedDag::new(graph(2, &[(0, 1), (1, 1)])).unwrap_err();
        assert_eq!(err, ValidationError::CycleDetected { vertex: 1 });
    }

    #[test]
    fn rejects_two_roots() {
        let err = RootedDag::new(graph(4, &[(0, 1), (2, 3)])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidRootCount {
                count: 2,
                roots: vec![1, 3]
            }
        );
    }

    #[test]
    fn rejects_graph_without_edges() {
        let err = RootedDag::new(graph(3, &[])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidRootCount {
                count: 0,
                roots: vec![]
            }
        );
    }

    #[test]
    fn isolated_vertices_are_not_roots() {
        let dag = RootedDag::new(graph(5, &[(0, 1), (2, 1)])).unwrap();
        assert_eq!(dag.root(), 1);
        assert_eq!(roots(dag.graph()), vec![1]);
    }

    #[test]
    fn cycle_is_reported_before_root_count() {
        // Two roots and a cycle: the cycle wins.
        let err = RootedDag::new(graph(5, &[(0, 1), (1, 0), (2, 3)])).unwrap_err();
        assert!(matches!(err, ValidationError::CycleDetected { .. }));
    }
}
