//! Shortest ancestral path (SAP) queries.
//!
//! An ancestral path between `v` and `w` is a pair of directed paths
//! `v ~> a` and `w ~> a` meeting at a common ancestor `a`. The shortest one
//! minimizes the combined edge count. Set-valued queries take the minimum
//! over every `(v, w)` in `V × W`, which one multi-source search per side
//! computes directly.
//!
//! Each query runs two breadth-first searches and one linear scan over the
//! vertices, so it costs O(V + E) and keeps no state between calls. The
//! engine works on any digraph; acyclicity only matters for the taxonomy
//! interpretation, which [`RootedDag`](super::RootedDag) enforces up front.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SapError;

use super::{Digraph, Reachability, RootedDag, VertexId};

/// Result type for SAP queries.
pub type SapResult<T> = std::result::Result<T, SapError>;

/// The common ancestor on a shortest ancestral path and the path's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestralPath {
    /// The shared ancestor. Smallest vertex id among equally short candidates.
    pub ancestor: VertexId,
    /// Total edge count of both legs.
    pub length: usize,
}

/// Shortest-ancestral-path engine over a shared, read-only digraph.
///
/// Cloning is cheap and clones share the graph. Queries take `&self`, so one
/// engine can serve many threads.
#[derive(Debug, Clone)]
pub struct Sap {
    graph: Arc<Digraph>,
}

/// Both searches for one query, kept together so every public operation
/// derives its answer from the same candidate scan.
struct Searches {
    from_v: Reachability,
    from_w: Reachability,
}

impl Searches {
    fn closest_ancestor(&self) -> Option<AncestralPath> {
        let mut best: Option<AncestralPath> = None;
        for (ancestor, dist_v) in self.from_v.reached() {
            let Some(dist_w) = self.from_w.dist_to(ancestor) else {
                continue;
            };
            let length = dist_v + dist_w;
            // Strict comparison over ascending ids keeps the smallest id on ties.
            if best.is_none_or(|b| length < b.length) {
                best = Some(AncestralPath { ancestor, length });
            }
        }
        best
    }

    fn path_through(&self, ancestor: VertexId) -> Option<Vec<VertexId>> {
        let mut path = self.from_v.path_to(ancestor)?;
        let mut back = self.from_w.path_to(ancestor)?;
        back.pop();
        path.extend(back.into_iter().rev());
        Some(path)
    }
}

impl Sap {
    /// Create an engine over any digraph, cyclic or multi-rooted.
    pub fn new(graph: impl Into<Arc<Digraph>>) -> Self {
        Self {
            graph: graph.into(),
        }
    }

    /// Create an engine over a validated taxonomy.
    pub fn from_rooted(dag: &RootedDag) -> Self {
        Self {
            graph: dag.shared_graph(),
        }
    }

    /// The digraph this engine queries.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Length of a shortest ancestral path between `v` and `w`; `None` without a common ancestor.
    pub fn length(&self, v: VertexId, w: VertexId) -> SapResult<Option<usize>> {
        Ok(self.shortest(v, w)?.map(|p| p.length))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path.
    pub fn ancestor(&self, v: VertexId, w: VertexId) -> SapResult<Option<VertexId>> {
        Ok(self.shortest(v, w)?.map(|p| p.ancestor))
    }

    /// Ancestor and length together, from a single pair of searches.
    pub fn shortest(&self, v: VertexId, w: VertexId) -> SapResult<Option<AncestralPath>> {
        let searches = self.search(&[v], &[w])?;
        let result = searches.closest_ancestor();
        tracing::debug!(v, w, ?result, "sap query");
        Ok(result)
    }

    /// Full vertex sequence `v … ancestor … w` of a shortest ancestral path.
    pub fn path(&self, v: VertexId, w: VertexId) -> SapResult<Option<Vec<VertexId>>> {
        self.path_between(&[v], &[w])
    }

    /// Set-valued [`length`](Self::length): minimum over any vertex in `vs` and any in `ws`.
    pub fn length_between(&self, vs: &[VertexId], ws: &[VertexId]) -> SapResult<Option<usize>> {
        Ok(self.shortest_between(vs, ws)?.map(|p| p.length))
    }

    /// Set-valued [`ancestor`](Self::ancestor).
    pub fn ancestor_between(
        &self,
        vs: &[VertexId],
        ws: &[VertexId],
    ) -> SapResult<Option<VertexId>> {
        Ok(self.shortest_between(vs, ws)?.map(|p| p.ancestor))
    }

    /// Set-valued [`shortest`](Self::shortest).
    pub fn shortest_between(
        &self,
        vs: &[VertexId],
        ws: &[VertexId],
    ) -> SapResult<Option<AncestralPath>> {
        let searches = self.search(vs, ws)?;
        let result = searches.closest_ancestor();
        tracing::debug!(
            left = vs.len(),
            right = ws.len(),
            ?result,
            "sap set query"
        );
        Ok(result)
    }

    /// Set-valued [`path`](Self::path). The path starts in `vs` and ends in `ws`.
    pub fn path_between(
        &self,
        vs: &[VertexId],
        ws: &[VertexId],
    ) -> SapResult<Option<Vec<VertexId>>> {
        let searches = self.search(vs, ws)?;
        Ok(searches
            .closest_ancestor()
            .and_then(|p| searches.path_through(p.ancestor)))
    }

    fn search(&self, vs: &[VertexId], ws: &[VertexId]) -> SapResult<Searches> {
        if vs.is_empty() {
            return Err(SapError::EmptyVertexSet { side: "left" });
        }
        if ws.is_empty() {
            return Err(SapError::EmptyVertexSet { side: "right" });
        }
        for &v in vs.iter().chain(ws) {
            self.graph.check_vertex(v)?;
        }
        Ok(Searches {
            from_v: Reachability::from_sources(&self.graph, vs.iter().copied())?,
            from_w: Reachability::from_sources(&self.graph, ws.iter().copied())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DigraphError;

    fn sap(n: usize, edges: &[(usize, usize)]) -> Sap {
        Sap::new(Digraph::from_edges(n, edges.iter().copied()).unwrap())
    }

    #[test]
    fn chain_scenario() {
        let s = sap(3, &[(0, 1), (1, 2)]);
        assert_eq!(s.length(0, 2).unwrap(), Some(2));
        assert_eq!(s.ancestor(0, 2).unwrap(), Some(2));
        assert_eq!(s.length(0, 1).unwrap(), Some(1));
        assert_eq!(s.ancestor(0, 1).unwrap(), Some(1));
    }

    #[test]
    fn shared_parent_scenario() {
        let s = sap(3, &[(0, 2), (1, 2)]);
        assert_eq!(s.length(0, 1).unwrap(), Some(2));
        assert_eq!(s.ancestor(0, 1).unwrap(), Some(2));
    }

    #[test]
    fn disjoint_vertices_have_no_ancestor() {
        let s = sap(2, &[]);
        assert_eq!(s.length(0, 1).unwrap(), None);
        assert_eq!(s.ancestor(0, 1).unwrap(), None);
        assert_eq!(s.path(0, 1).unwrap(), None);
    }

    #[test]
    fn set_scenario() {
        let s = sap(4, &[(0, 3), (1, 3), (2, 3)]);
        assert_eq!(s.length_between(&[0, 1], &[2]).unwrap(), Some(2));
        assert_eq!(s.ancestor_between(&[0, 1], &[2]).unwrap(), Some(3));
    }

    #[test]
    fn vertex_is_its_own_ancestor() {
        let s = sap(3, &[(0, 1), (1, 2)]);
        for v in 0..3 {
            assert_eq!(
                s.shortest(v, v).unwrap(),
                Some(AncestralPath {
                    ancestor: v,
                    length: 0
                })
            );
        }
    }

    #[test]
    fn overlapping_sets_have_zero_length() {
        let s = sap(4, &[(0, 3), (1, 3), (2, 3)]);
        assert_eq!(
            s.shortest_between(&[0, 2], &[2, 1]).unwrap(),
            Some(AncestralPath {
                ancestor: 2,
                length: 0
            })
        );
    }

    #[test]
    fn ties_resolve_to_smallest_vertex_id() {
        // 0 -> 3, 0 -> 2, 1 -> 3, 1 -> 2: both 2 and 3 are at total distance 2.
        let s = sap(4, &[(0, 3), (0, 2), (1, 3), (1, 2)]);
        assert_eq!(
            s.shortest(0, 1).unwrap(),
            Some(AncestralPath {
                ancestor: 2,
                length: 2
            })
        );
        assert_eq!(s.ancestor(1, 0).unwrap(), Some(2));
    }

    #[test]
    fn length_is_symmetric_on_cyclic_graph() {
        let s = sap(
            6,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (1, 4)],
        );
        for v in 0..6 {
            for w in 0..6 {
                assert_eq!(s.length(v, w).unwrap(), s.length(w, v).unwrap());
            }
        }
    }

    #[test]
    fn ancestor_and_length_agree() {
        let g = Digraph::from_edges(
            8,
            [(0, 2), (1, 2), (2, 5), (3, 4), (4, 5), (5, 7), (6, 7)],
        )
        .unwrap();
        let s = Sap::new(g.clone());
        for v in 0..8 {
            for w in 0..8 {
                let Some(p) = s.shortest(v, w).unwrap() else {
                    continue;
                };
                let dv = Reachability::from_vertex(&g, v).unwrap().dist_to(p.ancestor);
                let dw = Reachability::from_vertex(&g, w).unwrap().dist_to(p.ancestor);
                assert_eq!(dv.zip(dw).map(|(a, b)| a + b), Some(p.length));
            }
        }
    }

    #[test]
    fn path_runs_from_v_through_ancestor_to_w() {
        // 0 -> 1 -> 4, 2 -> 3 -> 4
        let s = sap(5, &[(0, 1), (1, 4), (2, 3), (3, 4)]);
        assert_eq!(s.path(0, 2).unwrap(), Some(vec![0, 1, 4, 3, 2]));
        assert_eq!(s.path(0, 1).unwrap(), Some(vec![0, 1]));
        assert_eq!(s.path(4, 4).unwrap(), Some(vec![4]));
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let s = sap(3, &[(0, 1)]);
        assert_eq!(
            s.length(0, 3),
            Err(SapError::Digraph(DigraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }))
        );
        assert!(s.ancestor(7, 0).is_err());
        assert!(s.length_between(&[0, 1], &[2, 99]).is_err());
    }

    #[test]
    fn empty_sets_are_rejected() {
        let s = sap(3, &[(0, 1)]);
        assert_eq!(
            s.length_between(&[], &[1]),
            Err(SapError::EmptyVertexSet { side: "left" })
        );
        assert_eq!(
            s.ancestor_between(&[1], &[]),
            Err(SapError::EmptyVertexSet { side: "right" })
        );
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let s = sap(4, &[(0, 3), (1, 3), (2, 3)]);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..3)
                .map(|v| {
                    let s = &s;
                    scope.spawn(move || s.length(v, (v + 1) % 3).unwrap())
                })
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), Some(2));
            }
        });
    }
}
