//! Multi-source breadth-first reachability.
//!
//! All source vertices start at distance 0, as if hanging off one virtual
//! super-source. Every search allocates its own buffers, so concurrent
//! searches over one shared [`Digraph`] never interfere.

use std::collections::VecDeque;

use super::{Digraph, DigraphResult, VertexId};

/// Distances from a source set to every vertex it can reach.
#[derive(Debug, Clone)]
pub struct Reachability {
    dist_to: Vec<Option<usize>>,
    edge_to: Vec<Option<VertexId>>,
}

impl Reachability {
    /// Search from a single vertex.
    pub fn from_vertex(graph: &Digraph, source: VertexId) -> DigraphResult<Self> {
        Self::from_sources(graph, [source])
    }

    /// Search from every vertex in `sources` at once.
    ///
    /// Each source is range-checked before the traversal starts. An empty
    /// source set yields a search that reaches nothing.
    pub fn from_sources(
        graph: &Digraph,
        sources: impl IntoIterator<Item = VertexId>,
    ) -> DigraphResult<Self> {
        let n = graph.vertex_count();
        let mut dist_to: Vec<Option<usize>> = vec![None; n];
        let mut edge_to: Vec<Option<VertexId>> = vec![None; n];
        let mut queue: VecDeque<VertexId> = VecDeque::new();

        for source in sources {
            graph.check_vertex(source)?;
            if dist_to[source].is_none() {
                dist_to[source] = Some(0);
                queue.push_back(source);
            }
        }

        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d| d + 1);
            for &w in graph.neighbors(v) {
                if dist_to[w].is_none() {
                    dist_to[w] = Some(next);
                    edge_to[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }

        Ok(Self { dist_to, edge_to })
    }

    /// Whether some source reaches `v`. Out-of-range vertices are unreachable.
    pub fn has_path_to(&self, v: VertexId) -> bool {
        self.dist_to(v).is_some()
    }

    /// Edge count of the shortest path from the closest source to `v`.
    pub fn dist_to(&self, v: VertexId) -> Option<usize> {
        self.dist_to.get(v).copied().flatten()
    }

    /// Vertices on a shortest path from the closest source to `v`, source first.
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        self.dist_to(v)?;
        let mut path = vec![v];
        let mut current = v;
        while let Some(prev) = self.edge_to[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Every reached vertex with its distance, in ascending vertex order.
    pub fn reached(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.dist_to
            .iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|d| (v, d)))
    }

    /// Number of vertices the search covered.
    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }
}
