//! The compatibility relation between aspect types.

use std::sync::LazyLock;

use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::cell::AspectId;

/// Every aspect id of the standard dataset, in canonical order. Supplies are laid out in this order.
pub const STANDARD_ASPECTS: [AspectId; 62] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
    11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 32, 33, 34, 35, 36, 37, 38, 39, 40,
    41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 52, 53, 54, 55, 56, 57, 58, 59, 60,
    61, 73,
];

/// The standard compatibility triples. `(from, to1, to2)` links `from` with `to1` and `from` with `to2`, and nothing else.
pub const STANDARD_TRIPLES: [(AspectId, AspectId, AspectId); 56] = [
    (12, 15, 29), (20, 1, 15), (26, 1, 27), (31, 27, 29), (32, 15, 27),
    (38, 1, 3), (42, 1, 29), (43, 3, 29), (44, 3, 40), (47, 27, 40),
    (6, 26, 44), (11, 42, 44), (13, 40, 44), (17, 40, 26), (18, 3, 44),
    (23, 40, 47), (25, 29, 44), (33, 32, 42), (59, 32, 20), (34, 27, 44),
    (61, 27, 42), (39, 29, 20), (45, 29, 26), (48, 1, 26), (2, 42, 39),
    (4, 13, 1), (5, 1, 33), (8, 6, 45), (9, 25, 26), (50, 11, 42),
    (51, 15, 33), (57, 17, 23), (36, 44, 45), (55, 42, 48), (46, 29, 33),
    (7, 15, 36), (49, 36, 25), (54, 8, 11), (35, 1, 36), (14, 6, 7),
    (52, 11, 35), (60, 29, 7), (16, 14, 27), (19, 11, 14), (22, 13, 14),
    (30, 40, 14), (10, 16, 14), (21, 16, 26), (24, 16, 22), (58, 19, 30),
    (28, 6, 16), (37, 15, 19), (73, 2, 19), (41, 26, 40), (56, 21, 32),
    (53, 37, 15),
];

static STANDARD: LazyLock<LinkGraph> = LazyLock::new(|| LinkGraph::new(STANDARD_ASPECTS, STANDARD_TRIPLES));

/// An immutable, symmetric compatibility relation over aspect ids.
///
/// The node order of the underlying graph is the canonical aspect order: first the aspects passed to [`LinkGraph::new`],
/// then any id that only appears in a triple.
#[derive(Clone, Debug)]
pub struct LinkGraph {
    graph: UnGraphMap<AspectId, ()>,
}

impl LinkGraph {
    /// The graph built from [`STANDARD_ASPECTS`] and [`STANDARD_TRIPLES`], constructed once per process.
    pub fn standard() -> &'static LinkGraph {
        &STANDARD
    }

    /// Build a graph from an aspect list and a list of `(from, to1, to2)` triples.
    pub fn new(
        aspects: impl IntoIterator<Item = AspectId>,
        triples: impl IntoIterator<Item = (AspectId, AspectId, AspectId)>,
    ) -> Self {
        let mut graph = UnGraphMap::new();
        for aspect in aspects {
            graph.add_node(aspect);
        }

        for (from, to1, to2) in triples {
            graph.add_edge(from, to1, ());
            graph.add_edge(from, to2, ());
        }

        Self { graph }
    }

    /// Whether `a` and `b` may sit next to each other in a chain. Symmetric.
    #[inline]
    pub fn linked(&self, a: AspectId, b: AspectId) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// All aspect ids in canonical order.
    pub fn aspects(&self) -> impl Iterator<Item = AspectId> + '_ {
        self.graph.nodes()
    }

    /// Number of aspects, and so the number of slots in a matching [`AspectSupply`](crate::AspectSupply).
    pub fn aspect_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Position of `aspect` in the canonical order.
    pub fn slot_of(&self, aspect: AspectId) -> Option<usize> {
        self.aspects().position(|a| a == aspect)
    }

    /// Every aspect linked to `aspect`.
    pub fn partners(&self, aspect: AspectId) -> impl Iterator<Item = AspectId> + '_ {
        self.graph.neighbors(aspect)
    }

    /// Every linked pair, once.
    pub fn pairs(&self) -> impl Iterator<Item = UnorderedPair<AspectId>> + '_ {
        self.graph.all_edges().map(|(a, b, _)| UnorderedPair(a, b))
    }
}
