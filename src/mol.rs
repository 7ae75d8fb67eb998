use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::atom::LewisAtom;
use crate::bond::Bond;

pub const MAX_ATOMS: usize = 12;
pub const MAX_HEAVY_ATOMS: usize = 6;
pub const MAX_BONDS: usize = 12;
pub const MAX_RESONANCE: usize = 6;

/// A small undirected molecular graph with fixed capacity.
///
/// Storage for [`MAX_ATOMS`] nodes and [`MAX_BONDS`] edges is reserved up
/// front and never grown; [`add_atom`](Mol::add_atom) and
/// [`add_bond`](Mol::add_bond) return `None` once full. Node and edge
/// indices follow insertion order, so two graphs built the same way can be
/// compared index by index.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
}

/// One concrete bonding arrangement: nodes are atoms in composition order,
/// edges are bonds in the order the skeleton created them.
pub type LewisStructure = Mol<LewisAtom, Bond>;

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::with_capacity(MAX_ATOMS, MAX_BONDS),
        }
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> Option<NodeIndex> {
        if self.atom_count() >= MAX_ATOMS {
            return None;
        }
        Some(self.graph.add_node(atom))
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> Option<EdgeIndex> {
        if self.bond_count() >= MAX_BONDS {
            return None;
        }
        Some(self.graph.add_edge(a, b, bond))
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// The endpoint of `bond` that is not `atom`, or `None` if `atom` is not
    /// on the bond.
    pub fn other_end(&self, bond: EdgeIndex, atom: NodeIndex) -> Option<NodeIndex> {
        let (a, b) = self.bond_endpoints(bond)?;
        if a == atom {
            Some(b)
        } else if b == atom {
            Some(a)
        } else {
            None
        }
    }

    pub fn contains_atom(&self, idx: NodeIndex) -> bool {
        idx.index() < self.atom_count()
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        for idx in self.atoms() {
            if self.atom(idx) != other.atom(idx) {
                return false;
            }
        }
        for idx in self.bonds() {
            if self.bond(idx) != other.bond(idx) {
                return false;
            }
            if self.bond_endpoints(idx) != other.bond_endpoints(idx) {
                return false;
            }
        }
        true
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let atoms: Vec<&A> = self.atoms().map(|i| self.atom(i)).collect();
        let bonds: Vec<(usize, usize, &B)> = self
            .bonds()
            .filter_map(|e| {
                let (a, b) = self.bond_endpoints(e)?;
                Some((a.index(), b.index(), self.bond(e)))
            })
            .collect();
        f.debug_struct("Mol")
            .field("atoms", &atoms)
            .field("bonds", &bonds)
            .finish()
    }
}
