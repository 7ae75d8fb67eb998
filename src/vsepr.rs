//! Electron-pair geometry around the central atom (AXE classification).
//!
//! Every bond to the center is one electron domain regardless of its order;
//! each lone pair on the center is another.

use std::fmt;

use petgraph::graph::NodeIndex;

use crate::mol::LewisStructure;
use crate::rules::central_bonds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hybridization {
    S,
    SP,
    SP2,
    SP3,
    SP3D,
    SP3D2,
    SP3D3,
}

impl Hybridization {
    pub fn label(self) -> &'static str {
        match self {
            Hybridization::S => "s",
            Hybridization::SP => "sp",
            Hybridization::SP2 => "sp2",
            Hybridization::SP3 => "sp3",
            Hybridization::SP3D => "sp3d",
            Hybridization::SP3D2 => "sp3d2",
            Hybridization::SP3D3 => "sp3d3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectronGeometry {
    Linear,
    TrigonalPlanar,
    Tetrahedral,
    TrigonalBipyramidal,
    Octahedral,
    PentagonalBipyramidal,
}

impl ElectronGeometry {
    pub fn name(self) -> &'static str {
        match self {
            ElectronGeometry::Linear => "linear",
            ElectronGeometry::TrigonalPlanar => "trigonal planar",
            ElectronGeometry::Tetrahedral => "tetrahedral",
            ElectronGeometry::TrigonalBipyramidal => "trigonal bipyramidal",
            ElectronGeometry::Octahedral => "octahedral",
            ElectronGeometry::PentagonalBipyramidal => "pentagonal bipyramidal",
        }
    }

    /// Geometry, hybridization and ideal angle for a bare domain count.
    fn for_pairs(pairs: u8) -> Option<(ElectronGeometry, Hybridization, &'static str)> {
        use ElectronGeometry::*;
        use Hybridization::*;
        Some(match pairs {
            1 => (Linear, S, NO_ANGLE),
            2 => (Linear, SP, "180°"),
            3 => (TrigonalPlanar, SP2, "120°"),
            4 => (Tetrahedral, SP3, "109.5°"),
            5 => (TrigonalBipyramidal, SP3D, "90°, 120°"),
            6 => (Octahedral, SP3D2, "90°"),
            7 => (PentagonalBipyramidal, SP3D3, "72°, 90°"),
            _ => return None,
        })
    }

    /// The molecular shape that shares this geometry's name.
    fn as_shape(self) -> Shape {
        match self {
            ElectronGeometry::Linear => Shape::Linear,
            ElectronGeometry::TrigonalPlanar => Shape::TrigonalPlanar,
            ElectronGeometry::Tetrahedral => Shape::Tetrahedral,
            ElectronGeometry::TrigonalBipyramidal => Shape::TrigonalBipyramidal,
            ElectronGeometry::Octahedral => Shape::Octahedral,
            ElectronGeometry::PentagonalBipyramidal => Shape::PentagonalBipyramidal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    NoBondedAtoms,
    Linear,
    Bent,
    TrigonalPlanar,
    TrigonalPyramidal,
    Tetrahedral,
    Seesaw,
    TShaped,
    Planar,
    TrigonalBipyramidal,
    SquarePyramidal,
    SquarePlanar,
    Octahedral,
    PentagonalPlanar,
    PentagonalPyramidal,
    PentagonalBipyramidal,
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::NoBondedAtoms => "no bonded atoms",
            Shape::Linear => "linear",
            Shape::Bent => "bent",
            Shape::TrigonalPlanar => "trigonal planar",
            Shape::TrigonalPyramidal => "trigonal pyramidal",
            Shape::Tetrahedral => "tetrahedral",
            Shape::Seesaw => "seesaw",
            Shape::TShaped => "T-shaped",
            Shape::Planar => "planar",
            Shape::TrigonalBipyramidal => "trigonal bipyramidal",
            Shape::SquarePyramidal => "square pyramidal",
            Shape::SquarePlanar => "square planar",
            Shape::Octahedral => "octahedral",
            Shape::PentagonalPlanar => "pentagonal planar",
            Shape::PentagonalPyramidal => "pentagonal pyramidal",
            Shape::PentagonalBipyramidal => "pentagonal bipyramidal",
        }
    }
}

macro_rules! impl_display_via {
    ($ty:ident, $method:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.$method())
            }
        }
    };
}

impl_display_via!(Hybridization, label);
impl_display_via!(ElectronGeometry, name);
impl_display_via!(Shape, name);

const NO_ANGLE: &str = "no bond angle";

struct Row {
    bond_pairs: u8,
    lone_pairs: u8,
    geometry: ElectronGeometry,
    shape: Shape,
    hybridization: Hybridization,
    angle: &'static str,
}

macro_rules! row {
    ($bp:literal, $lp:literal, $geom:ident, $shape:ident, $hyb:ident, $angle:expr) => {
        Row {
            bond_pairs: $bp,
            lone_pairs: $lp,
            geometry: ElectronGeometry::$geom,
            shape: Shape::$shape,
            hybridization: Hybridization::$hyb,
            angle: $angle,
        }
    };
}

// Keyed by (bond pairs, lone pairs); valence pairs is their sum.
static TABLE: [Row; 28] = [
    row!(1, 0, Linear, Linear, S, NO_ANGLE),
    row!(2, 0, Linear, Linear, SP, "180°"),
    row!(1, 1, Linear, Linear, SP, NO_ANGLE),
    row!(3, 0, TrigonalPlanar, TrigonalPlanar, SP2, "120°"),
    row!(2, 1, TrigonalPlanar, Bent, SP2, "<120°"),
    row!(1, 2, TrigonalPlanar, Linear, SP2, NO_ANGLE),
    row!(4, 0, Tetrahedral, Tetrahedral, SP3, "109.5°"),
    row!(3, 1, Tetrahedral, TrigonalPyramidal, SP3, "<109.5° (~107°)"),
    row!(2, 2, Tetrahedral, Bent, SP3, "<109.5° (~104.5°)"),
    row!(1, 3, Tetrahedral, Linear, SP3, NO_ANGLE),
    row!(5, 0, TrigonalBipyramidal, TrigonalBipyramidal, SP3D, "90°, 120°"),
    row!(4, 1, TrigonalBipyramidal, Seesaw, SP3D, "<90°, <120°"),
    row!(3, 2, TrigonalBipyramidal, TShaped, SP3D, "<90°"),
    row!(2, 3, TrigonalBipyramidal, Linear, SP3D, "180°"),
    row!(1, 4, TrigonalBipyramidal, Linear, SP3D, NO_ANGLE),
    row!(6, 0, Octahedral, Octahedral, SP3D2, "90°"),
    row!(5, 1, Octahedral, SquarePyramidal, SP3D2, "<90°"),
    row!(4, 2, Octahedral, SquarePlanar, SP3D2, "90°"),
    row!(3, 3, Octahedral, TShaped, SP3D2, "<90°"),
    row!(2, 4, Octahedral, Linear, SP3D2, "180°"),
    row!(1, 5, Octahedral, Linear, SP3D2, NO_ANGLE),
    row!(7, 0, PentagonalBipyramidal, PentagonalBipyramidal, SP3D3, "72°, 90°"),
    row!(6, 1, PentagonalBipyramidal, PentagonalPyramidal, SP3D3, "72°, 90°"),
    row!(5, 2, PentagonalBipyramidal, PentagonalPlanar, SP3D3, "72°"),
    // Lone pairs take both axial sites first, then spread around the ring.
    row!(4, 3, PentagonalBipyramidal, Planar, SP3D3, "72°, 144°"),
    row!(3, 4, PentagonalBipyramidal, Planar, SP3D3, "72°, 144°"),
    row!(2, 5, PentagonalBipyramidal, Bent, SP3D3, "144°"),
    row!(1, 6, PentagonalBipyramidal, Linear, SP3D3, NO_ANGLE),
];

/// VSEPR classification of one structure's central atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VseprInfo {
    pub valence_pairs: u8,
    pub bond_pairs: u8,
    pub lone_pairs: u8,
    pub electron_geometry: ElectronGeometry,
    pub shape: Shape,
    pub hybridization: Hybridization,
    pub bond_angle: &'static str,
    /// Bonds anywhere in the structure (one σ each).
    pub sigma_bonds: u8,
    /// Extra bond order anywhere in the structure.
    pub pi_bonds: u8,
    /// `false` when no table row matched and the result was derived from the
    /// domain count alone.
    pub from_table: bool,
}

/// Classifies the electron domains around `central`.
///
/// Returns `None` if `central` is not an atom of `structure` or the domain
/// count falls outside 1–7.
pub fn classify(structure: &LewisStructure, central: NodeIndex) -> Option<VseprInfo> {
    if !structure.contains_atom(central) {
        return None;
    }

    let bond_pairs = central_bonds(structure, central).count() as u8;
    let lone_pairs = structure.atom(central).lone_pairs;
    let valence_pairs = bond_pairs + lone_pairs;

    let sigma_bonds = structure.bond_count() as u8;
    let pi_bonds: u8 = structure
        .bonds()
        .map(|e| structure.bond(e).order.pi_bonds())
        .sum();

    let base = VseprInfo {
        valence_pairs,
        bond_pairs,
        lone_pairs,
        electron_geometry: ElectronGeometry::Linear,
        shape: Shape::Linear,
        hybridization: Hybridization::S,
        bond_angle: NO_ANGLE,
        sigma_bonds,
        pi_bonds,
        from_table: true,
    };

    if let Some(row) = TABLE
        .iter()
        .find(|r| r.bond_pairs == bond_pairs && r.lone_pairs == lone_pairs)
    {
        return Some(VseprInfo {
            electron_geometry: row.geometry,
            shape: row.shape,
            hybridization: row.hybridization,
            bond_angle: row.angle,
            ..base
        });
    }

    let (geometry, hybridization, angle) = ElectronGeometry::for_pairs(valence_pairs)?;
    let shape = match bond_pairs {
        0 => Shape::NoBondedAtoms,
        1 => Shape::Linear,
        _ => geometry.as_shape(),
    };
    Some(VseprInfo {
        electron_geometry: geometry,
        shape,
        hybridization,
        bond_angle: angle,
        from_table: false,
        ..base
    })
}
