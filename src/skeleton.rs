//! Single-bond connectivity for a chosen central atom.
//!
//! The skeleton is built in three steps. The central atom and every atom
//! able to form three or more bonds make up a chain (the backbone). Other
//! heavy atoms hang off the best-scoring connected host. Hydrogens come
//! last, kept away from crowded hosts. Every bond spends two electrons from
//! the shared pool and one unit of bond capacity on each end.

use std::cmp::Reverse;

use petgraph::graph::NodeIndex;

use crate::bond::Bond;
use crate::config::HalogenValence;
use crate::error::InvalidReason;
use crate::mol::{LewisStructure, MAX_ATOMS};
use crate::rules::heavy_neighbor_count;

const CENTRAL_HOST_BONUS: i16 = 12;
const HYDROGEN_CROWDING_PENALTY: i16 = 8;
const HYDROGEN_ON_CENTER_PENALTY: i16 = 4;

/// Remaining bond capacity per atom while the skeleton grows.
struct Capacity([u8; MAX_ATOMS]);

impl Capacity {
    fn remaining(&self, atom: NodeIndex) -> u8 {
        self.0[atom.index()]
    }
}

/// Connects every atom of `structure` with single bonds, spending electrons
/// from `pool`.
///
/// `structure` must hold the atoms and no bonds yet. Fails with
/// [`InvalidReason::Skeleton`] if the pool runs dry, a bond limit would be
/// exceeded, or some atom cannot be reached.
pub fn build_skeleton(
    structure: &mut LewisStructure,
    central: NodeIndex,
    charge: i8,
    halogens: HalogenValence,
    pool: &mut i32,
) -> Result<(), InvalidReason> {
    let n = structure.atom_count();
    if n <= 1 {
        return Ok(());
    }

    let mut cap = Capacity([0; MAX_ATOMS]);
    for idx in structure.atoms() {
        cap.0[idx.index()] = structure
            .atom(idx)
            .element
            .bond_limit(idx == central, charge, halogens);
    }

    if n == 3 {
        for i in (0..n).map(NodeIndex::new).filter(|&i| i != central) {
            add_single_bond(structure, central, i, pool, &mut cap)?;
        }
        return Ok(());
    }

    let mut connected = [false; MAX_ATOMS];
    connected[central.index()] = true;

    let mut backbone: Vec<NodeIndex> = (0..n)
        .map(NodeIndex::new)
        .filter(|&i| {
            let e = structure.atom(i).element;
            i != central && !e.is_hydrogen() && !e.is_halogen() && e.bond_capacity() >= 3
        })
        .collect();
    backbone.sort_by_key(|&i| {
        let e = structure.atom(i).element;
        let limit = i16::from(e.bond_limit(false, charge, halogens));
        Reverse(10 * limit - i16::from(e.electronegativity()))
    });

    let mut prev = central;
    for next in backbone {
        add_single_bond(structure, prev, next, pool, &mut cap)?;
        connected[next.index()] = true;
        prev = next;
    }

    for attach_hydrogens in [false, true] {
        for i in (0..n).map(NodeIndex::new) {
            if connected[i.index()] {
                continue;
            }
            if structure.atom(i).element.is_hydrogen() != attach_hydrogens {
                continue;
            }
            if cap.remaining(i) == 0 {
                return Err(InvalidReason::Skeleton);
            }

            let host = best_host(structure, central, i, &connected, &cap)
                .or_else(|| first_open_host(n, i, &connected, &cap))
                .ok_or(InvalidReason::Skeleton)?;
            add_single_bond(structure, host, i, pool, &mut cap)?;
            connected[i.index()] = true;
        }
    }

    if connected[..n].iter().all(|&c| c) {
        Ok(())
    } else {
        Err(InvalidReason::Skeleton)
    }
}

/// Highest-scoring connected, non-hydrogen atom with spare capacity.
/// Ties go to the lowest index.
fn best_host(
    structure: &LewisStructure,
    central: NodeIndex,
    guest: NodeIndex,
    connected: &[bool; MAX_ATOMS],
    cap: &Capacity,
) -> Option<NodeIndex> {
    let guest_is_h = structure.atom(guest).element.is_hydrogen();
    let mut best: Option<(NodeIndex, i16)> = None;

    for j in structure.atoms() {
        if j == guest || !connected[j.index()] || cap.remaining(j) == 0 {
            continue;
        }
        let host = structure.atom(j).element;
        if host.is_hydrogen() {
            continue;
        }

        let mut score = 10 * i16::from(cap.remaining(j)) - i16::from(host.electronegativity());
        if guest_is_h {
            score -= HYDROGEN_CROWDING_PENALTY * heavy_neighbor_count(structure, j) as i16;
            if j == central {
                score -= HYDROGEN_ON_CENTER_PENALTY;
            }
        } else if j == central {
            score += CENTRAL_HOST_BONUS;
        }

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((j, score));
        }
    }

    best.map(|(j, _)| j)
}

/// Fallback host: first connected atom with spare capacity, hydrogen included.
fn first_open_host(
    n: usize,
    guest: NodeIndex,
    connected: &[bool; MAX_ATOMS],
    cap: &Capacity,
) -> Option<NodeIndex> {
    (0..n)
        .map(NodeIndex::new)
        .find(|&j| j != guest && connected[j.index()] && cap.remaining(j) > 0)
}

fn add_single_bond(
    structure: &mut LewisStructure,
    a: NodeIndex,
    b: NodeIndex,
    pool: &mut i32,
    cap: &mut Capacity,
) -> Result<(), InvalidReason> {
    if *pool < 2 || cap.remaining(a) == 0 || cap.remaining(b) == 0 {
        return Err(InvalidReason::Skeleton);
    }
    structure
        .add_bond(a, b, Bond::single())
        .ok_or(InvalidReason::Skeleton)?;
    cap.0[a.index()] -= 1;
    cap.0[b.index()] -= 1;
    *pool -= 2;
    Ok(())
}
