//! Electron bookkeeping shared by every stage of structure generation.
//!
//! An atom's electron count is `2 * lone_pairs + 2 * Σ(bond orders)`: bonding
//! pairs are counted in full on both ends, which is what the octet and duet
//! rules look at. Formal charge instead splits each bonding pair evenly.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::element::Element;
use crate::error::InvalidReason;
use crate::mol::Mol;
use crate::traits::{
    HasBondOrder, HasBondOrderMut, HasElement, HasFormalCharge, HasFormalChargeMut, HasLonePairs,
    HasLonePairsMut,
};

pub fn bond_order_sum<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> i16
where
    B: HasBondOrder,
{
    mol.bonds_of(atom)
        .map(|e| i16::from(mol.bond(e).bond_order().as_u8()))
        .sum()
}

pub fn electrons_on_atom<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> i16
where
    A: HasLonePairs,
    B: HasBondOrder,
{
    2 * i16::from(mol.atom(atom).lone_pairs()) + 2 * bond_order_sum(mol, atom)
}

pub fn formal_charge<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> i16
where
    A: HasElement + HasLonePairs,
    B: HasBondOrder,
{
    let a = mol.atom(atom);
    i16::from(a.element().valence_electrons())
        - 2 * i16::from(a.lone_pairs())
        - bond_order_sum(mol, atom)
}

pub fn recompute_formal_charges<A, B>(mol: &mut Mol<A, B>)
where
    A: HasElement + HasLonePairs + HasFormalChargeMut,
    B: HasBondOrder,
{
    for i in 0..mol.atom_count() {
        let idx = NodeIndex::new(i);
        let fc = formal_charge(mol, idx);
        *mol.atom_mut(idx).formal_charge_mut() = fc as i8;
    }
}

pub fn formal_charge_sum<A, B>(mol: &Mol<A, B>) -> i16
where
    A: HasFormalCharge,
{
    mol.atoms()
        .map(|i| i16::from(mol.atom(i).formal_charge()))
        .sum()
}

/// Σ|formal charge| and the number of charged atoms.
pub fn charge_separation<A, B>(mol: &Mol<A, B>) -> (u16, usize)
where
    A: HasFormalCharge,
{
    mol.atoms().fold((0, 0), |(total, charged), i| {
        let fc = mol.atom(i).formal_charge();
        (
            total + u16::from(fc.unsigned_abs()),
            charged + usize::from(fc != 0),
        )
    })
}

/// Duet for hydrogen and helium, the element's minimum otherwise, and never
/// past eight for the first two periods.
pub fn shell_satisfied(element: Element, electrons: i16, is_central: bool) -> bool {
    if matches!(element, Element::H | Element::He) {
        return electrons == 2;
    }
    if electrons < i16::from(element.required_electrons(is_central)) {
        return false;
    }
    !(element.period() <= 2 && electrons > 8)
}

pub fn check_shells<A, B>(mol: &Mol<A, B>, central: NodeIndex) -> Result<(), InvalidReason>
where
    A: HasElement + HasLonePairs,
    B: HasBondOrder,
{
    for idx in mol.atoms() {
        let electrons = electrons_on_atom(mol, idx);
        if !shell_satisfied(mol.atom(idx).element(), electrons, idx == central) {
            return Err(InvalidReason::ShellRule);
        }
    }
    Ok(())
}

pub fn check_charge_balance<A, B>(mol: &Mol<A, B>, charge: i8) -> Result<(), InvalidReason>
where
    A: HasFormalCharge,
{
    if formal_charge_sum(mol) != i16::from(charge) {
        return Err(InvalidReason::FormalChargeSum);
    }
    Ok(())
}

/// Bonds touching `central`, each paired with the atom on the far end.
pub fn central_bonds<A, B>(
    mol: &Mol<A, B>,
    central: NodeIndex,
) -> impl Iterator<Item = (EdgeIndex, NodeIndex)> + '_ {
    mol.bonds()
        .filter_map(move |e| mol.other_end(e, central).map(|t| (e, t)))
}

pub fn has_hydrogen_neighbor<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> bool
where
    A: HasElement,
{
    mol.neighbors(atom)
        .any(|n| mol.atom(n).element().is_hydrogen())
}

pub fn heavy_neighbor_count<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> usize
where
    A: HasElement,
{
    mol.neighbors(atom)
        .filter(|&n| !mol.atom(n).element().is_hydrogen())
        .count()
}

/// An X–O–H oxygen bonded straight to the central atom. Its bond to the
/// center stays put when resonance forms are generated.
pub fn is_protonated_terminal_oxygen<A, B>(
    mol: &Mol<A, B>,
    central: NodeIndex,
    atom: NodeIndex,
) -> bool
where
    A: HasElement,
{
    mol.atom(atom).element() == Element::O
        && has_hydrogen_neighbor(mol, atom)
        && mol.bond_between(central, atom).is_some()
}

/// Raises `bond` by `by` orders, paying with `by` lone pairs from `donor`.
/// Returns `false` and leaves the graph untouched if the donor is short of
/// lone pairs or the bond would pass triple.
pub fn raise_bond<A, B>(mol: &mut Mol<A, B>, bond: EdgeIndex, donor: NodeIndex, by: u8) -> bool
where
    A: HasLonePairs + HasLonePairsMut,
    B: HasBondOrder + HasBondOrderMut,
{
    let Some(order) = mol.bond(bond).bond_order().raised(by) else {
        return false;
    };
    if mol.atom(donor).lone_pairs() < by {
        return false;
    }
    *mol.bond_mut(bond).bond_order_mut() = order;
    *mol.atom_mut(donor).lone_pairs_mut() -= by;
    true
}

/// Drops `bond` to single, handing its extra pairs to `receiver` as lone pairs.
pub fn lower_to_single<A, B>(mol: &mut Mol<A, B>, bond: EdgeIndex, receiver: NodeIndex)
where
    A: HasLonePairsMut,
    B: HasBondOrder + HasBondOrderMut,
{
    let extra = mol.bond(bond).bond_order().pi_bonds();
    *mol.bond_mut(bond).bond_order_mut() = BondOrder::Single;
    *mol.atom_mut(receiver).lone_pairs_mut() += extra;
}

/// Same bonds (endpoints and orders, in creation order) and the same lone
/// pairs on every atom. Formal charges follow from those and are ignored.
pub fn same_arrangement<A, B>(a: &Mol<A, B>, b: &Mol<A, B>) -> bool
where
    A: HasLonePairs,
    B: HasBondOrder,
{
    if a.atom_count() != b.atom_count() || a.bond_count() != b.bond_count() {
        return false;
    }
    let bonds_match = a.bonds().all(|e| {
        a.bond_endpoints(e) == b.bond_endpoints(e)
            && a.bond(e).bond_order() == b.bond(e).bond_order()
    });
    bonds_match
        && a
            .atoms()
            .all(|i| a.atom(i).lone_pairs() == b.atom(i).lone_pairs())
}
