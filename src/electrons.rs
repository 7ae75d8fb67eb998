//! Lone-pair placement and bond promotion on top of a finished skeleton.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::error::InvalidReason;
use crate::mol::{LewisStructure, MAX_BONDS};
use crate::rules::{
    central_bonds, check_charge_balance, check_shells, electrons_on_atom, raise_bond,
    recompute_formal_charges,
};

/// Places the `pool` electrons left after the skeleton, satisfies the
/// central atom's shell by promoting bonds, and validates the result.
///
/// On success every atom meets its shell rule and formal charges sum to
/// `charge`.
pub fn satisfy_shells(
    structure: &mut LewisStructure,
    central: NodeIndex,
    charge: i8,
    pool: i32,
) -> Result<(), InvalidReason> {
    distribute_lone_pairs(structure, central, pool)?;
    promote_toward_central_shell(structure, central);
    if structure.atom(central).element.period() >= 3 {
        reduce_central_charge(structure, central);
    }

    recompute_formal_charges(structure);
    check_shells(structure, central)?;
    check_charge_balance(structure, charge)
}

/// Fills every non-central atom up to its required electron count, as far
/// as the pool allows, then hands the rest to the central atom.
fn distribute_lone_pairs(
    structure: &mut LewisStructure,
    central: NodeIndex,
    mut pool: i32,
) -> Result<(), InvalidReason> {
    for i in 0..structure.atom_count() {
        let idx = NodeIndex::new(i);
        if idx == central {
            continue;
        }
        let target = i32::from(structure.atom(idx).element.required_electrons(false));
        let need = target - i32::from(electrons_on_atom(structure, idx));
        if need > 0 {
            let pairs = (need / 2).min(pool / 2);
            structure.atom_mut(idx).lone_pairs = pairs as u8;
            pool -= pairs * 2;
        }
    }

    if pool > 0 {
        let pairs = pool / 2;
        structure.atom_mut(central).lone_pairs = pairs as u8;
        pool -= pairs * 2;
    }

    if pool != 0 {
        return Err(InvalidReason::LeftoverElectrons);
    }
    Ok(())
}

/// The far end of a central bond if that bond can go up one order: the
/// terminal is not hydrogen, still has a lone pair, and the bond is below
/// triple.
fn promotable(
    structure: &LewisStructure,
    central: NodeIndex,
    bond: EdgeIndex,
) -> Option<NodeIndex> {
    let term = structure.other_end(bond, central)?;
    let atom = structure.atom(term);
    if atom.element.is_hydrogen() || atom.lone_pairs == 0 {
        return None;
    }
    structure.bond(bond).order.raised(1)?;
    Some(term)
}

/// Turns terminal lone pairs into π bonds, one bond at a time in rotation,
/// until the central atom reaches its required electron count.
fn promote_toward_central_shell(structure: &mut LewisStructure, central: NodeIndex) {
    let bonds = structure.bond_count();
    if bonds == 0 {
        return;
    }
    let target = i16::from(structure.atom(central).element.required_electrons(true));
    let mut next = 0;

    for _ in 0..MAX_BONDS * 3 {
        if electrons_on_atom(structure, central) >= target {
            break;
        }
        let Some((bond, term)) = (0..bonds)
            .map(|scan| EdgeIndex::new((next + scan) % bonds))
            .find_map(|e| promotable(structure, central, e).map(|t| (e, t)))
        else {
            break;
        };
        raise_bond(structure, bond, term, 1);
        next = (bond.index() + 1) % bonds;
    }
}

/// For expanded-valence centers: while the center is positive, pull a lone
/// pair from the most negative eligible terminal into its bond.
fn reduce_central_charge(structure: &mut LewisStructure, central: NodeIndex) {
    recompute_formal_charges(structure);

    for _ in 0..MAX_BONDS {
        if structure.atom(central).formal_charge <= 0 {
            break;
        }

        let mut best: Option<(EdgeIndex, NodeIndex, i8)> = None;
        for (bond, _) in central_bonds(structure, central) {
            let Some(term) = promotable(structure, central, bond) else {
                continue;
            };
            let fc = structure.atom(term).formal_charge;
            if fc < 0 && best.map_or(true, |(_, _, b)| fc < b) {
                best = Some((bond, term, fc));
            }
        }

        let Some((bond, term, _)) = best else {
            break;
        };
        raise_bond(structure, bond, term, 1);
        recompute_formal_charges(structure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::LewisAtom;
    use crate::bond::{Bond, BondOrder};
    use crate::element::Element;
    use crate::rules::bond_order_sum;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    /// Central atom 0 singly bonded to every other atom.
    fn star(elements: &[Element]) -> LewisStructure {
        let mut s = LewisStructure::new();
        for &e in elements {
            s.add_atom(LewisAtom::new(e)).unwrap();
        }
        for i in 1..elements.len() {
            s.add_bond(n(0), n(i), Bond::single()).unwrap();
        }
        s
    }

    #[test]
    fn carbon_dioxide_gets_two_double_bonds() {
        use Element::*;
        let mut s = star(&[C, O, O]);
        satisfy_shells(&mut s, n(0), 0, 12).unwrap();
        assert_eq!(bond_order_sum(&s, n(0)), 4);
        assert_eq!(s.atom(n(0)).lone_pairs, 0);
        assert_eq!(s.atom(n(1)).lone_pairs, 2);
        assert_eq!(s.atom(n(2)).lone_pairs, 2);
    }

    #[test]
    fn water_center_takes_the_remainder() {
        use Element::*;
        let mut s = star(&[O, H, H]);
        satisfy_shells(&mut s, n(0), 0, 4).unwrap();
        assert_eq!(s.atom(n(0)).lone_pairs, 2);
        assert_eq!(s.atom(n(1)).lone_pairs, 0);
    }

    #[test]
    fn promotion_rotates_through_bonds() {
        use Element::*;
        // Nitrate: only the first bond becomes double.
        let mut s = star(&[N, O, O, O]);
        satisfy_shells(&mut s, n(0), -1, 18).unwrap();
        let orders: Vec<BondOrder> = s.bonds().map(|e| s.bond(e).order).collect();
        assert_eq!(orders, vec![BondOrder::Double, BondOrder::Single, BondOrder::Single]);
        assert_eq!(s.atom(n(0)).formal_charge, 1);
        assert_eq!(s.atom(n(2)).formal_charge, -1);
    }

    #[test]
    fn expanded_center_sheds_positive_charge() {
        use Element::*;
        let mut s = star(&[S, O, O, O, O]);
        satisfy_shells(&mut s, n(0), -2, 24).unwrap();
        assert_eq!(s.atom(n(0)).formal_charge, 0);
        assert_eq!(bond_order_sum(&s, n(0)), 6);
        let orders: Vec<BondOrder> = s.bonds().map(|e| s.bond(e).order).collect();
        assert_eq!(
            orders,
            vec![BondOrder::Double, BondOrder::Double, BondOrder::Single, BondOrder::Single]
        );
    }

    #[test]
    fn hydrogen_bonds_are_never_promoted() {
        use Element::*;
        let mut s = star(&[B, H, H, H]);
        satisfy_shells(&mut s, n(0), 0, 0).unwrap();
        assert_eq!(bond_order_sum(&s, n(0)), 3);
    }

    #[test]
    fn short_shell_is_reported() {
        use Element::*;
        // CH3+: carbon ends with six electrons and no way to gain more.
        let mut s = star(&[C, H, H, H]);
        assert_eq!(satisfy_shells(&mut s, n(0), 1, 0), Err(InvalidReason::ShellRule));
    }

    #[test]
    fn starved_terminals_break_the_shell_rule() {
        use Element::*;
        let mut s = star(&[C, O, O]);
        assert_eq!(satisfy_shells(&mut s, n(0), 0, 4), Err(InvalidReason::ShellRule));
    }
}
