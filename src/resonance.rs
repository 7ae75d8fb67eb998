//! Resonance contributors reachable by moving a π bond between like atoms on
//! the central atom.
//!
//! The search is greedy and single-hop: from each accepted structure, a
//! multiple bond on the center is dropped to single and its extra order is
//! handed to another central bond toward the same element. It does not look
//! for delocalization away from the center.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::mol::LewisStructure;
use crate::rules::{
    central_bonds, check_charge_balance, check_shells, is_protonated_terminal_oxygen,
    lower_to_single, raise_bond, recompute_formal_charges, same_arrangement,
};

/// Expands `seed` into at most `cap` distinct structures, `seed` first.
///
/// Structures are explored in the order they are found. Every returned
/// structure balances to `charge` and passes the shell rules.
pub fn expand(
    seed: LewisStructure,
    central: NodeIndex,
    charge: i8,
    cap: usize,
) -> Vec<LewisStructure> {
    let mut found = Vec::with_capacity(cap);
    found.push(seed);

    let mut next_seed = 0;
    while next_seed < found.len() && found.len() < cap {
        let seed = found[next_seed].clone();
        next_seed += 1;

        for (src, src_term) in central_bonds(&seed, central) {
            if found.len() >= cap {
                break;
            }
            let src_order = seed.bond(src).order;
            if src_order == BondOrder::Single
                || is_protonated_terminal_oxygen(&seed, central, src_term)
            {
                continue;
            }
            let shift = src_order.pi_bonds();

            for (dst, dst_term) in central_bonds(&seed, central) {
                if found.len() >= cap {
                    break;
                }
                if dst == src
                    || !accepts_shift(&seed, central, src_term, dst, dst_term, src_order)
                {
                    continue;
                }

                let Some(candidate) = shifted(&seed, (src, src_term), (dst, dst_term), shift) else {
                    continue;
                };
                if check_charge_balance(&candidate, charge).is_err()
                    || check_shells(&candidate, central).is_err()
                    || found.iter().any(|s| same_arrangement(s, &candidate))
                {
                    continue;
                }

                log::trace!(
                    "resonance #{}: bond {} -> bond {} (shift {})",
                    found.len(),
                    src.index(),
                    dst.index(),
                    shift
                );
                found.push(candidate);
            }
        }
    }

    found
}

/// Whether `dst` can take the π order `src` gives up: same element on the
/// far end, not hydrogen or a protonated oxygen, currently lower order, and
/// enough lone pairs to donate.
fn accepts_shift(
    seed: &LewisStructure,
    central: NodeIndex,
    src_term: NodeIndex,
    dst: EdgeIndex,
    dst_term: NodeIndex,
    src_order: BondOrder,
) -> bool {
    let term = seed.atom(dst_term);
    let shift = src_order.pi_bonds();
    term.element == seed.atom(src_term).element
        && !term.element.is_hydrogen()
        && !is_protonated_terminal_oxygen(seed, central, dst_term)
        && seed.bond(dst).order < src_order
        && seed.bond(dst).order.raised(shift).is_some()
        && term.lone_pairs >= shift
}

/// Copy of `seed` with `src` dropped to single and `dst` raised by `shift`,
/// moving `shift` lone pairs from the `dst` terminal to the `src` terminal.
fn shifted(
    seed: &LewisStructure,
    (src, src_term): (EdgeIndex, NodeIndex),
    (dst, dst_term): (EdgeIndex, NodeIndex),
    shift: u8,
) -> Option<LewisStructure> {
    let mut candidate = seed.clone();
    if !raise_bond(&mut candidate, dst, dst_term, shift) {
        return None;
    }
    lower_to_single(&mut candidate, src, src_term);

    recompute_formal_charges(&mut candidate);
    Some(candidate)
}
