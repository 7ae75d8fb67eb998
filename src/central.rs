//! Choosing the central atom.
//!
//! Every plausible center gets a full structure built around it; the
//! successful ones are ranked and the best is kept. Ties keep the candidate
//! seen first in composition order.

use petgraph::graph::NodeIndex;

use crate::composition::Composition;
use crate::config::Config;
use crate::element::Element;
use crate::error::InvalidReason;
use crate::lewis::build_structure;
use crate::mol::LewisStructure;
use crate::rules::charge_separation;

/// The winning center and the structure built around it.
#[derive(Debug, Clone)]
pub struct Selection {
    pub central: NodeIndex,
    pub structure: LewisStructure,
}

/// Atoms worth trying as the center, in composition order.
///
/// Non-hydrogen, non-terminal atoms when there are any, otherwise every
/// non-hydrogen atom, otherwise the first atom.
pub fn candidates(composition: &Composition) -> Vec<NodeIndex> {
    let atoms = composition.atoms();
    let indices = |keep: fn(Element) -> bool| -> Vec<NodeIndex> {
        atoms
            .iter()
            .enumerate()
            .filter(|&(_, &e)| keep(e))
            .map(|(i, _)| NodeIndex::new(i))
            .collect()
    };

    let hubs = indices(|e| !e.is_hydrogen() && !e.is_terminal_kind());
    if !hubs.is_empty() {
        return hubs;
    }
    let heavy = indices(|e| !e.is_hydrogen());
    if !heavy.is_empty() {
        return heavy;
    }
    if atoms.is_empty() {
        Vec::new()
    } else {
        vec![NodeIndex::new(0)]
    }
}

/// Ranking key, smaller is better: total |formal charge|, charged atom
/// count, |formal charge| on the center, how common the center's element
/// is, terminal-kind centers last, then electronegativity, period and
/// atomic number.
type Score = (u16, usize, u8, usize, bool, u8, u8, u8);

fn score(composition: &Composition, structure: &LewisStructure, central: NodeIndex) -> Score {
    let (total_abs, charged) = charge_separation(structure);
    let center = structure.atom(central);
    let e = center.element;
    (
        total_abs,
        charged,
        center.formal_charge.unsigned_abs(),
        composition.count_of(e),
        e.is_terminal_kind(),
        e.electronegativity(),
        e.period(),
        e.atomic_num(),
    )
}

/// Builds a structure around every candidate and returns the best.
///
/// When no candidate works, the error is the reason the first candidate
/// failed.
pub fn select(composition: &Composition, config: &Config) -> Result<Selection, InvalidReason> {
    let mut best: Option<(Score, Selection)> = None;
    let mut first_failure = None;

    for central in candidates(composition) {
        let element = composition.atoms()[central.index()];
        match build_structure(composition, central, config) {
            Ok(structure) => {
                let key = score(composition, &structure, central);
                log::debug!("center {} ({}): ok, score {:?}", central.index(), element, key);
                if best.as_ref().map_or(true, |(b, _)| key < *b) {
                    best = Some((key, Selection { central, structure }));
                }
            }
            Err(reason) => {
                log::debug!("center {} ({}): {}", central.index(), element, reason);
                first_failure.get_or_insert(reason);
            }
        }
    }

    match best {
        Some((key, selection)) => {
            log::debug!("chose center {} with score {:?}", selection.central.index(), key);
            Ok(selection)
        }
        None => Err(first_failure.unwrap_or(InvalidReason::NoAtoms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(atoms: &[Element], charge: i8) -> Composition {
        Composition::new(atoms, charge).unwrap()
    }

    fn indices(v: Vec<NodeIndex>) -> Vec<usize> {
        v.into_iter().map(|i| i.index()).collect()
    }

    #[test]
    fn candidates_skip_hydrogen_and_terminals() {
        use Element::*;
        assert_eq!(indices(candidates(&comp(&[H, C, H, O], 0))), vec![1, 3]);
        assert_eq!(indices(candidates(&comp(&[F, S, F, F, F], 0))), vec![1]);
    }

    #[test]
    fn candidates_fall_back_to_terminals_then_first_atom() {
        use Element::*;
        assert_eq!(indices(candidates(&comp(&[H, F], 0))), vec![1]);
        assert_eq!(indices(candidates(&comp(&[Cl, Cl], 0))), vec![0, 1]);
        assert_eq!(indices(candidates(&comp(&[H, H], 0))), vec![0]);
        assert!(candidates(&Composition::empty()).is_empty());
    }

    #[test]
    fn carbon_beats_oxygen_in_carbon_dioxide() {
        use Element::*;
        let sel = select(&comp(&[O, C, O], 0), &Config::default()).unwrap();
        assert_eq!(sel.central, NodeIndex::new(1));
    }

    #[test]
    fn rarer_element_wins_a_charge_tie() {
        use Element::*;
        // N and O centers both leave three units of charge; N is unique.
        let sel = select(&comp(&[O, O, N, O], -1), &Config::default()).unwrap();
        assert_eq!(sel.central, NodeIndex::new(2));
    }

    #[test]
    fn sulfur_centers_sulfate() {
        use Element::*;
        let sel = select(&comp(&[S, O, O, O, O], -2), &Config::default()).unwrap();
        assert_eq!(sel.central, NodeIndex::new(0));
    }

    #[test]
    fn first_failure_is_reported() {
        use Element::*;
        let err = select(&comp(&[He, He], 0), &Config::default()).unwrap_err();
        assert_eq!(err, InvalidReason::Skeleton);
    }

    #[test]
    fn failure_reason_comes_from_the_first_candidate() {
        use Element::*;
        let config = Config::default();
        let reasons = |c: &Composition| -> Vec<InvalidReason> {
            candidates(c)
                .into_iter()
                .map(|center| build_structure(c, center, &config).unwrap_err())
                .collect()
        };

        // A chlorine center leaves sodium short of an octet; a sodium
        // center has no bond left for the hydrogens.
        let cl_first = comp(&[Cl, Na, H, H], 0);
        assert_eq!(reasons(&cl_first), vec![InvalidReason::ShellRule, InvalidReason::Skeleton]);
        assert_eq!(select(&cl_first, &config).unwrap_err(), InvalidReason::ShellRule);

        let na_first = comp(&[Na, Cl, H, H], 0);
        assert_eq!(reasons(&na_first), vec![InvalidReason::Skeleton, InvalidReason::ShellRule]);
        assert_eq!(select(&na_first, &config).unwrap_err(), InvalidReason::Skeleton);
    }
}
