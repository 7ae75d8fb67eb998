//! Entry point: from a composition to its Lewis structures.

use petgraph::graph::NodeIndex;

use crate::atom::LewisAtom;
use crate::central::{select, Selection};
use crate::composition::Composition;
use crate::config::Config;
use crate::electrons::satisfy_shells;
use crate::error::{reason_message, InvalidReason};
use crate::mol::LewisStructure;
use crate::resonance::expand;
use crate::skeleton::build_skeleton;
use crate::vsepr::{classify, VseprInfo};

/// Everything derived from one composition: the chosen central atom, its
/// resonance structures, and the reason when there are none.
///
/// Built fresh by [`generate`]; there is no incremental update.
///
/// # Examples
///
/// ```
/// use lewisdot::{generate, Composition, Element};
///
/// let co2 = Composition::new(&[Element::C, Element::O, Element::O], 0).unwrap();
/// let lewis = generate(&co2);
/// assert!(lewis.is_valid());
/// assert_eq!(lewis.central(), Some(0));
/// assert_eq!(lewis.structures().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Lewis {
    central: Option<NodeIndex>,
    structures: Vec<LewisStructure>,
    current: usize,
    total_valence_electrons: i32,
    invalid_reason: Option<InvalidReason>,
}

impl Lewis {
    fn invalid(total_valence_electrons: i32, reason: InvalidReason) -> Self {
        Self {
            central: None,
            structures: Vec::new(),
            current: 0,
            total_valence_electrons,
            invalid_reason: Some(reason),
        }
    }

    /// Composition index of the central atom.
    pub fn central(&self) -> Option<usize> {
        self.central.map(|c| c.index())
    }

    pub fn central_node(&self) -> Option<NodeIndex> {
        self.central
    }

    pub fn structures(&self) -> &[LewisStructure] {
        &self.structures
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The structure currently selected for display.
    pub fn current(&self) -> Option<&LewisStructure> {
        self.structures.get(self.current)
    }

    /// Moves to the next resonance structure, wrapping around.
    pub fn next_structure(&mut self) {
        if !self.structures.is_empty() {
            self.current = (self.current + 1) % self.structures.len();
        }
    }

    /// Moves to the previous resonance structure, wrapping around.
    pub fn prev_structure(&mut self) {
        let len = self.structures.len();
        if len > 0 {
            self.current = (self.current + len - 1) % len;
        }
    }

    pub fn total_valence_electrons(&self) -> i32 {
        self.total_valence_electrons
    }

    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        self.invalid_reason
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_reason.is_none() && !self.structures.is_empty()
    }

    /// Numeric reason code, 0 when generation succeeded.
    pub fn reason_code(&self) -> u8 {
        self.invalid_reason.map_or(0, InvalidReason::code)
    }

    pub fn message(&self) -> &'static str {
        reason_message(self.reason_code())
    }

    /// VSEPR classification of the central atom in structure `index`.
    pub fn vsepr(&self, index: usize) -> Option<VseprInfo> {
        classify(self.structures.get(index)?, self.central?)
    }
}

/// Generates Lewis structures with the default [`Config`].
pub fn generate(composition: &Composition) -> Lewis {
    generate_with(composition, &Config::default())
}

pub fn generate_with(composition: &Composition, config: &Config) -> Lewis {
    let total = composition.valence_electron_total();
    log::debug!("generating {} ({} valence electrons)", composition, total);

    if composition.is_empty() {
        return Lewis::invalid(0, InvalidReason::NoAtoms);
    }
    if total < 0 {
        return Lewis::invalid(total, InvalidReason::NegativeElectrons);
    }
    if total % 2 != 0 {
        return Lewis::invalid(total, InvalidReason::OddElectrons);
    }

    let Selection { central, structure } = match select(composition, config) {
        Ok(selection) => selection,
        Err(reason) => {
            log::debug!("{}: {}", composition, reason);
            return Lewis::invalid(total, reason);
        }
    };

    let structures = expand(structure, central, composition.charge(), config.resonance_cap());
    log::debug!(
        "{}: center {}, {} resonance structure(s)",
        composition,
        central.index(),
        structures.len()
    );

    Lewis {
        central: Some(central),
        structures,
        current: 0,
        total_valence_electrons: total,
        invalid_reason: None,
    }
}

/// Builds one complete structure around `central`: atoms in composition
/// order, single-bond skeleton, then lone pairs and promotions.
pub fn build_structure(
    composition: &Composition,
    central: NodeIndex,
    config: &Config,
) -> Result<LewisStructure, InvalidReason> {
    let mut structure = LewisStructure::new();
    for &e in composition.atoms() {
        structure
            .add_atom(LewisAtom::new(e))
            .ok_or(InvalidReason::Skeleton)?;
    }

    let mut pool = composition.valence_electron_total();
    build_skeleton(
        &mut structure,
        central,
        composition.charge(),
        config.halogen_valence,
        &mut pool,
    )?;
    satisfy_shells(&mut structure, central, composition.charge(), pool)?;
    Ok(structure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn comp(atoms: &[Element], charge: i8) -> Composition {
        Composition::new(atoms, charge).unwrap()
    }

    #[test]
    fn prechecks_run_in_order() {
        use Element::*;
        let empty = generate(&Composition::empty());
        assert_eq!(empty.invalid_reason(), Some(InvalidReason::NoAtoms));
        assert_eq!(empty.total_valence_electrons(), 0);

        let negative = generate(&comp(&[H], 2));
        assert_eq!(negative.invalid_reason(), Some(InvalidReason::NegativeElectrons));
        assert_eq!(negative.total_valence_electrons(), -1);

        let odd = generate(&comp(&[N, O], 0));
        assert_eq!(odd.invalid_reason(), Some(InvalidReason::OddElectrons));
        assert_eq!(odd.reason_code(), 3);
        assert!(odd.structures().is_empty());
        assert_eq!(odd.central(), None);
    }

    #[test]
    fn navigation_wraps() {
        use Element::*;
        let mut lewis = generate(&comp(&[N, O, O, O], -1));
        assert_eq!(lewis.structures().len(), 3);
        assert_eq!(lewis.current_index(), 0);
        lewis.prev_structure();
        assert_eq!(lewis.current_index(), 2);
        lewis.next_structure();
        lewis.next_structure();
        assert_eq!(lewis.current_index(), 1);
        assert!(lewis.current().is_some());
    }

    #[test]
    fn navigation_on_failure_is_inert() {
        let mut lewis = generate(&Composition::empty());
        lewis.next_structure();
        lewis.prev_structure();
        assert_eq!(lewis.current_index(), 0);
        assert!(lewis.current().is_none());
        assert!(lewis.vsepr(0).is_none());
    }

    #[test]
    fn success_reports_no_error() {
        use Element::*;
        let lewis = generate(&comp(&[O, H, H], 0));
        assert!(lewis.is_valid());
        assert_eq!(lewis.reason_code(), 0);
        assert_eq!(lewis.message(), "No error");
        assert_eq!(lewis.total_valence_electrons(), 8);
    }

    #[test]
    fn water_is_bent() {
        use Element::*;
        let lewis = generate(&comp(&[O, H, H], 0));
        let info = lewis.vsepr(0).unwrap();
        assert_eq!(info.bond_pairs, 2);
        assert_eq!(info.lone_pairs, 2);
        assert_eq!(info.shape.name(), "bent");
        assert!(lewis.vsepr(1).is_none());
    }

    #[test]
    fn resonance_cap_follows_config() {
        use Element::*;
        let config = Config {
            max_resonance: 1,
            ..Config::default()
        };
        let lewis = generate_with(&comp(&[N, O, O, O], -1), &config);
        assert_eq!(lewis.structures().len(), 1);
    }
}
