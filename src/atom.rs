use crate::element::Element;

/// One atom of a Lewis structure.
///
/// The element is fixed by the composition; lone pairs and formal charge
/// are what distinguish one bonding arrangement from another.
///
/// # Examples
///
/// ```
/// use lewisdot::{Element, LewisAtom};
///
/// let oxygen = LewisAtom::new(Element::O);
/// assert_eq!(oxygen.lone_pairs, 0);
/// assert_eq!(oxygen.formal_charge, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LewisAtom {
    pub element: Element,
    /// Non-bonding electron pairs owned by this atom.
    pub lone_pairs: u8,
    /// Valence electrons minus non-bonding electrons minus half the bonding
    /// electrons. Derived; refreshed by
    /// [`recompute_formal_charges`](crate::rules::recompute_formal_charges).
    pub formal_charge: i8,
}

impl LewisAtom {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            lone_pairs: 0,
            formal_charge: 0,
        }
    }
}

impl crate::traits::HasElement for LewisAtom {
    fn element(&self) -> Element {
        self.element
    }
}

impl crate::traits::HasLonePairs for LewisAtom {
    fn lone_pairs(&self) -> u8 {
        self.lone_pairs
    }
}

impl crate::traits::HasLonePairsMut for LewisAtom {
    fn lone_pairs_mut(&mut self) -> &mut u8 {
        &mut self.lone_pairs
    }
}

impl crate::traits::HasFormalCharge for LewisAtom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasFormalChargeMut for LewisAtom {
    fn formal_charge_mut(&mut self) -> &mut i8 {
        &mut self.formal_charge
    }
}
