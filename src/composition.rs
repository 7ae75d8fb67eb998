//! The user-editable input: which atoms, and the net charge.

use std::fmt;

use crate::element::{Element, NUM_ELEMENTS};
use crate::error::CompositionError;
use crate::mol::{MAX_ATOMS, MAX_HEAVY_ATOMS};

/// An ordered list of atoms plus a net charge.
///
/// Atom order matters: it fixes node indices in every generated structure
/// and breaks ties when choosing a central atom.
///
/// # Examples
///
/// ```
/// use lewisdot::{Composition, Element};
///
/// let nitrate = Composition::new(&[Element::N, Element::O, Element::O, Element::O], -1).unwrap();
/// assert_eq!(nitrate.valence_electron_total(), 24);
/// assert_eq!(nitrate.to_string(), "NO3 -1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    atoms: Vec<Element>,
    charge: i8,
}

impl Composition {
    pub fn empty() -> Self {
        Self {
            atoms: Vec::with_capacity(MAX_ATOMS),
            charge: 0,
        }
    }

    pub fn new(atoms: &[Element], charge: i8) -> Result<Self, CompositionError> {
        let mut comp = Self::empty();
        for &e in atoms {
            comp.push(e)?;
        }
        comp.charge = charge;
        Ok(comp)
    }

    /// Builds a composition from element symbols, e.g. `["S", "O", "O"]`.
    pub fn from_symbols<'a, I>(symbols: I, charge: i8) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut comp = Self::empty();
        for sym in symbols {
            let e = Element::from_symbol(sym)
                .ok_or_else(|| CompositionError::UnknownElement(sym.to_string()))?;
            comp.push(e)?;
        }
        comp.charge = charge;
        Ok(comp)
    }

    pub fn atoms(&self) -> &[Element] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn charge(&self) -> i8 {
        self.charge
    }

    pub fn set_charge(&mut self, charge: i8) {
        self.charge = charge;
    }

    /// Steps the charge through 0, +1, +2, -1, -2 and back to 0.
    pub fn cycle_charge(&mut self) {
        self.charge = match self.charge {
            0 => 1,
            1 => 2,
            2 => -1,
            -1 => -2,
            _ => 0,
        };
    }

    pub fn heavy_atom_count(&self) -> usize {
        self.atoms.iter().filter(|e| !e.is_hydrogen()).count()
    }

    pub fn push(&mut self, element: Element) -> Result<(), CompositionError> {
        if self.atoms.len() >= MAX_ATOMS {
            return Err(CompositionError::TooManyAtoms { limit: MAX_ATOMS });
        }
        self.atoms.push(element);
        Ok(())
    }

    /// Like [`push`](Composition::push), but also holds non-hydrogen atoms to
    /// [`MAX_HEAVY_ATOMS`], which keeps interactively built molecules drawable.
    pub fn pick(&mut self, element: Element) -> Result<(), CompositionError> {
        if !element.is_hydrogen() && self.heavy_atom_count() >= MAX_HEAVY_ATOMS {
            return Err(CompositionError::TooManyHeavyAtoms {
                element,
                limit: MAX_HEAVY_ATOMS,
            });
        }
        self.push(element)
    }

    /// Removes the most recently added atom. Emptying the list also resets
    /// the charge.
    pub fn pop(&mut self) -> Option<Element> {
        let e = self.atoms.pop();
        if self.atoms.is_empty() {
            self.charge = 0;
        }
        e
    }

    pub fn clear(&mut self) {
        self.atoms.clear();
        self.charge = 0;
    }

    /// How many atoms of `element` the composition holds.
    pub fn count_of(&self, element: Element) -> usize {
        self.atoms.iter().filter(|&&e| e == element).count()
    }

    /// Sum of valence electrons minus the charge. Negative when the charge
    /// removes more electrons than exist.
    pub fn valence_electron_total(&self) -> i32 {
        let total: i32 = self
            .atoms
            .iter()
            .map(|e| i32::from(e.valence_electrons()))
            .sum();
        total - i32::from(self.charge)
    }

    /// Formula in element-table order, e.g. `"H2O"`, `"O4S -2"`.
    pub fn formula(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts = [0usize; NUM_ELEMENTS];
        for e in &self.atoms {
            counts[e.index()] += 1;
        }
        for e in Element::ALL {
            match counts[e.index()] {
                0 => {}
                1 => write!(f, "{}", e)?,
                n => write!(f, "{}{}", e, n)?,
            }
        }
        if self.charge > 0 {
            write!(f, " +{}", self.charge)?;
        } else if self.charge < 0 {
            write!(f, " {}", self.charge)?;
        }
        Ok(())
    }
}
