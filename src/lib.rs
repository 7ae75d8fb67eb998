//! Lewis structures, resonance forms and VSEPR shapes for small molecules
//! and ions.
//!
//! ```
//! use lewisdot::{generate, Composition, Element};
//!
//! let nitrate = Composition::from_symbols(["N", "O", "O", "O"], -1).unwrap();
//! let lewis = generate(&nitrate);
//! assert_eq!(lewis.central(), Some(0));
//! assert_eq!(lewis.structures().len(), 3);
//! assert_eq!(lewis.vsepr(0).unwrap().shape.name(), "trigonal planar");
//! ```

pub mod atom;
pub mod bond;
pub mod central;
pub mod composition;
pub mod config;
pub mod electrons;
pub mod element;
pub mod error;
pub mod lewis;
pub mod mol;
pub mod resonance;
pub mod rules;
pub mod skeleton;
pub mod traits;
pub mod vsepr;

pub use atom::LewisAtom;
pub use bond::{Bond, BondOrder};
pub use composition::Composition;
pub use config::{Config, HalogenValence};
pub use element::Element;
pub use error::{reason_message, CompositionError, InvalidReason};
pub use lewis::{generate, generate_with, Lewis};
pub use mol::{LewisStructure, Mol, MAX_ATOMS, MAX_BONDS, MAX_HEAVY_ATOMS, MAX_RESONANCE};
pub use traits::{
    HasBondOrder, HasBondOrderMut, HasElement, HasFormalCharge, HasFormalChargeMut, HasLonePairs,
    HasLonePairsMut,
};
pub use vsepr::{ElectronGeometry, Hybridization, Shape, VseprInfo};

#[cfg(test)]
mod tests;
