use std::fmt;

use crate::element::Element;

/// Why no Lewis structure could be produced for a composition.
///
/// None of these are fatal: they describe compositions the engine cannot
/// draw, and the caller is expected to show [`message`](InvalidReason::message)
/// and let the user edit the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// The composition is empty.
    NoAtoms,
    /// The declared charge removes more electrons than the atoms supply.
    NegativeElectrons,
    /// The electron total is odd; radicals are not supported.
    OddElectrons,
    /// No single-bond skeleton connects every atom within bond limits.
    Skeleton,
    /// Electrons were left over after filling lone pairs.
    LeftoverElectrons,
    /// An atom misses its duet/octet or a period-2 atom exceeds eight.
    ShellRule,
    /// Formal charges do not add up to the declared charge.
    FormalChargeSum,
}

impl InvalidReason {
    pub const ALL: [InvalidReason; 7] = [
        InvalidReason::NoAtoms,
        InvalidReason::NegativeElectrons,
        InvalidReason::OddElectrons,
        InvalidReason::Skeleton,
        InvalidReason::LeftoverElectrons,
        InvalidReason::ShellRule,
        InvalidReason::FormalChargeSum,
    ];

    /// Stable numeric code; `0` is reserved for "no error".
    pub fn code(self) -> u8 {
        match self {
            InvalidReason::NoAtoms => 1,
            InvalidReason::NegativeElectrons => 2,
            InvalidReason::OddElectrons => 3,
            InvalidReason::Skeleton => 4,
            InvalidReason::LeftoverElectrons => 5,
            InvalidReason::ShellRule => 6,
            InvalidReason::FormalChargeSum => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<InvalidReason> {
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }

    pub fn message(self) -> &'static str {
        match self {
            InvalidReason::NoAtoms => "No atoms selected",
            InvalidReason::NegativeElectrons => "Invalid charge for selected atoms",
            InvalidReason::OddElectrons => "Odd electron count (radicals unsupported)",
            InvalidReason::Skeleton => "Cannot build a valid bond skeleton",
            InvalidReason::LeftoverElectrons => "Could not place all valence electrons",
            InvalidReason::ShellRule => "Octet/duet shell constraints failed",
            InvalidReason::FormalChargeSum => "Formal charge sum does not match ion charge",
        }
    }
}

/// Message for a raw reason code, as handed across to display code.
///
/// Code `0` means success; codes with no matching reason get a generic line.
pub fn reason_message(code: u8) -> &'static str {
    match code {
        0 => "No error",
        _ => InvalidReason::from_code(code)
            .map(InvalidReason::message)
            .unwrap_or("No valid structure for this composition"),
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for InvalidReason {}

/// Errors produced when editing a [`Composition`](crate::Composition).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// The molecule already holds the maximum number of atoms.
    TooManyAtoms { limit: usize },
    /// Adding this non-hydrogen atom would exceed the heavy-atom limit.
    TooManyHeavyAtoms { element: Element, limit: usize },
    /// The symbol does not name an element in the table.
    UnknownElement(String),
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyAtoms { limit } => write!(f, "at most {} atoms allowed", limit),
            Self::TooManyHeavyAtoms { element, limit } => {
                write!(f, "cannot add {}: max {} heavy atoms", element, limit)
            }
            Self::UnknownElement(sym) => write!(f, "unknown element '{}'", sym),
        }
    }
}

impl std::error::Error for CompositionError {}
