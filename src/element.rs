use crate::config::HalogenValence;

/// Number of entries in the element table.
pub const NUM_ELEMENTS: usize = 34;

/// Main-group elements of periods 1–5 (groups 1, 2, 13–18).
///
/// The discriminant is the element's index into the static tables below,
/// not its atomic number; use [`Element::atomic_num`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 0,
    He = 1,
    Li = 2,
    Be = 3,
    B = 4,
    C = 5,
    N = 6,
    O = 7,
    F = 8,
    Ne = 9,
    Na = 10,
    Mg = 11,
    Al = 12,
    Si = 13,
    P = 14,
    S = 15,
    Cl = 16,
    Ar = 17,
    K = 18,
    Ca = 19,
    Ga = 20,
    Ge = 21,
    As = 22,
    Se = 23,
    Br = 24,
    Kr = 25,
    Rb = 26,
    Sr = 27,
    In = 28,
    Sn = 29,
    Sb = 30,
    Te = 31,
    I = 32,
    Xe = 33,
}

impl Element {
    pub const ALL: [Element; NUM_ELEMENTS] = [
        Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C,
        Element::N, Element::O, Element::F, Element::Ne, Element::Na, Element::Mg,
        Element::Al, Element::Si, Element::P, Element::S, Element::Cl, Element::Ar,
        Element::K, Element::Ca, Element::Ga, Element::Ge, Element::As, Element::Se,
        Element::Br, Element::Kr, Element::Rb, Element::Sr, Element::In, Element::Sn,
        Element::Sb, Element::Te, Element::I, Element::Xe,
    ];

    pub fn from_index(idx: usize) -> Option<Element> {
        Self::ALL.get(idx).copied()
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        Self::ALL.iter().copied().find(|e| e.symbol() == s)
    }

    pub fn from_atomic_num(n: u8) -> Option<Element> {
        Self::ALL.iter().copied().find(|e| e.atomic_num() == n)
    }

    /// Element occupying a cell of the periodic grid, if the table has one.
    pub fn at(period: u8, group: u8) -> Option<Element> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.period() == period && e.group() == group)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        DATA[self.index()].symbol
    }

    pub fn name(self) -> &'static str {
        DATA[self.index()].name
    }

    pub fn atomic_num(self) -> u8 {
        DATA[self.index()].atomic_num
    }

    pub fn valence_electrons(self) -> u8 {
        DATA[self.index()].valence
    }

    /// Typical number of single bonds the element forms.
    pub fn bond_capacity(self) -> u8 {
        DATA[self.index()].bond_cap
    }

    /// Pauling electronegativity scaled by ten; `0` for noble gases without a value.
    pub fn electronegativity(self) -> u8 {
        DATA[self.index()].eneg
    }

    pub fn period(self) -> u8 {
        DATA[self.index()].period
    }

    pub fn group(self) -> u8 {
        DATA[self.index()].group
    }

    pub fn is_hydrogen(self) -> bool {
        self == Element::H
    }

    pub fn is_halogen(self) -> bool {
        self.group() == 17
    }

    /// Halogens and anything that forms at most one bond tend to sit at the
    /// ends of a skeleton.
    pub fn is_terminal_kind(self) -> bool {
        self.is_halogen() || self.bond_capacity() <= 1
    }

    /// Minimum number of electrons the atom must own in a valid structure.
    pub fn required_electrons(self, is_central: bool) -> u8 {
        match self {
            Element::H | Element::He => 2,
            _ if is_central && self.group() == 2 => 4,
            _ if is_central && self.group() == 13 => 6,
            _ => 8,
        }
    }

    /// Maximum number of bonds (counted as single bonds) the atom may take
    /// while the skeleton is built.
    ///
    /// Central atoms get room for ammonium-like cations (period 2, group 15,
    /// positive molecular charge) and for expanded valence from period 3 on.
    pub fn bond_limit(self, is_central: bool, charge: i8, halogens: HalogenValence) -> u8 {
        let mut limit = self.bond_capacity();
        if !is_central {
            return limit;
        }

        if self.period() == 2 && self.group() == 15 && charge > 0 {
            limit = limit.max(4);
        }

        if self.period() >= 3 {
            match self.group() {
                15 => limit = limit.max(5),
                16 => limit = limit.max(6),
                17 => limit = limit.max(halogens.ceiling()),
                _ => {}
            }
        }

        limit
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

struct ElementData {
    symbol: &'static str,
    name: &'static str,
    atomic_num: u8,
    valence: u8,
    bond_cap: u8,
    eneg: u8,
    period: u8,
    group: u8,
}

macro_rules! element {
    (
        $sym:literal, $name:literal, $z:literal, $val:literal,
        $cap:literal, $eneg:literal, $per:literal, $grp:literal
    ) => {
        ElementData {
            symbol: $sym,
            name: $name,
            atomic_num: $z,
            valence: $val,
            bond_cap: $cap,
            eneg: $eneg,
            period: $per,
            group: $grp,
        }
    };
}

//              sym   name          Z  val cap eneg per grp
static DATA: [ElementData; NUM_ELEMENTS] = [
    element!("H",  "Hydrogen",     1,  1, 1, 22, 1,  1),
    element!("He", "Helium",       2,  2, 0,  0, 1, 18),
    element!("Li", "Lithium",      3,  1, 1, 10, 2,  1),
    element!("Be", "Beryllium",    4,  2, 2, 16, 2,  2),
    element!("B",  "Boron",        5,  3, 3, 20, 2, 13),
    element!("C",  "Carbon",       6,  4, 4, 26, 2, 14),
    element!("N",  "Nitrogen",     7,  5, 3, 30, 2, 15),
    element!("O",  "Oxygen",       8,  6, 2, 34, 2, 16),
    element!("F",  "Fluorine",     9,  7, 1, 40, 2, 17),
    element!("Ne", "Neon",        10,  8, 0,  0, 2, 18),
    element!("Na", "Sodium",      11,  1, 1,  9, 3,  1),
    element!("Mg", "Magnesium",   12,  2, 2, 13, 3,  2),
    element!("Al", "Aluminum",    13,  3, 3, 16, 3, 13),
    element!("Si", "Silicon",     14,  4, 4, 19, 3, 14),
    element!("P",  "Phosphorus",  15,  5, 5, 22, 3, 15),
    element!("S",  "Sulfur",      16,  6, 6, 26, 3, 16),
    element!("Cl", "Chlorine",    17,  7, 1, 32, 3, 17),
    element!("Ar", "Argon",       18,  8, 0,  0, 3, 18),
    element!("K",  "Potassium",   19,  1, 1,  8, 4,  1),
    element!("Ca", "Calcium",     20,  2, 2, 10, 4,  2),
    element!("Ga", "Gallium",     31,  3, 3, 18, 4, 13),
    element!("Ge", "Germanium",   32,  4, 4, 20, 4, 14),
    element!("As", "Arsenic",     33,  5, 5, 22, 4, 15),
    element!("Se", "Selenium",    34,  6, 6, 26, 4, 16),
    element!("Br", "Bromine",     35,  7, 1, 30, 4, 17),
    element!("Kr", "Krypton",     36,  8, 2, 30, 4, 18),
    element!("Rb", "Rubidium",    37,  1, 1,  8, 5,  1),
    element!("Sr", "Strontium",   38,  2, 2, 10, 5,  2),
    element!("In", "Indium",      49,  3, 3, 18, 5, 13),
    element!("Sn", "Tin",         50,  4, 4, 20, 5, 14),
    element!("Sb", "Antimony",    51,  5, 5, 21, 5, 15),
    element!("Te", "Tellurium",   52,  6, 6, 21, 5, 16),
    element!("I",  "Iodine",      53,  7, 1, 27, 5, 17),
    element!("Xe", "Xenon",       54,  8, 4, 26, 5, 18),
];
