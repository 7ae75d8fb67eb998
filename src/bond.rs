#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
}

impl BondOrder {
    pub fn from_u8(order: u8) -> Option<BondOrder> {
        match order {
            1 => Some(BondOrder::Single),
            2 => Some(BondOrder::Double),
            3 => Some(BondOrder::Triple),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    /// The order `by` steps higher, or `None` past a triple bond.
    pub fn raised(self, by: u8) -> Option<BondOrder> {
        BondOrder::from_u8(self.as_u8().checked_add(by)?)
    }

    /// Number of π bonds carried on top of the σ bond.
    pub fn pi_bonds(self) -> u8 {
        self.as_u8() - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn single() -> Self {
        Self::default()
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasBondOrderMut for Bond {
    fn bond_order_mut(&mut self) -> &mut BondOrder {
        &mut self.order
    }
}
