use crate::bond::BondOrder;
use crate::element::Element;

pub trait HasElement {
    fn element(&self) -> Element;
}

pub trait HasLonePairs {
    fn lone_pairs(&self) -> u8;
}

pub trait HasLonePairsMut {
    fn lone_pairs_mut(&mut self) -> &mut u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasFormalChargeMut {
    fn formal_charge_mut(&mut self) -> &mut i8;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

pub trait HasBondOrderMut {
    fn bond_order_mut(&mut self) -> &mut BondOrder;
}
