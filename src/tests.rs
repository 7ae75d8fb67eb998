use petgraph::graph::NodeIndex;

use crate::rules::{bond_order_sum, electrons_on_atom, formal_charge_sum, same_arrangement};
use crate::*;

fn lewis(symbols: &[&str], charge: i8) -> Lewis {
    generate(&Composition::from_symbols(symbols.iter().copied(), charge).unwrap())
}

fn center(l: &Lewis) -> NodeIndex {
    l.central_node().unwrap()
}

fn central_doubles(s: &LewisStructure, c: NodeIndex) -> usize {
    s.bonds_of(c)
        .filter(|&e| s.bond(e).order == BondOrder::Double)
        .count()
}

#[test]
fn carbon_dioxide() {
    let l = lewis(&["C", "O", "O"], 0);
    assert!(l.is_valid());
    assert_eq!(l.central(), Some(0));
    assert_eq!(l.structures().len(), 1);
    let s = &l.structures()[0];
    assert_eq!(bond_order_sum(s, center(&l)), 4);
    assert_eq!(s.atom(center(&l)).lone_pairs, 0);
    assert_eq!(formal_charge_sum(s), 0);

    let info = l.vsepr(0).unwrap();
    assert_eq!(info.electron_geometry, ElectronGeometry::Linear);
    assert_eq!(info.hybridization, Hybridization::SP);
    assert_eq!(info.sigma_bonds, 2);
    assert_eq!(info.pi_bonds, 2);
}

#[test]
fn nitrate_resonance() {
    let l = lewis(&["N", "O", "O", "O"], -1);
    assert_eq!(l.central(), Some(0));
    assert_eq!(l.structures().len(), 3);
    for s in l.structures() {
        assert_eq!(central_doubles(s, center(&l)), 1);
        assert_eq!(bond_order_sum(s, center(&l)), 4);
        assert_eq!(formal_charge_sum(s), -1);
    }
}

#[test]
fn sulfate_expands_and_caps() {
    let l = lewis(&["S", "O", "O", "O", "O"], -2);
    assert_eq!(l.central(), Some(0));
    assert_eq!(l.structures().len(), MAX_RESONANCE);
    for s in l.structures() {
        assert_eq!(bond_order_sum(s, center(&l)), 6);
        assert_eq!(s.atom(center(&l)).formal_charge, 0);
    }
    let info = l.vsepr(0).unwrap();
    assert_eq!(info.shape, Shape::Tetrahedral);
}

#[test]
fn ammonium() {
    let l = lewis(&["N", "H", "H", "H", "H"], 1);
    assert_eq!(l.central(), Some(0));
    assert_eq!(l.structures().len(), 1);
    let s = &l.structures()[0];
    assert_eq!(s.bond_count(), 4);
    assert!(s.bonds().all(|e| s.bond(e).order == BondOrder::Single));
    assert_eq!(s.atom(center(&l)).lone_pairs, 0);
    assert_eq!(s.atom(center(&l)).formal_charge, 1);
}

#[test]
fn two_helium_atoms_have_no_skeleton() {
    let l = lewis(&["He", "He"], 0);
    assert!(!l.is_valid());
    assert_eq!(l.invalid_reason(), Some(InvalidReason::Skeleton));
    assert_eq!(l.message(), "Cannot build a valid bond skeleton");
}

#[test]
fn electron_deficient_boron() {
    let l = lewis(&["B", "F", "F", "F"], 0);
    assert!(l.is_valid());
    let s = &l.structures()[0];
    assert_eq!(electrons_on_atom(s, center(&l)), 6);
    assert_eq!(l.vsepr(0).unwrap().shape, Shape::TrigonalPlanar);
}

#[test]
fn expanded_octets() {
    let sf6 = lewis(&["S", "F", "F", "F", "F", "F", "F"], 0);
    assert_eq!(sf6.central(), Some(0));
    let info = sf6.vsepr(0).unwrap();
    assert_eq!(info.shape, Shape::Octahedral);
    assert_eq!(info.hybridization, Hybridization::SP3D2);

    let pcl5 = lewis(&["P", "Cl", "Cl", "Cl", "Cl", "Cl"], 0);
    assert_eq!(pcl5.vsepr(0).unwrap().shape, Shape::TrigonalBipyramidal);

    let xef4 = lewis(&["Xe", "F", "F", "F", "F"], 0);
    let info = xef4.vsepr(0).unwrap();
    assert_eq!(info.lone_pairs, 2);
    assert_eq!(info.shape, Shape::SquarePlanar);
}

#[test]
fn interhalogen_center() {
    let l = lewis(&["Cl", "F", "F", "F"], 0);
    assert_eq!(l.central(), Some(0));
    let info = l.vsepr(0).unwrap();
    assert_eq!((info.bond_pairs, info.lone_pairs), (3, 2));
    assert_eq!(info.shape, Shape::TShaped);
}

#[test]
fn phosphate_and_carbonate() {
    let po4 = lewis(&["P", "O", "O", "O", "O"], -3);
    assert_eq!(po4.central(), Some(0));
    assert_eq!(po4.structures().len(), 4);
    for s in po4.structures() {
        assert_eq!(bond_order_sum(s, center(&po4)), 5);
        assert_eq!(formal_charge_sum(s), -3);
    }

    let co3 = lewis(&["C", "O", "O", "O"], -2);
    assert_eq!(co3.central(), Some(0));
    assert_eq!(co3.structures().len(), 3);
}

#[test]
fn simple_hydrides() {
    let nh3 = lewis(&["N", "H", "H", "H"], 0);
    assert_eq!(nh3.vsepr(0).unwrap().shape, Shape::TrigonalPyramidal);

    let ch4 = lewis(&["C", "H", "H", "H", "H"], 0);
    assert_eq!(ch4.vsepr(0).unwrap().shape, Shape::Tetrahedral);

    let h2o = lewis(&["H", "O", "H"], 0);
    assert_eq!(h2o.central(), Some(1));
    assert_eq!(h2o.vsepr(0).unwrap().shape, Shape::Bent);
}

#[test]
fn rejected_electron_counts() {
    assert_eq!(
        lewis(&["N", "O"], 0).invalid_reason(),
        Some(InvalidReason::OddElectrons)
    );
    assert_eq!(
        lewis(&["H"], 2).invalid_reason(),
        Some(InvalidReason::NegativeElectrons)
    );
    assert_eq!(
        generate(&Composition::empty()).invalid_reason(),
        Some(InvalidReason::NoAtoms)
    );
}

#[test]
fn resonance_forms_are_distinct() {
    let l = lewis(&["S", "O", "O", "O", "O"], -2);
    let forms = l.structures();
    for i in 0..forms.len() {
        for j in (i + 1)..forms.len() {
            assert!(!same_arrangement(&forms[i], &forms[j]), "{i} vs {j}");
        }
    }
}

#[test]
fn restricted_halogens_reject_iodine_heptafluoride() {
    let comp = Composition::from_symbols(["I", "F", "F", "F", "F", "F", "F", "F"], 0).unwrap();
    assert!(generate(&comp).is_valid());

    let config = Config {
        halogen_valence: HalogenValence::Restricted,
        ..Config::default()
    };
    let l = generate_with(&comp, &config);
    assert_eq!(l.invalid_reason(), Some(InvalidReason::Skeleton));
}

#[test]
fn anions_with_three_or_more_central_lone_pairs() {
    let icl3 = lewis(&["I", "Cl", "Cl", "Cl"], -2);
    let info = icl3.vsepr(0).unwrap();
    assert_eq!((info.bond_pairs, info.lone_pairs), (3, 3));
    assert!(info.from_table);
    assert_eq!(info.shape, Shape::TShaped);

    let xef4 = lewis(&["Xe", "F", "F", "F", "F"], -2);
    let info = xef4.vsepr(0).unwrap();
    assert_eq!((info.bond_pairs, info.lone_pairs), (4, 3));
    assert_eq!(info.electron_geometry, ElectronGeometry::PentagonalBipyramidal);
    assert_eq!(info.shape, Shape::Planar);
}
